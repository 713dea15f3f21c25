//! Canonical serializer for cache keys
//!
//! Renders a `Serialize` value into a `serde_json::Value` so that two
//! different values of the same type never render alike:
//!
//! - `None` renders as `null` and `Some(x)` as `[x]`, so `None`, `Some(None)`
//!   and `Some(())` stay apart
//! - object fields and map entries are sorted by name
//! - a struct field skipped during serialization renders as `null`, the same
//!   as an explicit `None`
//! - NaN and infinite floats are rejected
//! - 128-bit integers outside the 64-bit range render as decimal strings
//!
//! Map keys must be strings, chars, integers, bools or unit enum variants.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::ser::{self, Impossible, Serialize};
use serde_json::{Map, Number, Value};

type Error = serde_json::Error;

/// Serializes `value` into its canonical `Value`.
pub(crate) fn to_canonical_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, Error> {
    value.serialize(CanonicalSerializer)
}

fn reject(msg: impl Display) -> Error {
    <Error as ser::Error>::custom(msg)
}

fn object(fields: BTreeMap<String, Value>) -> Value {
    Value::Object(fields.into_iter().collect::<Map<String, Value>>())
}

fn tagged(variant: &str, value: Value) -> Value {
    let mut fields = BTreeMap::new();
    fields.insert(variant.to_string(), value);
    object(fields)
}

fn float(v: f64) -> Result<Value, Error> {
    Number::from_f64(v)
        .map(Value::Number)
        .ok_or_else(|| reject(format!("non-finite float {} cannot be part of a cache key", v)))
}

// == Value Serializer ==
struct CanonicalSerializer;

impl ser::Serializer for CanonicalSerializer {
    type Ok = Value;
    type Error = Error;
    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = SeqBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = MapBuilder;
    type SerializeStructVariant = MapBuilder;

    fn serialize_bool(self, v: bool) -> Result<Value, Error> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, Error> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, Error> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, Error> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, Error> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value, Error> {
        Ok(match i64::try_from(v) {
            Ok(small) => Value::from(small),
            Err(_) => Value::String(v.to_string()),
        })
    }

    fn serialize_u8(self, v: u8) -> Result<Value, Error> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, Error> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, Error> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, Error> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value, Error> {
        Ok(match u64::try_from(v) {
            Ok(small) => Value::from(small),
            Err(_) => Value::String(v.to_string()),
        })
    }

    fn serialize_f32(self, v: f32) -> Result<Value, Error> {
        float(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, Error> {
        float(v)
    }

    fn serialize_char(self, v: char) -> Result<Value, Error> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, Error> {
        Ok(Value::String(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, Error> {
        Ok(Value::Array(v.iter().map(|b| Value::from(*b)).collect()))
    }

    fn serialize_none(self) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, Error> {
        Ok(Value::Array(vec![value.serialize(CanonicalSerializer)?]))
    }

    fn serialize_unit(self) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Value, Error> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, Error> {
        Ok(tagged(variant, value.serialize(CanonicalSerializer)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder, Error> {
        Ok(SeqBuilder::new(None, len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder, Error> {
        Ok(SeqBuilder::new(None, len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SeqBuilder, Error> {
        Ok(SeqBuilder::new(None, len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, Error> {
        Ok(SeqBuilder::new(Some(variant), len))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapBuilder, Error> {
        Ok(MapBuilder::new(None))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<MapBuilder, Error> {
        Ok(MapBuilder::new(None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<MapBuilder, Error> {
        Ok(MapBuilder::new(Some(variant)))
    }
}

// == Sequences ==
struct SeqBuilder {
    variant: Option<&'static str>,
    items: Vec<Value>,
}

impl SeqBuilder {
    fn new(variant: Option<&'static str>, len: usize) -> Self {
        Self {
            variant,
            items: Vec::with_capacity(len),
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        self.items.push(value.serialize(CanonicalSerializer)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let array = Value::Array(self.items);
        match self.variant {
            Some(variant) => tagged(variant, array),
            None => array,
        }
    }
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        self.push(value)
    }

    fn end(self) -> Result<Value, Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        self.push(value)
    }

    fn end(self) -> Result<Value, Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SeqBuilder {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        self.push(value)
    }

    fn end(self) -> Result<Value, Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SeqBuilder {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        self.push(value)
    }

    fn end(self) -> Result<Value, Error> {
        Ok(self.finish())
    }
}

// == Maps and Structs ==
struct MapBuilder {
    variant: Option<&'static str>,
    fields: BTreeMap<String, Value>,
    pending_key: Option<String>,
}

impl MapBuilder {
    fn new(variant: Option<&'static str>) -> Self {
        Self {
            variant,
            fields: BTreeMap::new(),
            pending_key: None,
        }
    }

    fn insert<T: ?Sized + Serialize>(&mut self, key: String, value: &T) -> Result<(), Error> {
        self.fields.insert(key, value.serialize(CanonicalSerializer)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let fields = object(self.fields);
        match self.variant {
            Some(variant) => tagged(variant, fields),
            None => fields,
        }
    }
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), Error> {
        self.pending_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| reject("map value serialized before its key"))?;
        self.insert(key, value)
    }

    fn end(self) -> Result<Value, Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for MapBuilder {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        self.insert(key.to_string(), value)
    }

    fn skip_field(&mut self, key: &'static str) -> Result<(), Error> {
        self.fields.insert(key.to_string(), Value::Null);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for MapBuilder {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        self.insert(key.to_string(), value)
    }

    fn skip_field(&mut self, key: &'static str) -> Result<(), Error> {
        self.fields.insert(key.to_string(), Value::Null);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(self.finish())
    }
}

// == Map Keys ==
struct MapKeySerializer;

fn unsupported_key() -> Error {
    reject("map keys must be strings, integers, bools or unit variants")
}

impl ser::Serializer for MapKeySerializer {
    type Ok = String;
    type Error = Error;
    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String, Error> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String, Error> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String, Error> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String, Error> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String, Error> {
        Ok(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<String, Error> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String, Error> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String, Error> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String, Error> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String, Error> {
        Ok(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<String, Error> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String, Error> {
        Err(unsupported_key())
    }

    fn serialize_f64(self, _v: f64) -> Result<String, Error> {
        Err(unsupported_key())
    }

    fn serialize_char(self, v: char) -> Result<String, Error> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String, Error> {
        Ok(v.to_owned())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, Error> {
        Err(unsupported_key())
    }

    fn serialize_none(self) -> Result<String, Error> {
        Err(unsupported_key())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, _value: &T) -> Result<String, Error> {
        Err(unsupported_key())
    }

    fn serialize_unit(self) -> Result<String, Error> {
        Err(unsupported_key())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, Error> {
        Err(unsupported_key())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<String, Error> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, Error> {
        Err(unsupported_key())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Error> {
        Err(unsupported_key())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Error> {
        Err(unsupported_key())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Error> {
        Err(unsupported_key())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Error> {
        Err(unsupported_key())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Error> {
        Err(unsupported_key())
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Error> {
        Err(unsupported_key())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Error> {
        Err(unsupported_key())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Serialize)]
    enum Shape {
        Point,
        Circle(f64),
        Rect(u32, u32),
        Labeled { name: String },
    }

    #[derive(Serialize)]
    struct Meters(u32);

    #[test]
    fn test_options_are_tagged() {
        assert_eq!(to_canonical_value(&None::<u8>).unwrap(), json!(null));
        assert_eq!(to_canonical_value(&Some(3u8)).unwrap(), json!([3]));
        assert_eq!(to_canonical_value(&Some(None::<u8>)).unwrap(), json!([null]));
        assert_eq!(to_canonical_value(&Some(Some(1u8))).unwrap(), json!([[1]]));
        assert_eq!(to_canonical_value(&Some(())).unwrap(), json!([null]));
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(to_canonical_value(&v).is_err());
        }
        assert!(to_canonical_value(&f32::NAN).is_err());
        assert_eq!(to_canonical_value(&1.5f64).unwrap(), json!(1.5));
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(to_canonical_value(&7i128).unwrap(), json!(7));
        assert_eq!(
            to_canonical_value(&u128::MAX).unwrap(),
            json!(u128::MAX.to_string())
        );
    }

    #[test]
    fn test_enum_variants() {
        assert_eq!(to_canonical_value(&Shape::Point).unwrap(), json!("Point"));
        assert_eq!(
            to_canonical_value(&Shape::Circle(2.0)).unwrap(),
            json!({"Circle": 2.0})
        );
        assert_eq!(
            to_canonical_value(&Shape::Rect(1, 2)).unwrap(),
            json!({"Rect": [1, 2]})
        );
        assert_eq!(
            to_canonical_value(&Shape::Labeled {
                name: "a".to_string()
            })
            .unwrap(),
            json!({"Labeled": {"name": "a"}})
        );
    }

    #[test]
    fn test_newtype_struct_is_transparent() {
        assert_eq!(to_canonical_value(&Meters(4)).unwrap(), json!(4));
    }

    #[test]
    fn test_integer_map_keys_render_as_strings() {
        let mut map = HashMap::new();
        map.insert(2u16, "b");
        map.insert(1u16, "a");

        assert_eq!(
            to_canonical_value(&map).unwrap().to_string(),
            r#"{"1":"a","2":"b"}"#
        );
    }

    #[test]
    fn test_tuple_map_keys_rejected() {
        let mut map = HashMap::new();
        map.insert((1u8, 2u8), 3u8);

        let err = to_canonical_value(&map).unwrap_err();
        assert!(err.to_string().contains("map keys"));
    }
}
