//! Dynamic value representation for objects handed to the detector.
//!
//! [`Value`] models the kinds of in-memory objects audio data usually arrives
//! in: plain objects with format fields, generic arrays, raw byte buffers,
//! raw memory blocks and typed numeric arrays. The detector inspects it only
//! through the [`Probe`](crate::Probe) capabilities, never by variant name.
//!
//! ## Creating Values
//!
//! ```rust
//! use audio_format::{value, TypedArray, Value};
//!
//! let samples = Value::from(TypedArray::Float32(vec![0.0, 0.5, -0.5]));
//! let bytes = Value::Buffer(vec![0, 1, 2, 3]);
//! let object = value!({
//!     "channels": 2,
//!     "interleaved": true
//! });
//!
//! assert!(samples.is_typed());
//! assert!(object.is_object());
//! ```
//!
//! ## From JSON
//!
//! `Value` implements `Deserialize`, so any self-describing serde format can
//! produce one:
//!
//! ```rust
//! use audio_format::Value;
//!
//! let value: Value = serde_json::from_str(r#"{"sampleRate": 48000}"#).unwrap();
//! assert_eq!(value.get("sampleRate").and_then(|v| v.as_i64()), Some(48000));
//! ```

use crate::{FieldMap, SampleType};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A dynamically-typed object inspected by the detector.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// A generic ordered sequence.
    Array(Vec<Value>),
    Object(FieldMap),
    /// A raw byte buffer.
    Buffer(Vec<u8>),
    /// A fixed-size raw memory block.
    ArrayBuffer(Vec<u8>),
    /// A typed numeric array.
    Typed(TypedArray),
}

/// A numeric value, either integral or floating point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Converts this number to an `i64` if it has no fractional part and fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use audio_format::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(44100.0).as_i64(), Some(44100));
    /// assert_eq!(Number::Float(2.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

/// A typed numeric array, one variant per element kind.
#[derive(Clone, Debug, PartialEq)]
pub enum TypedArray {
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    /// Bytes that saturate instead of wrapping on assignment.
    Uint8Clamped(Vec<u8>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl TypedArray {
    /// Returns the sample type matching this array's element kind.
    #[must_use]
    pub const fn sample_type(&self) -> SampleType {
        match self {
            TypedArray::Int8(_) => SampleType::Int8,
            TypedArray::Uint8(_) => SampleType::Uint8,
            TypedArray::Uint8Clamped(_) => SampleType::Uint8Clamped,
            TypedArray::Int16(_) => SampleType::Int16,
            TypedArray::Uint16(_) => SampleType::Uint16,
            TypedArray::Int32(_) => SampleType::Int32,
            TypedArray::Uint32(_) => SampleType::Uint32,
            TypedArray::Float32(_) => SampleType::Float32,
            TypedArray::Float64(_) => SampleType::Float64,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            TypedArray::Int8(v) => v.len(),
            TypedArray::Uint8(v) | TypedArray::Uint8Clamped(v) => v.len(),
            TypedArray::Int16(v) => v.len(),
            TypedArray::Uint16(v) => v.len(),
            TypedArray::Int32(v) => v.len(),
            TypedArray::Uint32(v) => v.len(),
            TypedArray::Float32(v) => v.len(),
            TypedArray::Float64(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! typed_array_from {
    ($($elem:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$elem>> for TypedArray {
                fn from(value: Vec<$elem>) -> Self {
                    TypedArray::$variant(value)
                }
            }
        )*
    };
}

typed_array_from! {
    i8 => Int8,
    u8 => Uint8,
    i16 => Int16,
    u16 => Uint16,
    i32 => Int32,
    u32 => Uint32,
    f32 => Float32,
    f64 => Float64,
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_typed(&self) -> bool {
        matches!(self, Value::Typed(_))
    }

    /// Returns whether the value counts as "set" when used as a flag.
    ///
    /// `null`, `false`, zero, NaN and the empty string are falsy; everything
    /// else, including empty containers, is truthy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use audio_format::Value;
    ///
    /// assert!(Value::from(true).is_truthy());
    /// assert!(Value::from("yes").is_truthy());
    /// assert!(Value::Array(vec![]).is_truthy());
    /// assert!(!Value::from(0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => {
                let f = n.as_f64();
                f != 0.0 && !f.is_nan()
            }
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&FieldMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up a field if this value is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(Value::Number(Number::Integer(i))),
                    Err(_) => Ok(Value::Number(Number::Float(value as f64))),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E> {
                Ok(Value::Buffer(value.to_vec()))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = FieldMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Value {
                fn from(value: $int) -> Self {
                    Value::Number(Number::Integer(value as i64))
                }
            }
        )*
    };
}

value_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<FieldMap> for Value {
    fn from(value: FieldMap) -> Self {
        Value::Object(value)
    }
}

impl From<TypedArray> for Value {
    fn from(value: TypedArray) -> Self {
        Value::Typed(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(2u16), Value::Number(Number::Integer(2)));
        assert_eq!(Value::from(44100i64), Value::Number(Number::Integer(44100)));
        assert_eq!(Value::from(0.5f64), Value::Number(Number::Float(0.5)));
        assert_eq!(Value::from("le"), Value::String("le".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
    }

    #[test]
    fn test_typed_array_kinds() {
        let clamped = TypedArray::Uint8Clamped(vec![0, 255, 0, 255]);
        assert_eq!(clamped.sample_type(), SampleType::Uint8Clamped);
        assert_eq!(clamped.len(), 4);

        assert_eq!(TypedArray::from(vec![0.0f64]).sample_type(), SampleType::Float64);
        assert_eq!(TypedArray::from(vec![1i16, 2]).sample_type(), SampleType::Int16);
        assert!(TypedArray::from(Vec::<u32>::new()).is_empty());
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::from(1).is_truthy());
        assert!(Value::Buffer(vec![]).is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(!Value::from(0.0).is_truthy());
        assert!(!Value::from(f64::NAN).is_truthy());
    }

    #[test]
    fn test_deserialize_nested() {
        let value: Value =
            serde_json::from_str(r#"{"shape": [4, 2], "format": {"sampleRate": 48000}}"#).unwrap();

        assert_eq!(
            value.get("shape"),
            Some(&Value::Array(vec![Value::from(4), Value::from(2)]))
        );
        assert_eq!(
            value
                .get("format")
                .and_then(|f| f.get("sampleRate"))
                .and_then(Value::as_i64),
            Some(48000)
        );
    }
}
