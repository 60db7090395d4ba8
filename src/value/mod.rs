//! Typed Value Codec Module
//!
//! Pure, total encode/decode function pairs mapping primitive and composite
//! values to and from raw byte sequences. No file I/O happens here.
//!
//! ## Supported Kinds
//!
//! | kind | payload | tag |
//! |---|---|---|
//! | 32-bit float | 4 bytes | `Float` |
//! | boolean | 1 byte | `Bool` |
//! | 32-bit signed integer | 4 bytes | `Int` |
//! | text | u32 length prefix + UTF-8 | `Text` |
//! | enumeration | 1/2/4/8 bytes, caller-chosen width | `Enum` |
//! | vector | 3 × f32 | `Vector` |
//! | rotator | 3 × f32 | `Rotator` |
//! | transform | 10 × f32 | `Transform` |
//!
//! Each width-specific enumeration encoder has its own paired decoder; the
//! [`Value`] dispatch additionally infers the width from the payload length,
//! which is unambiguous across the four sizes.

mod codec;
mod types;

pub use codec::{
    decode_bool, decode_enum_u16, decode_enum_u32, decode_enum_u64, decode_enum_u8, decode_f32,
    decode_i32, decode_rotator, decode_text, decode_transform, decode_vec3, encode_bool,
    encode_enum_u16, encode_enum_u32, encode_enum_u64, encode_enum_u8, encode_f32, encode_i32,
    encode_rotator, encode_text, encode_transform, encode_vec3, EnumWidth, TRANSFORM_SIZE,
    VEC3_SIZE,
};
pub use types::{Quat, Rotator, Transform, Vec3};

use crate::error::{Result, SaveError};
use crate::record::DataType;

/// A typed value paired with its type tag
///
/// The ergonomic layer over the paired codec functions: encoding yields a
/// `(tag, payload)` pair ready for the store, and decoding dispatches on the
/// tag read back from a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(f32),
    Bool(bool),
    Int(i32),
    Text(String),
    /// An enumeration value together with the width it is encoded at
    ///
    /// Values wider than the chosen width are truncated on encode.
    Enum { width: EnumWidth, value: u64 },
    Vector(Vec3),
    Rotator(Rotator),
    Transform(Transform),
}

impl Value {
    /// The type tag for this value
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Float(_) => DataType::Float,
            Value::Bool(_) => DataType::Bool,
            Value::Int(_) => DataType::Int,
            Value::Text(_) => DataType::Text,
            Value::Enum { .. } => DataType::Enum,
            Value::Vector(_) => DataType::Vector,
            Value::Rotator(_) => DataType::Rotator,
            Value::Transform(_) => DataType::Transform,
        }
    }

    /// Encode into a `(tag, payload)` pair ready for the store
    pub fn encode(&self) -> (DataType, Vec<u8>) {
        let payload = match self {
            Value::Float(v) => encode_f32(*v),
            Value::Bool(v) => encode_bool(*v),
            Value::Int(v) => encode_i32(*v),
            Value::Text(v) => encode_text(v),
            Value::Enum { width, value } => match width {
                EnumWidth::U8 => encode_enum_u8(*value as u8),
                EnumWidth::U16 => encode_enum_u16(*value as u16),
                EnumWidth::U32 => encode_enum_u32(*value as u32),
                EnumWidth::U64 => encode_enum_u64(*value),
            },
            Value::Vector(v) => encode_vec3(v),
            Value::Rotator(v) => encode_rotator(v),
            Value::Transform(v) => encode_transform(v),
        };

        (self.data_type(), payload)
    }

    /// Decode a payload against its type tag
    pub fn decode(data_type: DataType, bytes: &[u8]) -> Result<Value> {
        match data_type {
            DataType::Float => Ok(Value::Float(decode_f32(bytes)?)),
            DataType::Bool => Ok(Value::Bool(decode_bool(bytes)?)),
            DataType::Int => Ok(Value::Int(decode_i32(bytes)?)),
            DataType::Text => Ok(Value::Text(decode_text(bytes)?)),
            DataType::Enum => {
                let width = EnumWidth::from_byte_len(bytes.len()).ok_or_else(|| {
                    SaveError::ValueDecode(format!(
                        "enum payload of {} bytes matches no supported width",
                        bytes.len()
                    ))
                })?;
                let value = match width {
                    EnumWidth::U8 => decode_enum_u8(bytes)? as u64,
                    EnumWidth::U16 => decode_enum_u16(bytes)? as u64,
                    EnumWidth::U32 => decode_enum_u32(bytes)? as u64,
                    EnumWidth::U64 => decode_enum_u64(bytes)?,
                };
                Ok(Value::Enum { width, value })
            }
            DataType::Vector => Ok(Value::Vector(decode_vec3(bytes)?)),
            DataType::Rotator => Ok(Value::Rotator(decode_rotator(bytes)?)),
            DataType::Transform => Ok(Value::Transform(decode_transform(bytes)?)),
        }
    }
}
