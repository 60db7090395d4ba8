//! Typed value codecs
//!
//! Fixed-layout encode/decode function pairs, one pair per supported value
//! kind. Each function produces or consumes a self-contained byte sequence
//! suitable as a record's payload. Encoding never fails; decoding fails only
//! when the byte sequence does not have the exact expected shape. All
//! multi-byte fields are little-endian.

use crate::error::{Result, SaveError};

use super::types::{Quat, Rotator, Transform, Vec3};

/// Encoded size of a [`Vec3`] or [`Rotator`] payload
pub const VEC3_SIZE: usize = 12;

/// Encoded size of a [`Transform`] payload: 3 + 4 + 3 floats
pub const TRANSFORM_SIZE: usize = 40;

// =============================================================================
// Primitives
// =============================================================================

/// Encode a 32-bit float to 4 bytes
pub fn encode_f32(value: f32) -> Vec<u8> {
    value.to_le_bytes().to_vec()
}

/// Decode a 32-bit float from exactly 4 bytes
pub fn decode_f32(bytes: &[u8]) -> Result<f32> {
    let arr: [u8; 4] = bytes
        .try_into()
        .map_err(|_| wrong_len("f32", 4, bytes.len()))?;
    Ok(f32::from_le_bytes(arr))
}

/// Encode a boolean to a single byte (0 or 1)
pub fn encode_bool(value: bool) -> Vec<u8> {
    vec![value as u8]
}

/// Decode a boolean from exactly 1 byte; any nonzero byte is `true`
pub fn decode_bool(bytes: &[u8]) -> Result<bool> {
    match bytes {
        [b] => Ok(*b != 0),
        _ => Err(wrong_len("bool", 1, bytes.len())),
    }
}

/// Encode a 32-bit signed integer to 4 bytes
pub fn encode_i32(value: i32) -> Vec<u8> {
    value.to_le_bytes().to_vec()
}

/// Decode a 32-bit signed integer from exactly 4 bytes
pub fn decode_i32(bytes: &[u8]) -> Result<i32> {
    let arr: [u8; 4] = bytes
        .try_into()
        .map_err(|_| wrong_len("i32", 4, bytes.len()))?;
    Ok(i32::from_le_bytes(arr))
}

// =============================================================================
// Text
// =============================================================================

/// Encode text as a u32 length prefix followed by UTF-8 bytes
pub fn encode_text(value: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(4 + value.len());
    bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
    bytes.extend_from_slice(value.as_bytes());
    bytes
}

/// Decode length-prefixed UTF-8 text
///
/// The declared length must match the remaining payload exactly; a prefix
/// that overshoots or undershoots the buffer is a decode failure.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    if bytes.len() < 4 {
        return Err(SaveError::ValueDecode(format!(
            "text payload too short for length prefix: {} bytes",
            bytes.len()
        )));
    }

    let declared = u32::from_le_bytes(bytes[0..4].try_into().unwrap()) as usize;
    let remaining = bytes.len() - 4;

    if declared != remaining {
        return Err(SaveError::ValueDecode(format!(
            "text length prefix {} does not match {} remaining bytes",
            declared, remaining
        )));
    }

    String::from_utf8(bytes[4..].to_vec())
        .map_err(|e| SaveError::ValueDecode(format!("text is not valid UTF-8: {}", e)))
}

// =============================================================================
// Enumerations
// =============================================================================

/// Width of an enumeration payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumWidth {
    U8,
    U16,
    U32,
    U64,
}

impl EnumWidth {
    /// Payload size in bytes for this width
    pub fn byte_len(&self) -> usize {
        match self {
            EnumWidth::U8 => 1,
            EnumWidth::U16 => 2,
            EnumWidth::U32 => 4,
            EnumWidth::U64 => 8,
        }
    }

    /// Infer the width an encoder used from its payload length
    pub fn from_byte_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(EnumWidth::U8),
            2 => Some(EnumWidth::U16),
            4 => Some(EnumWidth::U32),
            8 => Some(EnumWidth::U64),
            _ => None,
        }
    }
}

/// Encode an 8-bit enumeration value
pub fn encode_enum_u8(value: u8) -> Vec<u8> {
    vec![value]
}

/// Decode an 8-bit enumeration value from exactly 1 byte
pub fn decode_enum_u8(bytes: &[u8]) -> Result<u8> {
    match bytes {
        [b] => Ok(*b),
        _ => Err(wrong_len("u8 enum", 1, bytes.len())),
    }
}

/// Encode a 16-bit enumeration value
pub fn encode_enum_u16(value: u16) -> Vec<u8> {
    value.to_le_bytes().to_vec()
}

/// Decode a 16-bit enumeration value from exactly 2 bytes
pub fn decode_enum_u16(bytes: &[u8]) -> Result<u16> {
    let arr: [u8; 2] = bytes
        .try_into()
        .map_err(|_| wrong_len("u16 enum", 2, bytes.len()))?;
    Ok(u16::from_le_bytes(arr))
}

/// Encode a 32-bit enumeration value
pub fn encode_enum_u32(value: u32) -> Vec<u8> {
    value.to_le_bytes().to_vec()
}

/// Decode a 32-bit enumeration value from exactly 4 bytes
pub fn decode_enum_u32(bytes: &[u8]) -> Result<u32> {
    let arr: [u8; 4] = bytes
        .try_into()
        .map_err(|_| wrong_len("u32 enum", 4, bytes.len()))?;
    Ok(u32::from_le_bytes(arr))
}

/// Encode a 64-bit enumeration value
pub fn encode_enum_u64(value: u64) -> Vec<u8> {
    value.to_le_bytes().to_vec()
}

/// Decode a 64-bit enumeration value from exactly 8 bytes
pub fn decode_enum_u64(bytes: &[u8]) -> Result<u64> {
    let arr: [u8; 8] = bytes
        .try_into()
        .map_err(|_| wrong_len("u64 enum", 8, bytes.len()))?;
    Ok(u64::from_le_bytes(arr))
}

// =============================================================================
// Spatial Types
// =============================================================================

/// Encode a vector as three consecutive floats
pub fn encode_vec3(value: &Vec3) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(VEC3_SIZE);
    bytes.extend_from_slice(&value.x.to_le_bytes());
    bytes.extend_from_slice(&value.y.to_le_bytes());
    bytes.extend_from_slice(&value.z.to_le_bytes());
    bytes
}

/// Decode a vector from exactly 12 bytes
pub fn decode_vec3(bytes: &[u8]) -> Result<Vec3> {
    if bytes.len() != VEC3_SIZE {
        return Err(wrong_len("Vec3", VEC3_SIZE, bytes.len()));
    }
    Ok(Vec3::new(f32_at(bytes, 0), f32_at(bytes, 4), f32_at(bytes, 8)))
}

/// Encode a rotator as pitch, yaw, roll floats
pub fn encode_rotator(value: &Rotator) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(VEC3_SIZE);
    bytes.extend_from_slice(&value.pitch.to_le_bytes());
    bytes.extend_from_slice(&value.yaw.to_le_bytes());
    bytes.extend_from_slice(&value.roll.to_le_bytes());
    bytes
}

/// Decode a rotator from exactly 12 bytes
pub fn decode_rotator(bytes: &[u8]) -> Result<Rotator> {
    if bytes.len() != VEC3_SIZE {
        return Err(wrong_len("Rotator", VEC3_SIZE, bytes.len()));
    }
    Ok(Rotator::new(
        f32_at(bytes, 0),
        f32_at(bytes, 4),
        f32_at(bytes, 8),
    ))
}

/// Encode a transform as translation, rotation quaternion, scale
///
/// Layout: translation x/y/z, rotation x/y/z/w, scale x/y/z (ten floats,
/// 40 bytes).
pub fn encode_transform(value: &Transform) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(TRANSFORM_SIZE);
    bytes.extend_from_slice(&encode_vec3(&value.translation));
    bytes.extend_from_slice(&value.rotation.x.to_le_bytes());
    bytes.extend_from_slice(&value.rotation.y.to_le_bytes());
    bytes.extend_from_slice(&value.rotation.z.to_le_bytes());
    bytes.extend_from_slice(&value.rotation.w.to_le_bytes());
    bytes.extend_from_slice(&encode_vec3(&value.scale));
    bytes
}

/// Decode a transform from exactly 40 bytes
pub fn decode_transform(bytes: &[u8]) -> Result<Transform> {
    if bytes.len() != TRANSFORM_SIZE {
        return Err(wrong_len("Transform", TRANSFORM_SIZE, bytes.len()));
    }

    let translation = Vec3::new(f32_at(bytes, 0), f32_at(bytes, 4), f32_at(bytes, 8));
    let rotation = Quat::new(
        f32_at(bytes, 12),
        f32_at(bytes, 16),
        f32_at(bytes, 20),
        f32_at(bytes, 24),
    );
    let scale = Vec3::new(f32_at(bytes, 28), f32_at(bytes, 32), f32_at(bytes, 36));

    Ok(Transform::new(translation, rotation, scale))
}

// =============================================================================
// Private Helpers
// =============================================================================

/// Read a float at a fixed offset; the caller has already checked the length
fn f32_at(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

fn wrong_len(kind: &str, expected: usize, got: usize) -> SaveError {
    SaveError::ValueDecode(format!(
        "expected {} bytes for {}, got {}",
        expected, kind, got
    ))
}
