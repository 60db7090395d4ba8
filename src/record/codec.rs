//! Record codec
//!
//! Encoding and decoding functions for the record stream.
//!
//! Decoding distinguishes two outcomes at the end of input:
//! - Clean end-of-stream: the cursor sits exactly at the end of the buffer,
//!   between records (`Ok(None)`).
//! - Truncation: the buffer ends inside a record (a cut-off tag, length
//!   prefix, key, or payload), reported as `Err(Corruption)`.

use crate::error::{Result, SaveError};

use super::{DataType, Record, LEN_PREFIX_SIZE, MAX_FIELD_LEN, TAG_SIZE};

// =============================================================================
// Encoding
// =============================================================================

/// Encode a single record to bytes
///
/// Format: tag (1) + key_len (4) + key + data_len (4) + data
pub fn encode_record(record: &Record) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(record.encoded_len());

    bytes.push(record.data_type as u8);
    bytes.extend_from_slice(&(record.key.len() as u32).to_le_bytes());
    bytes.extend_from_slice(record.key.as_bytes());
    bytes.extend_from_slice(&(record.data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&record.data);

    bytes
}

/// Encode a full record list to a contiguous byte stream
pub fn encode_records(records: &[Record]) -> Vec<u8> {
    let total: usize = records.iter().map(Record::encoded_len).sum();

    let mut bytes = Vec::with_capacity(total);
    for record in records {
        bytes.extend_from_slice(&encode_record(record));
    }

    bytes
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode the next record starting at `pos`, advancing the cursor past it
///
/// Returns:
/// - `Ok(Some(record))` — a well-formed record was read
/// - `Ok(None)` — the cursor was exactly at the end of the buffer
/// - `Err(Corruption)` — the buffer ends inside a record, the type tag is
///   unknown, a length prefix is absurd, or the key is not UTF-8
pub fn decode_record(buf: &[u8], pos: &mut usize) -> Result<Option<Record>> {
    if *pos == buf.len() {
        return Ok(None);
    }
    if *pos > buf.len() {
        return Err(SaveError::Corruption(format!(
            "cursor at {} is past the end of a {}-byte stream",
            pos,
            buf.len()
        )));
    }

    let tag_offset = *pos;
    let tag = buf[tag_offset];
    *pos += TAG_SIZE;

    let data_type = DataType::from_tag(tag).ok_or_else(|| {
        SaveError::Corruption(format!(
            "unknown type tag 0x{:02x} at byte {}",
            tag, tag_offset
        ))
    })?;

    let key_len = read_len_prefix(buf, pos, "key")?;
    let key_bytes = take_bytes(buf, pos, key_len, "key")?;
    let key = std::str::from_utf8(key_bytes)
        .map_err(|e| SaveError::Corruption(format!("key is not valid UTF-8: {}", e)))?
        .to_string();

    let data_len = read_len_prefix(buf, pos, "payload")?;
    let data = take_bytes(buf, pos, data_len, "payload")?.to_vec();

    Ok(Some(Record {
        key,
        data_type,
        data,
    }))
}

/// Decode an entire byte stream into a record list
///
/// An empty buffer is zero records. Any trailing byte run that does not form
/// a whole record is corruption, never silently dropped.
pub fn decode_records(buf: &[u8]) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut pos = 0;

    while let Some(record) = decode_record(buf, &mut pos)? {
        records.push(record);
    }

    Ok(records)
}

// =============================================================================
// Private Helpers
// =============================================================================

/// Read a little-endian u32 length prefix and validate it against the limit
fn read_len_prefix(buf: &[u8], pos: &mut usize, field: &str) -> Result<usize> {
    if buf.len() - *pos < LEN_PREFIX_SIZE {
        return Err(SaveError::Corruption(format!(
            "truncated {} length prefix at byte {} (need {}, have {})",
            field,
            pos,
            LEN_PREFIX_SIZE,
            buf.len() - *pos
        )));
    }

    let len = u32::from_le_bytes(buf[*pos..*pos + LEN_PREFIX_SIZE].try_into().unwrap());
    *pos += LEN_PREFIX_SIZE;

    if len > MAX_FIELD_LEN {
        return Err(SaveError::Corruption(format!(
            "{} length {} exceeds limit {}",
            field, len, MAX_FIELD_LEN
        )));
    }

    Ok(len as usize)
}

/// Take `len` bytes from the buffer, failing if fewer remain
fn take_bytes<'a>(buf: &'a [u8], pos: &mut usize, len: usize, field: &str) -> Result<&'a [u8]> {
    if buf.len() - *pos < len {
        return Err(SaveError::Corruption(format!(
            "truncated {}: declared {} bytes, only {} remain",
            field,
            len,
            buf.len() - *pos
        )));
    }

    let bytes = &buf[*pos..*pos + len];
    *pos += len;
    Ok(bytes)
}
