//! Binary serialization infrastructure for OPC UA
//!
//! This module provides the reader/writer pair and traits for the OPC UA
//! Binary encoding. All multi-byte integers use little-endian byte order as
//! specified in IEC 62541-6. Strings, byte strings and arrays carry an
//! `int32` length prefix where `-1` denotes null, distinct from zero length.

use thiserror::Error;

pub mod traits;

pub use traits::{array_byte_len, decode_array, encode_array, BinaryDecode, BinaryEncode};

/// Errors raised while encoding or decoding UA Binary data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinaryError {
    /// The input ended before the requested number of bytes could be read.
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    ShortRead { needed: usize, remaining: usize },

    /// A length prefix was negative (other than the null sentinel `-1`) or
    /// larger than the remaining input can possibly satisfy.
    #[error("invalid length prefix: {0}")]
    BadLength(i64),

    /// String bytes were not valid UTF-8.
    #[error("string bytes are not valid UTF-8")]
    BadUtf8,

    /// The leading byte of a NodeId did not select a known encoding.
    #[error("unknown NodeId encoding: 0x{0:02x}")]
    UnknownNodeIdVariant(u8),

    /// The TypeId of a service message is not in the registry.
    #[error("unknown service type id: {0}")]
    UnknownService(u32),

    /// An enumeration or encoding-mask byte carried a value outside the
    /// defined set.
    #[error("invalid enumeration value: {0}")]
    InvalidEnumValue(u32),

    /// Recursive structures (DiagnosticInfo) nested beyond the decode limit.
    #[error("structure nested too deeply")]
    DepthExceeded,
}

pub type Result<T> = std::result::Result<T, BinaryError>;

/// Cursor-based reader over a borrowed byte slice.
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Reader { buf, pos: 0 }
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Current cursor position from the start of the slice.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(BinaryError::ShortRead {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let b = self.take(8)?;
        Ok(u64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Read exactly `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        Ok(self.take(n)?.to_vec())
    }

    /// Read a length-prefixed byte string. `None` is the null byte string.
    pub fn read_byte_string(&mut self) -> Result<Option<Vec<u8>>> {
        match self.read_length()? {
            None => Ok(None),
            Some(n) => Ok(Some(self.read_bytes(n)?)),
        }
    }

    /// Read a length-prefixed UTF-8 string. `None` is the null string.
    pub fn read_string(&mut self) -> Result<Option<String>> {
        match self.read_byte_string()? {
            None => Ok(None),
            Some(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| BinaryError::BadUtf8),
        }
    }

    /// Read an array count. `None` is the null array.
    ///
    /// A count that exceeds the remaining input is rejected up front, so a
    /// hostile prefix cannot drive huge allocations.
    pub fn read_array_len(&mut self) -> Result<Option<usize>> {
        self.read_length()
    }

    fn read_length(&mut self) -> Result<Option<usize>> {
        let raw = self.read_i32()?;
        match raw {
            -1 => Ok(None),
            n if n < 0 => Err(BinaryError::BadLength(i64::from(n))),
            n => {
                let n = n as usize;
                if n > self.remaining() {
                    return Err(BinaryError::BadLength(i64::from(raw)));
                }
                Ok(Some(n))
            }
        }
    }
}

/// Appending writer over an owned buffer.
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Writer::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Writer {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.write_u8(value as u8);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i16(&mut self, value: i16) {
        self.write_u16(value as u16);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i32(&mut self, value: i32) {
        self.write_u32(value as u32);
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.write_u64(value as u64);
    }

    pub fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits());
    }

    pub fn write_f64(&mut self, value: f64) {
        self.write_u64(value.to_bits());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Write a length-prefixed byte string; `None` writes the null sentinel.
    pub fn write_byte_string(&mut self, value: Option<&[u8]>) -> Result<()> {
        match value {
            None => {
                self.write_i32(-1);
                Ok(())
            }
            Some(bytes) => {
                self.write_length(bytes.len())?;
                self.write_bytes(bytes);
                Ok(())
            }
        }
    }

    /// Write a length-prefixed UTF-8 string; `None` writes the null sentinel.
    pub fn write_string(&mut self, value: Option<&str>) -> Result<()> {
        self.write_byte_string(value.map(str::as_bytes))
    }

    /// Write an array count; `None` writes the null sentinel.
    pub fn write_array_len(&mut self, count: Option<usize>) -> Result<()> {
        match count {
            None => {
                self.write_i32(-1);
                Ok(())
            }
            Some(n) => self.write_length(n),
        }
    }

    fn write_length(&mut self, n: usize) -> Result<()> {
        let n = i32::try_from(n).map_err(|_| BinaryError::BadLength(n as i64))?;
        self.write_i32(n);
        Ok(())
    }
}

/// Encoded size of an optional byte string, including the length prefix.
pub fn byte_string_len(value: Option<&[u8]>) -> usize {
    4 + value.map_or(0, <[u8]>::len)
}

/// Encoded size of an optional string, including the length prefix.
pub fn string_len(value: Option<&str>) -> usize {
    byte_string_len(value.map(str::as_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_roundtrip_little_endian() {
        let mut w = Writer::new();
        w.write_u16(0x1234);
        w.write_u32(0xdead_beef);
        w.write_i64(-2);
        w.write_f64(1.5);
        assert_eq!(&w.as_slice()[..2], &[0x34, 0x12]);
        assert_eq!(&w.as_slice()[2..6], &[0xef, 0xbe, 0xad, 0xde]);

        let bytes = w.into_vec();
        let mut r = Reader::new(&bytes);
        assert_eq!(r.read_u16().unwrap(), 0x1234);
        assert_eq!(r.read_u32().unwrap(), 0xdead_beef);
        assert_eq!(r.read_i64().unwrap(), -2);
        assert_eq!(r.read_f64().unwrap(), 1.5);
        assert!(r.is_empty());
    }

    #[test]
    fn null_string_distinct_from_empty() {
        let mut w = Writer::new();
        w.write_string(None).unwrap();
        w.write_string(Some("")).unwrap();
        assert_eq!(
            w.as_slice(),
            &[0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00]
        );

        let bytes = w.into_vec();
        let mut r = Reader::new(&bytes);
        assert_eq!(r.read_string().unwrap(), None);
        assert_eq!(r.read_string().unwrap(), Some(String::new()));
    }

    #[test]
    fn short_read_reports_remaining() {
        let mut r = Reader::new(&[0x01, 0x02]);
        let err = r.read_u32().unwrap_err();
        assert_eq!(
            err,
            BinaryError::ShortRead {
                needed: 4,
                remaining: 2
            }
        );
    }

    #[test]
    fn negative_length_other_than_null_rejected() {
        let bytes = (-2i32).to_le_bytes();
        let mut r = Reader::new(&bytes);
        assert_eq!(r.read_string().unwrap_err(), BinaryError::BadLength(-2));
    }

    #[test]
    fn oversized_length_rejected_before_allocation() {
        let mut bytes = 0x7fff_ffffi32.to_le_bytes().to_vec();
        bytes.push(0x00);
        let mut r = Reader::new(&bytes);
        assert!(matches!(
            r.read_byte_string().unwrap_err(),
            BinaryError::BadLength(_)
        ));
    }

    #[test]
    fn invalid_utf8_rejected() {
        let mut w = Writer::new();
        w.write_byte_string(Some(&[0xff, 0xfe])).unwrap();
        let bytes = w.into_vec();
        let mut r = Reader::new(&bytes);
        assert_eq!(r.read_string().unwrap_err(), BinaryError::BadUtf8);
    }

    #[test]
    fn bool_nonzero_is_true() {
        let mut r = Reader::new(&[0x00, 0x01, 0x2a]);
        assert!(!r.read_bool().unwrap());
        assert!(r.read_bool().unwrap());
        assert!(r.read_bool().unwrap());
    }
}
