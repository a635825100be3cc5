//! DiagnosticInfo: optional-field diagnostics attached to responses

use crate::binary::{
    string_len, BinaryDecode, BinaryEncode, BinaryError, Reader, Result, Writer,
};
use crate::datatypes::StatusCode;

const SYMBOLIC_ID: u8 = 0x01;
const NAMESPACE_URI: u8 = 0x02;
const LOCALIZED_TEXT: u8 = 0x04;
const LOCALE: u8 = 0x08;
const ADDITIONAL_INFO: u8 = 0x10;
const INNER_STATUS_CODE: u8 = 0x20;
const INNER_DIAGNOSTIC_INFO: u8 = 0x40;

const ALL_FLAGS: u8 = 0x7f;

// Bound on InnerDiagnosticInfo chains so crafted input cannot blow the stack.
const MAX_NESTING: usize = 64;

/// Vendor diagnostics with a presence mask gating every field.
///
/// The integer fields index the response header's string table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagnosticInfo {
    pub symbolic_id: Option<i32>,
    pub namespace_uri: Option<i32>,
    pub localized_text: Option<i32>,
    pub locale: Option<i32>,
    pub additional_info: Option<String>,
    pub inner_status_code: Option<StatusCode>,
    pub inner_diagnostic_info: Option<Box<DiagnosticInfo>>,
}

impl DiagnosticInfo {
    /// Diagnostics with every field absent; encodes as a single zero byte.
    pub fn null() -> Self {
        DiagnosticInfo::default()
    }

    pub fn is_null(&self) -> bool {
        *self == DiagnosticInfo::default()
    }

    fn mask(&self) -> u8 {
        let mut mask = 0u8;
        if self.symbolic_id.is_some() {
            mask |= SYMBOLIC_ID;
        }
        if self.namespace_uri.is_some() {
            mask |= NAMESPACE_URI;
        }
        if self.localized_text.is_some() {
            mask |= LOCALIZED_TEXT;
        }
        if self.locale.is_some() {
            mask |= LOCALE;
        }
        if self.additional_info.is_some() {
            mask |= ADDITIONAL_INFO;
        }
        if self.inner_status_code.is_some() {
            mask |= INNER_STATUS_CODE;
        }
        if self.inner_diagnostic_info.is_some() {
            mask |= INNER_DIAGNOSTIC_INFO;
        }
        mask
    }

    fn decode_nested(reader: &mut Reader<'_>, depth: usize) -> Result<Self> {
        if depth > MAX_NESTING {
            return Err(BinaryError::DepthExceeded);
        }
        let mask = reader.read_u8()?;
        if mask & !ALL_FLAGS != 0 {
            return Err(BinaryError::InvalidEnumValue(u32::from(mask)));
        }

        let mut info = DiagnosticInfo::default();
        if mask & SYMBOLIC_ID != 0 {
            info.symbolic_id = Some(reader.read_i32()?);
        }
        if mask & NAMESPACE_URI != 0 {
            info.namespace_uri = Some(reader.read_i32()?);
        }
        if mask & LOCALE != 0 {
            info.locale = Some(reader.read_i32()?);
        }
        if mask & LOCALIZED_TEXT != 0 {
            info.localized_text = Some(reader.read_i32()?);
        }
        if mask & ADDITIONAL_INFO != 0 {
            info.additional_info = Some(reader.read_string()?.unwrap_or_default());
        }
        if mask & INNER_STATUS_CODE != 0 {
            info.inner_status_code = Some(StatusCode::decode(reader)?);
        }
        if mask & INNER_DIAGNOSTIC_INFO != 0 {
            info.inner_diagnostic_info = Some(Box::new(Self::decode_nested(reader, depth + 1)?));
        }
        Ok(info)
    }
}

impl BinaryEncode for DiagnosticInfo {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u8(self.mask());
        if let Some(v) = self.symbolic_id {
            writer.write_i32(v);
        }
        if let Some(v) = self.namespace_uri {
            writer.write_i32(v);
        }
        if let Some(v) = self.locale {
            writer.write_i32(v);
        }
        if let Some(v) = self.localized_text {
            writer.write_i32(v);
        }
        if let Some(v) = &self.additional_info {
            writer.write_string(Some(v))?;
        }
        if let Some(v) = self.inner_status_code {
            v.encode(writer)?;
        }
        if let Some(v) = &self.inner_diagnostic_info {
            v.encode(writer)?;
        }
        Ok(())
    }

    fn byte_len(&self) -> usize {
        let mut len = 1;
        for field in [
            self.symbolic_id,
            self.namespace_uri,
            self.locale,
            self.localized_text,
        ] {
            if field.is_some() {
                len += 4;
            }
        }
        if let Some(v) = &self.additional_info {
            len += string_len(Some(v));
        }
        if self.inner_status_code.is_some() {
            len += 4;
        }
        if let Some(v) = &self.inner_diagnostic_info {
            len += v.byte_len();
        }
        len
    }
}

impl BinaryDecode for DiagnosticInfo {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Self::decode_nested(reader, 0)
    }
}
