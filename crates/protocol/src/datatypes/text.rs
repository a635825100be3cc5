//! LocalizedText and QualifiedName

use crate::binary::{string_len, BinaryDecode, BinaryEncode, BinaryError, Reader, Result, Writer};

const LOCALE_PRESENT: u8 = 0x01;
const TEXT_PRESENT: u8 = 0x02;

/// Human-readable text with an optional locale.
///
/// A leading presence mask gates each component, so absent fields occupy no
/// body bytes at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedText {
    pub locale: Option<String>,
    pub text: Option<String>,
}

impl LocalizedText {
    pub fn new(text: impl Into<String>) -> Self {
        LocalizedText {
            locale: None,
            text: Some(text.into()),
        }
    }

    pub fn with_locale(locale: impl Into<String>, text: impl Into<String>) -> Self {
        LocalizedText {
            locale: Some(locale.into()),
            text: Some(text.into()),
        }
    }

    pub fn null() -> Self {
        LocalizedText::default()
    }
}

impl BinaryEncode for LocalizedText {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        let mut mask = 0u8;
        if self.locale.is_some() {
            mask |= LOCALE_PRESENT;
        }
        if self.text.is_some() {
            mask |= TEXT_PRESENT;
        }
        writer.write_u8(mask);
        if let Some(locale) = &self.locale {
            writer.write_string(Some(locale))?;
        }
        if let Some(text) = &self.text {
            writer.write_string(Some(text))?;
        }
        Ok(())
    }

    fn byte_len(&self) -> usize {
        let mut len = 1;
        if let Some(locale) = &self.locale {
            len += string_len(Some(locale));
        }
        if let Some(text) = &self.text {
            len += string_len(Some(text));
        }
        len
    }
}

impl BinaryDecode for LocalizedText {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        let mask = reader.read_u8()?;
        if mask & !(LOCALE_PRESENT | TEXT_PRESENT) != 0 {
            return Err(BinaryError::InvalidEnumValue(u32::from(mask)));
        }
        let locale = if mask & LOCALE_PRESENT != 0 {
            Some(reader.read_string()?.unwrap_or_default())
        } else {
            None
        };
        let text = if mask & TEXT_PRESENT != 0 {
            Some(reader.read_string()?.unwrap_or_default())
        } else {
            None
        };
        Ok(LocalizedText { locale, text })
    }
}

/// A name qualified by a namespace index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QualifiedName {
    pub namespace_index: u16,
    pub name: Option<String>,
}

impl QualifiedName {
    pub fn new(namespace_index: u16, name: impl Into<String>) -> Self {
        QualifiedName {
            namespace_index,
            name: Some(name.into()),
        }
    }

    pub fn null() -> Self {
        QualifiedName::default()
    }
}

impl BinaryEncode for QualifiedName {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u16(self.namespace_index);
        writer.write_string(self.name.as_deref())
    }

    fn byte_len(&self) -> usize {
        2 + string_len(self.name.as_deref())
    }
}

impl BinaryDecode for QualifiedName {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(QualifiedName {
            namespace_index: reader.read_u16()?,
            name: reader.read_string()?,
        })
    }
}
