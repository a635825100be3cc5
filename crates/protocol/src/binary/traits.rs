//! Traits for UA Binary serialization

use super::{string_len, Reader, Result, Writer};

/// Trait for types that can be written in UA Binary form.
pub trait BinaryEncode {
    /// Append this value to the writer.
    fn encode(&self, writer: &mut Writer) -> Result<()>;

    /// The exact number of bytes `encode` appends.
    fn byte_len(&self) -> usize;
}

/// Trait for types that can be read from UA Binary form.
pub trait BinaryDecode: Sized {
    /// Read one value, advancing the reader past it.
    fn decode(reader: &mut Reader<'_>) -> Result<Self>;
}

/// Encode an optional array as `int32` count then elements.
pub fn encode_array<T: BinaryEncode>(writer: &mut Writer, items: Option<&[T]>) -> Result<()> {
    match items {
        None => writer.write_array_len(None),
        Some(items) => {
            writer.write_array_len(Some(items.len()))?;
            for item in items {
                item.encode(writer)?;
            }
            Ok(())
        }
    }
}

/// Decode an optional array; the count was validated against remaining input.
pub fn decode_array<T: BinaryDecode>(reader: &mut Reader<'_>) -> Result<Option<Vec<T>>> {
    match reader.read_array_len()? {
        None => Ok(None),
        Some(count) => {
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(T::decode(reader)?);
            }
            Ok(Some(items))
        }
    }
}

/// Encoded size of an optional array, including the count prefix.
pub fn array_byte_len<T: BinaryEncode>(items: Option<&[T]>) -> usize {
    4 + items.map_or(0, |items| items.iter().map(BinaryEncode::byte_len).sum())
}

impl BinaryEncode for u32 {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_u32(*self);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        4
    }
}

impl BinaryDecode for u32 {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        reader.read_u32()
    }
}

// UA String arrays carry nullable elements on the wire; a null element decodes
// to the empty string, which several peer SDKs also do.
impl BinaryEncode for String {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_string(Some(self))
    }

    fn byte_len(&self) -> usize {
        string_len(Some(self))
    }
}

impl BinaryDecode for String {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(reader.read_string()?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_array_roundtrip() {
        let items = vec!["a".to_string(), "bc".to_string()];
        let mut w = Writer::new();
        encode_array(&mut w, Some(&items)).unwrap();
        assert_eq!(w.len(), array_byte_len(Some(items.as_slice())));

        let bytes = w.into_vec();
        let mut r = Reader::new(&bytes);
        let decoded: Option<Vec<String>> = decode_array(&mut r).unwrap();
        assert_eq!(decoded, Some(items));
    }

    #[test]
    fn null_array_distinct_from_empty() {
        let mut w = Writer::new();
        encode_array::<String>(&mut w, None).unwrap();
        encode_array::<String>(&mut w, Some(&[])).unwrap();
        let bytes = w.into_vec();
        assert_eq!(&bytes[..4], &[0xff, 0xff, 0xff, 0xff]);
        assert_eq!(&bytes[4..], &[0x00, 0x00, 0x00, 0x00]);

        let mut r = Reader::new(&bytes);
        assert_eq!(decode_array::<String>(&mut r).unwrap(), None);
        assert_eq!(decode_array::<String>(&mut r).unwrap(), Some(vec![]));
    }
}
