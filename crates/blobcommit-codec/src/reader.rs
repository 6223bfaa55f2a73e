//! Bounds-checked cursor over an input buffer.

use crate::error::{CodecError, Result};

/// Cursor over a byte slice; every read is checked against the end.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Current offset within the buffer.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read exactly `len` bytes.
    pub fn read_exact(&mut self, len: usize, field: &'static str) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(CodecError::unexpected_end(field, self.offset));
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.bytes[start..start + len])
    }

    /// Read a single byte.
    pub fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        Ok(self.read_exact(1, field)?[0])
    }

    /// Read a little-endian `u32`.
    pub fn read_u32_le(&mut self, field: &'static str) -> Result<u32> {
        let bytes = self.read_exact(4, field)?;
        let mut arr = [0u8; 4];
        arr.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(arr))
    }

    /// Read a `u32` length prefix followed by that many bytes.
    pub fn read_len_prefixed(&mut self, field: &'static str) -> Result<&'a [u8]> {
        let len = self.read_u32_le(field)? as usize;
        self.read_exact(len, field)
    }

    /// Read a `u32` element count, rejecting counts that cannot possibly fit
    /// in the rest of the buffer at `min_element_size` bytes each.
    pub fn read_count(&mut self, field: &'static str, min_element_size: usize) -> Result<usize> {
        let count = self.read_u32_le(field)? as usize;
        if count.saturating_mul(min_element_size) > self.remaining() {
            return Err(CodecError::MalformedMessage(format!(
                "{field} declares {count} entries but only {} bytes remain",
                self.remaining()
            )));
        }
        Ok(count)
    }

    /// Fail if anything is left unread.
    pub fn finish(self, context: &'static str) -> Result<()> {
        if !self.is_empty() {
            return Err(CodecError::MalformedMessage(format!(
                "{} trailing bytes after {context}",
                self.remaining()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance() {
        let buf = [1u8, 0, 0, 0, 0xaa, 2, 0, 0, 0, 0xbb, 0xcc];
        let mut r = ByteReader::new(&buf);
        assert_eq!(r.read_u32_le("a").unwrap(), 1);
        assert_eq!(r.read_u8("b").unwrap(), 0xaa);
        assert_eq!(r.read_len_prefixed("c").unwrap(), &[0xbb, 0xcc]);
        assert_eq!(r.position(), buf.len());
        r.finish("test").unwrap();
    }

    #[test]
    fn test_read_past_end() {
        let mut r = ByteReader::new(&[1, 2]);
        assert!(matches!(
            r.read_u32_le("count"),
            Err(CodecError::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_len_prefix_past_end() {
        let mut r = ByteReader::new(&[5, 0, 0, 0, 1, 2]);
        assert!(r.read_len_prefixed("bytes").is_err());
    }

    #[test]
    fn test_count_larger_than_buffer() {
        let mut r = ByteReader::new(&[0xff, 0xff, 0xff, 0xff, 0, 0, 0, 0]);
        assert!(r.read_count("items", 4).is_err());
    }

    #[test]
    fn test_trailing_bytes() {
        let r = ByteReader::new(&[0]);
        assert!(r.finish("test").is_err());
    }
}
