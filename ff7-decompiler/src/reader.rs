//! A little-endian cursor over a borrowed byte slice.

use crate::error::DecompileError;

/// A position-tracking cursor over a script's raw bytes.
///
/// Mirrors the teacher's own reader conventions (bounds-checked reads that
/// return a typed error rather than panicking) applied to the field-script
/// container's fixed-width little-endian fields.
pub struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Wrap `bytes` for sequential reading starting at offset 0.
    pub fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    /// Current read position.
    pub fn position(&self) -> u32 {
        self.pos as u32
    }

    /// Seek to an absolute offset.
    pub fn seek(&mut self, offset: u32) {
        self.pos = offset as usize;
    }

    /// Remaining unread bytes.
    pub fn remaining(&self) -> &'a [u8] {
        self.bytes.get(self.pos..).unwrap_or(&[])
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` when the cursor has no more bytes to read.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Read a single byte and advance.
    pub fn read_u8(&mut self) -> Result<u8, DecompileError> {
        let byte = *self
            .bytes
            .get(self.pos)
            .ok_or(DecompileError::TruncatedInput { offset: self.position(), needed: 1 })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read a little-endian `u16` and advance.
    pub fn read_u16(&mut self) -> Result<u16, DecompileError> {
        let slice = self.take(2)?;
        Ok(u16::from_le_bytes([slice[0], slice[1]]))
    }

    /// Read a little-endian `u32` and advance.
    pub fn read_u32(&mut self) -> Result<u32, DecompileError> {
        let slice = self.take(4)?;
        Ok(u32::from_le_bytes([slice[0], slice[1], slice[2], slice[3]]))
    }

    /// Read `len` raw bytes and advance.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DecompileError> {
        let end = self.pos + len;
        let slice = self
            .bytes
            .get(self.pos..end)
            .ok_or(DecompileError::TruncatedInput {
                offset: self.position(),
                needed: (end.saturating_sub(self.bytes.len())) as u32,
            })?;
        self.pos = end;
        Ok(slice)
    }

    /// Read a fixed-width, NUL-padded ASCII field and trim trailing NULs.
    pub fn read_cstring_fixed(&mut self, len: usize) -> Result<String, DecompileError> {
        let raw = self.take(len)?;
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
    }
}

#[cfg(test)]
mod tests;
