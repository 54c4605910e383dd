//! Length-tracking cursor over a byte buffer.
//!
//! The original consumer walked a raw pointer through the payload with no
//! bounds checks, trusting the caller to hand it exactly the expected
//! byte count. The cursor keeps the same sequential fixed-width reads but
//! tracks the remaining length and fails explicitly on underrun instead
//! of reading past the end.

/// Errors that can occur while decoding a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// The buffer ended before the requested field
    Underrun {
        /// Bytes the read needed
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },
}

/// Sequential reader over an immutable byte slice
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of `buf`
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Take the next `N` bytes as a fixed array
    fn take<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        if self.remaining() < N {
            return Err(DecodeError::Underrun {
                needed: N,
                remaining: self.remaining(),
            });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    /// Read a little-endian IEEE-754 binary32
    pub fn read_f32(&mut self) -> Result<f32, DecodeError> {
        self.take::<4>().map(f32::from_le_bytes)
    }

    /// Read a little-endian u16
    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        self.take::<2>().map(u16::from_le_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance_in_order() {
        let mut buf = std::vec::Vec::new();
        buf.extend_from_slice(&1.5f32.to_le_bytes());
        buf.extend_from_slice(&1234u16.to_le_bytes());

        let mut cursor = ByteCursor::new(&buf);
        assert_eq!(cursor.read_f32(), Ok(1.5));
        assert_eq!(cursor.read_u16(), Ok(1234));
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn test_underrun_reports_lengths() {
        let mut cursor = ByteCursor::new(&[0u8; 3]);
        assert_eq!(
            cursor.read_f32(),
            Err(DecodeError::Underrun {
                needed: 4,
                remaining: 3
            })
        );
        // A failed read consumes nothing
        assert_eq!(cursor.remaining(), 3);
    }

    #[test]
    fn test_empty_buffer() {
        let mut cursor = ByteCursor::new(&[]);
        assert_eq!(
            cursor.read_u16(),
            Err(DecodeError::Underrun {
                needed: 2,
                remaining: 0
            })
        );
    }
}
