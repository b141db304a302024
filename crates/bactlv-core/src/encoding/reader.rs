use crate::DecodeError;

/// Bit-addressed cursor over an in-memory buffer.
///
/// Positions are counted in bits from the start of the buffer so that the
/// 4/1/3-bit fields of a tag header can be read in place and a decoder can
/// rewind to any earlier position with [`Reader::reset_to`].
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    buf: &'a [u8],
    bit_pos: usize,
}

impl<'a> Reader<'a> {
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, bit_pos: 0 }
    }

    /// Current position in whole bytes (rounded down).
    pub const fn position(&self) -> usize {
        self.bit_pos / 8
    }

    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Moves the cursor back (or forward) to a position previously returned
    /// by [`Reader::bit_position`].
    pub fn reset_to(&mut self, bit_pos: usize) {
        self.bit_pos = bit_pos.min(self.buf.len() * 8);
    }

    pub fn remaining_bits(&self) -> usize {
        (self.buf.len() * 8).saturating_sub(self.bit_pos)
    }

    pub fn remaining(&self) -> usize {
        self.remaining_bits() / 8
    }

    pub fn is_empty(&self) -> bool {
        self.remaining_bits() == 0
    }

    pub fn read_bits(&mut self, n: u8) -> Result<u64, DecodeError> {
        if n > 64 {
            return Err(DecodeError::InvalidLength);
        }
        if self.remaining_bits() < n as usize {
            return Err(DecodeError::UnexpectedEof);
        }
        let mut value = 0u64;
        let mut left = n;
        while left > 0 {
            let byte = self.buf[self.bit_pos / 8];
            let offset = (self.bit_pos % 8) as u8;
            let take = (8 - offset).min(left);
            let shift = 8 - offset - take;
            let mask = ((1u16 << take) - 1) as u8;
            value = (value << take) | ((byte >> shift) & mask) as u64;
            self.bit_pos += take as usize;
            left -= take;
        }
        Ok(value)
    }

    /// Reads `n` bits as a two's complement integer.
    pub fn read_signed_bits(&mut self, n: u8) -> Result<i64, DecodeError> {
        let raw = self.read_bits(n)?;
        if n == 0 || n == 64 {
            return Ok(raw as i64);
        }
        if raw & (1u64 << (n - 1)) != 0 {
            Ok((raw | (u64::MAX << n)) as i64)
        } else {
            Ok(raw as i64)
        }
    }

    pub fn read_bit(&mut self) -> Result<bool, DecodeError> {
        Ok(self.read_bits(1)? == 1)
    }

    pub fn peek_u8(&self) -> Result<u8, DecodeError> {
        let mut probe = *self;
        probe.read_u8()
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_bits(8)? as u8)
    }

    /// Borrows the next `len` bytes. The cursor must be byte aligned.
    pub fn read_exact(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if self.bit_pos % 8 != 0 {
            return Err(DecodeError::Validation("unaligned byte read"));
        }
        if self.remaining() < len {
            return Err(DecodeError::UnexpectedEof);
        }
        let start = self.bit_pos / 8;
        self.bit_pos += len * 8;
        Ok(&self.buf[start..start + len])
    }

    pub fn read_be_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(self.read_bits(16)? as u16)
    }

    pub fn read_be_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(self.read_bits(32)? as u32)
    }

    pub fn read_f32(&mut self) -> Result<f32, DecodeError> {
        Ok(f32::from_bits(self.read_be_u32()?))
    }

    pub fn read_f64(&mut self) -> Result<f64, DecodeError> {
        Ok(f64::from_bits(self.read_bits(64)?))
    }
}
