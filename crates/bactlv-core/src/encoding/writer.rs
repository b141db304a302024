use crate::EncodeError;

/// Bit-addressed writer into a caller-owned buffer.
#[derive(Debug)]
pub struct Writer<'a> {
    buf: &'a mut [u8],
    bit_pos: usize,
}

impl<'a> Writer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, bit_pos: 0 }
    }

    /// Bytes touched so far, including a partially written last byte.
    pub const fn position(&self) -> usize {
        self.bit_pos.div_ceil(8)
    }

    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    pub fn remaining_bits(&self) -> usize {
        (self.buf.len() * 8).saturating_sub(self.bit_pos)
    }

    pub fn remaining(&self) -> usize {
        self.remaining_bits() / 8
    }

    pub fn as_written(&self) -> &[u8] {
        &self.buf[..self.position()]
    }

    /// Writes the low `n` bits of `value`, most significant first.
    pub fn write_bits(&mut self, n: u8, value: u64) -> Result<(), EncodeError> {
        if n > 64 || (n < 64 && value >> n != 0) {
            return Err(EncodeError::ValueOutOfRange);
        }
        if self.remaining_bits() < n as usize {
            return Err(EncodeError::BufferTooSmall);
        }
        let mut left = n;
        while left > 0 {
            let offset = (self.bit_pos % 8) as u8;
            let take = (8 - offset).min(left);
            let chunk = ((value >> (left - take)) & ((1u64 << take) - 1)) as u8;
            let shift = 8 - offset - take;
            let mask = (((1u16 << take) - 1) as u8) << shift;
            let byte = &mut self.buf[self.bit_pos / 8];
            *byte = (*byte & !mask) | (chunk << shift);
            self.bit_pos += take as usize;
            left -= take;
        }
        Ok(())
    }

    /// Writes `value` as an `n`-bit two's complement integer.
    pub fn write_signed_bits(&mut self, n: u8, value: i64) -> Result<(), EncodeError> {
        if n == 0 || n > 64 {
            return Err(EncodeError::ValueOutOfRange);
        }
        if n < 64 {
            let min = -(1i64 << (n - 1));
            let max = (1i64 << (n - 1)) - 1;
            if value < min || value > max {
                return Err(EncodeError::ValueOutOfRange);
            }
            let mask = (1u64 << n) - 1;
            return self.write_bits(n, (value as u64) & mask);
        }
        self.write_bits(64, value as u64)
    }

    pub fn write_bit(&mut self, value: bool) -> Result<(), EncodeError> {
        self.write_bits(1, value as u64)
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), EncodeError> {
        self.write_bits(8, value as u64)
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), EncodeError> {
        if self.remaining_bits() < data.len() * 8 {
            return Err(EncodeError::BufferTooSmall);
        }
        if self.bit_pos % 8 == 0 {
            let start = self.bit_pos / 8;
            self.buf[start..start + data.len()].copy_from_slice(data);
            self.bit_pos += data.len() * 8;
            return Ok(());
        }
        for b in data {
            self.write_u8(*b)?;
        }
        Ok(())
    }

    pub fn write_be_u16(&mut self, value: u16) -> Result<(), EncodeError> {
        self.write_bits(16, value as u64)
    }

    pub fn write_be_u32(&mut self, value: u32) -> Result<(), EncodeError> {
        self.write_bits(32, value as u64)
    }

    pub fn write_f32(&mut self, value: f32) -> Result<(), EncodeError> {
        self.write_be_u32(value.to_bits())
    }

    pub fn write_f64(&mut self, value: f64) -> Result<(), EncodeError> {
        self.write_bits(64, value.to_bits())
    }
}
