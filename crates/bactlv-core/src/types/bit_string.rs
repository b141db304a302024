use crate::encoding::{reader::Reader, writer::Writer};
use crate::{DecodeError, EncodeError};
use alloc::vec::Vec;

/// A BACnet bit string. The unused-bit count of the wire form is derived
/// from the number of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// `false` for positions past the end.
    pub fn bit(&self, index: usize) -> bool {
        self.bits.get(index).copied().unwrap_or(false)
    }

    pub fn unused_bits(&self) -> u8 {
        ((8 - self.bits.len() % 8) % 8) as u8
    }

    pub fn payload_len(&self) -> u32 {
        1 + self.bits.len().div_ceil(8) as u32
    }

    pub fn decode_payload(r: &mut Reader<'_>, len: u32) -> Result<Self, DecodeError> {
        if len == 0 {
            return Err(DecodeError::InvalidLength);
        }
        if len as usize > r.remaining() {
            return Err(DecodeError::UnexpectedEof);
        }
        let unused = r.read_u8()?;
        let data_bits = (len as usize - 1) * 8;
        if unused > 7 || (unused as usize) > data_bits {
            return Err(DecodeError::InvalidValue);
        }
        let count = data_bits - unused as usize;
        let mut bits = Vec::with_capacity(count);
        for _ in 0..count {
            bits.push(r.read_bit()?);
        }
        // padding
        r.read_bits(unused)?;
        Ok(Self { bits })
    }

    pub fn encode_payload(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        let unused = self.unused_bits();
        w.write_u8(unused)?;
        for bit in &self.bits {
            w.write_bit(*bit)?;
        }
        w.write_bits(unused, 0)
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}
