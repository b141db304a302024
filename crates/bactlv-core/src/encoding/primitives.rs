use crate::encoding::{
    reader::Reader,
    tag::{DataType, TagClass, TagHeader},
    writer::Writer,
};
use crate::{DecodeError, EncodeError};
use alloc::vec::Vec;

/// An unsigned payload of 1 to 8 bytes. The variant records the wire width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnsignedInteger {
    U8(u8),
    U16(u16),
    U24(u32),
    U32(u32),
    U40(u64),
    U48(u64),
    U56(u64),
    U64(u64),
}

impl UnsignedInteger {
    /// Smallest width that holds `value`.
    pub const fn from_value(value: u64) -> Self {
        if value <= 0xFF {
            Self::U8(value as u8)
        } else if value <= 0xFFFF {
            Self::U16(value as u16)
        } else if value <= 0xFF_FFFF {
            Self::U24(value as u32)
        } else if value <= 0xFFFF_FFFF {
            Self::U32(value as u32)
        } else if value <= 0xFF_FFFF_FFFF {
            Self::U40(value)
        } else if value <= 0xFFFF_FFFF_FFFF {
            Self::U48(value)
        } else if value <= 0xFF_FFFF_FFFF_FFFF {
            Self::U56(value)
        } else {
            Self::U64(value)
        }
    }

    pub const fn actual_value(self) -> u64 {
        match self {
            Self::U8(v) => v as u64,
            Self::U16(v) => v as u64,
            Self::U24(v) | Self::U32(v) => v as u64,
            Self::U40(v) | Self::U48(v) | Self::U56(v) | Self::U64(v) => v,
        }
    }

    /// Payload width in bytes.
    pub const fn payload_len(self) -> u32 {
        match self {
            Self::U8(_) => 1,
            Self::U16(_) => 2,
            Self::U24(_) => 3,
            Self::U32(_) => 4,
            Self::U40(_) => 5,
            Self::U48(_) => 6,
            Self::U56(_) => 7,
            Self::U64(_) => 8,
        }
    }

    pub const fn is_int8(self) -> bool {
        matches!(self, Self::U8(_))
    }

    pub const fn is_int16(self) -> bool {
        matches!(self, Self::U16(_))
    }

    pub const fn is_int24(self) -> bool {
        matches!(self, Self::U24(_))
    }

    pub const fn is_int32(self) -> bool {
        matches!(self, Self::U32(_))
    }

    pub const fn is_int40(self) -> bool {
        matches!(self, Self::U40(_))
    }

    pub const fn is_int48(self) -> bool {
        matches!(self, Self::U48(_))
    }

    pub const fn is_int56(self) -> bool {
        matches!(self, Self::U56(_))
    }

    pub const fn is_int64(self) -> bool {
        matches!(self, Self::U64(_))
    }

    pub fn decode(r: &mut Reader<'_>, len: u32) -> Result<Self, DecodeError> {
        if !(1..=8).contains(&len) {
            return Err(DecodeError::UnmappedIntegerLength(len));
        }
        let v = r.read_bits((len * 8) as u8)?;
        Ok(match len {
            1 => Self::U8(v as u8),
            2 => Self::U16(v as u16),
            3 => Self::U24(v as u32),
            4 => Self::U32(v as u32),
            5 => Self::U40(v),
            6 => Self::U48(v),
            7 => Self::U56(v),
            _ => Self::U64(v),
        })
    }

    pub fn encode(self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_bits((self.payload_len() * 8) as u8, self.actual_value())
    }
}

/// A two's complement payload of 1 to 8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignedInteger {
    I8(i8),
    I16(i16),
    I24(i32),
    I32(i32),
    I40(i64),
    I48(i64),
    I56(i64),
    I64(i64),
}

impl SignedInteger {
    pub const fn from_value(value: i64) -> Self {
        if fits_signed(value, 1) {
            Self::I8(value as i8)
        } else if fits_signed(value, 2) {
            Self::I16(value as i16)
        } else if fits_signed(value, 3) {
            Self::I24(value as i32)
        } else if fits_signed(value, 4) {
            Self::I32(value as i32)
        } else if fits_signed(value, 5) {
            Self::I40(value)
        } else if fits_signed(value, 6) {
            Self::I48(value)
        } else if fits_signed(value, 7) {
            Self::I56(value)
        } else {
            Self::I64(value)
        }
    }

    pub const fn actual_value(self) -> i64 {
        match self {
            Self::I8(v) => v as i64,
            Self::I16(v) => v as i64,
            Self::I24(v) | Self::I32(v) => v as i64,
            Self::I40(v) | Self::I48(v) | Self::I56(v) | Self::I64(v) => v,
        }
    }

    /// Payload width in bytes.
    pub const fn payload_len(self) -> u32 {
        match self {
            Self::I8(_) => 1,
            Self::I16(_) => 2,
            Self::I24(_) => 3,
            Self::I32(_) => 4,
            Self::I40(_) => 5,
            Self::I48(_) => 6,
            Self::I56(_) => 7,
            Self::I64(_) => 8,
        }
    }

    pub const fn is_int8(self) -> bool {
        matches!(self, Self::I8(_))
    }

    pub const fn is_int16(self) -> bool {
        matches!(self, Self::I16(_))
    }

    pub const fn is_int24(self) -> bool {
        matches!(self, Self::I24(_))
    }

    pub const fn is_int32(self) -> bool {
        matches!(self, Self::I32(_))
    }

    pub const fn is_int40(self) -> bool {
        matches!(self, Self::I40(_))
    }

    pub const fn is_int48(self) -> bool {
        matches!(self, Self::I48(_))
    }

    pub const fn is_int56(self) -> bool {
        matches!(self, Self::I56(_))
    }

    pub const fn is_int64(self) -> bool {
        matches!(self, Self::I64(_))
    }

    pub fn decode(r: &mut Reader<'_>, len: u32) -> Result<Self, DecodeError> {
        if !(1..=8).contains(&len) {
            return Err(DecodeError::UnmappedIntegerLength(len));
        }
        let v = r.read_signed_bits((len * 8) as u8)?;
        Ok(match len {
            1 => Self::I8(v as i8),
            2 => Self::I16(v as i16),
            3 => Self::I24(v as i32),
            4 => Self::I32(v as i32),
            5 => Self::I40(v),
            6 => Self::I48(v),
            7 => Self::I56(v),
            _ => Self::I64(v),
        })
    }

    pub fn encode(self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_signed_bits((self.payload_len() * 8) as u8, self.actual_value())
    }
}

const fn fits_signed(value: i64, bytes: u32) -> bool {
    let bits = bytes * 8;
    let min = -(1i64 << (bits - 1));
    let max = (1i64 << (bits - 1)) - 1;
    value >= min && value <= max
}

pub fn decode_real(r: &mut Reader<'_>, len: u32) -> Result<f32, DecodeError> {
    if len != 4 {
        return Err(DecodeError::InvalidLength);
    }
    r.read_f32()
}

pub fn decode_double(r: &mut Reader<'_>, len: u32) -> Result<f64, DecodeError> {
    if len != 8 {
        return Err(DecodeError::InvalidLength);
    }
    r.read_f64()
}

pub fn decode_octet_string(r: &mut Reader<'_>, len: u32) -> Result<Vec<u8>, DecodeError> {
    Ok(r.read_exact(len as usize)?.to_vec())
}

/// Context boolean: one payload byte, non-zero is true.
pub fn decode_context_boolean(r: &mut Reader<'_>, len: u32) -> Result<bool, DecodeError> {
    if len != 1 {
        return Err(DecodeError::InvalidLength);
    }
    Ok(r.read_u8()? != 0)
}

pub(crate) fn payload_len(len: usize) -> Result<u32, EncodeError> {
    u32::try_from(len).map_err(|_| EncodeError::ValueOutOfRange)
}

/// Reads a header and checks it is the context tag `tag_number` carrying a
/// primitive value.
pub fn expect_context(r: &mut Reader<'_>, tag_number: u8) -> Result<TagHeader, DecodeError> {
    let header = TagHeader::decode(r)?;
    if header.actual_tag_number() != tag_number {
        return Err(DecodeError::TagNumberMismatch {
            expected: tag_number,
            found: header.actual_tag_number(),
        });
    }
    if header.tag_class != TagClass::ContextSpecific {
        return Err(DecodeError::TagClassMismatch {
            expected: TagClass::ContextSpecific,
            found: header.tag_class,
        });
    }
    if header.is_opening_tag() || header.is_closing_tag() {
        return Err(DecodeError::Validation("expected a primitive context tag"));
    }
    Ok(header)
}

/// Reads a header and checks it is the application tag for `data_type`.
pub fn expect_application(
    r: &mut Reader<'_>,
    data_type: DataType,
) -> Result<TagHeader, DecodeError> {
    let header = TagHeader::decode(r)?;
    if header.tag_class != TagClass::Application {
        return Err(DecodeError::TagClassMismatch {
            expected: TagClass::Application,
            found: header.tag_class,
        });
    }
    if header.actual_tag_number() != data_type as u8 {
        return Err(DecodeError::TagNumberMismatch {
            expected: data_type as u8,
            found: header.actual_tag_number(),
        });
    }
    if header.is_opening_tag() || header.is_closing_tag() {
        return Err(DecodeError::InvalidTag);
    }
    Ok(header)
}

pub fn encode_app_unsigned(w: &mut Writer<'_>, value: u64) -> Result<(), EncodeError> {
    let v = UnsignedInteger::from_value(value);
    TagHeader::balanced(TagClass::Application, DataType::UnsignedInt as u8, v.payload_len()).encode(w)?;
    v.encode(w)
}

pub fn decode_app_unsigned(r: &mut Reader<'_>) -> Result<UnsignedInteger, DecodeError> {
    let header = expect_application(r, DataType::UnsignedInt)?;
    UnsignedInteger::decode(r, header.actual_length())
}

pub fn encode_ctx_unsigned(w: &mut Writer<'_>, tag_number: u8, value: u64) -> Result<(), EncodeError> {
    let v = UnsignedInteger::from_value(value);
    TagHeader::balanced(TagClass::ContextSpecific, tag_number, v.payload_len()).encode(w)?;
    v.encode(w)
}

pub fn decode_ctx_unsigned(
    r: &mut Reader<'_>,
    tag_number: u8,
) -> Result<UnsignedInteger, DecodeError> {
    let header = expect_context(r, tag_number)?;
    UnsignedInteger::decode(r, header.actual_length())
}

pub fn encode_app_signed(w: &mut Writer<'_>, value: i64) -> Result<(), EncodeError> {
    let v = SignedInteger::from_value(value);
    TagHeader::balanced(TagClass::Application, DataType::SignedInt as u8, v.payload_len()).encode(w)?;
    v.encode(w)
}

pub fn decode_app_signed(r: &mut Reader<'_>) -> Result<SignedInteger, DecodeError> {
    let header = expect_application(r, DataType::SignedInt)?;
    SignedInteger::decode(r, header.actual_length())
}

pub fn encode_ctx_signed(w: &mut Writer<'_>, tag_number: u8, value: i64) -> Result<(), EncodeError> {
    let v = SignedInteger::from_value(value);
    TagHeader::balanced(TagClass::ContextSpecific, tag_number, v.payload_len()).encode(w)?;
    v.encode(w)
}

pub fn decode_ctx_signed(r: &mut Reader<'_>, tag_number: u8) -> Result<SignedInteger, DecodeError> {
    let header = expect_context(r, tag_number)?;
    SignedInteger::decode(r, header.actual_length())
}

pub fn encode_app_real(w: &mut Writer<'_>, value: f32) -> Result<(), EncodeError> {
    TagHeader::balanced(TagClass::Application, DataType::Real as u8, 4).encode(w)?;
    w.write_f32(value)
}

pub fn decode_app_real(r: &mut Reader<'_>) -> Result<f32, DecodeError> {
    let header = expect_application(r, DataType::Real)?;
    decode_real(r, header.actual_length())
}

pub fn encode_opening_tag(w: &mut Writer<'_>, tag_number: u8) -> Result<(), EncodeError> {
    TagHeader::opening(tag_number).encode(w)
}

pub fn encode_closing_tag(w: &mut Writer<'_>, tag_number: u8) -> Result<(), EncodeError> {
    TagHeader::closing(tag_number).encode(w)
}
