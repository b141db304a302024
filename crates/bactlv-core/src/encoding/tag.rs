use crate::encoding::{reader::Reader, writer::Writer};
use crate::{DecodeError, EncodeError};

/// Universal BACnet application data types, identified by the tag number of
/// an application tag.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    Null = 0,
    Boolean = 1,
    UnsignedInt = 2,
    SignedInt = 3,
    Real = 4,
    Double = 5,
    OctetString = 6,
    CharacterString = 7,
    BitString = 8,
    Enumerated = 9,
    Date = 10,
    Time = 11,
    ObjectId = 12,
}

impl DataType {
    pub fn from_u8(value: u8) -> Result<Self, DecodeError> {
        match value {
            0 => Ok(Self::Null),
            1 => Ok(Self::Boolean),
            2 => Ok(Self::UnsignedInt),
            3 => Ok(Self::SignedInt),
            4 => Ok(Self::Real),
            5 => Ok(Self::Double),
            6 => Ok(Self::OctetString),
            7 => Ok(Self::CharacterString),
            8 => Ok(Self::BitString),
            9 => Ok(Self::Enumerated),
            10 => Ok(Self::Date),
            11 => Ok(Self::Time),
            12 => Ok(Self::ObjectId),
            _ => Err(DecodeError::InvalidTag),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagClass {
    Application,
    ContextSpecific,
}

/// Extended length following a header whose length/value/type is 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtendedLength {
    /// 5..=253, stored in the single extension byte.
    Byte(u8),
    /// Sentinel 254 followed by a big-endian u16.
    Word(u16),
    /// Sentinel 255 followed by a big-endian u32.
    DoubleWord(u32),
}

impl ExtendedLength {
    pub const fn value(self) -> u32 {
        match self {
            Self::Byte(v) => v as u32,
            Self::Word(v) => v as u32,
            Self::DoubleWord(v) => v,
        }
    }

    const fn length_in_bits(self) -> usize {
        match self {
            Self::Byte(_) => 8,
            Self::Word(_) => 24,
            Self::DoubleWord(_) => 40,
        }
    }
}

pub const LVT_EXTENDED_LENGTH: u8 = 5;
pub const LVT_OPENING_TAG: u8 = 6;
pub const LVT_CLOSING_TAG: u8 = 7;
const EXTENDED_TAG_NUMBER: u8 = 0x0F;

/// The envelope preceding every BACnet value.
///
/// The raw wire fields are kept as decoded; `actual_*` accessors resolve the
/// extension escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagHeader {
    pub tag_number: u8,
    pub tag_class: TagClass,
    pub length_value_type: u8,
    pub extended_tag_number: Option<u8>,
    pub extended_length: Option<ExtendedLength>,
}

impl TagHeader {
    /// Builds the smallest header for `tag_number` carrying `len` payload bytes.
    pub const fn balanced(tag_class: TagClass, tag_number: u8, len: u32) -> Self {
        let (number, extended_tag_number) = split_tag_number(tag_number);
        let (length_value_type, extended_length) = if len <= 4 {
            (len as u8, None)
        } else if len <= 253 {
            (LVT_EXTENDED_LENGTH, Some(ExtendedLength::Byte(len as u8)))
        } else if len <= 65535 {
            (LVT_EXTENDED_LENGTH, Some(ExtendedLength::Word(len as u16)))
        } else {
            (LVT_EXTENDED_LENGTH, Some(ExtendedLength::DoubleWord(len)))
        };
        Self {
            tag_number: number,
            tag_class,
            length_value_type,
            extended_tag_number,
            extended_length,
        }
    }

    pub const fn opening(tag_number: u8) -> Self {
        Self::delimiter(tag_number, LVT_OPENING_TAG)
    }

    pub const fn closing(tag_number: u8) -> Self {
        Self::delimiter(tag_number, LVT_CLOSING_TAG)
    }

    const fn delimiter(tag_number: u8, length_value_type: u8) -> Self {
        let (number, extended_tag_number) = split_tag_number(tag_number);
        Self {
            tag_number: number,
            tag_class: TagClass::ContextSpecific,
            length_value_type,
            extended_tag_number,
            extended_length: None,
        }
    }

    pub fn actual_tag_number(&self) -> u8 {
        match self.extended_tag_number {
            Some(ext) if self.tag_number == EXTENDED_TAG_NUMBER => ext,
            _ => self.tag_number,
        }
    }

    /// Payload length in bytes; zero for opening and closing tags.
    pub fn actual_length(&self) -> u32 {
        match self.length_value_type {
            LVT_EXTENDED_LENGTH => self.extended_length.map_or(0, ExtendedLength::value),
            LVT_OPENING_TAG | LVT_CLOSING_TAG => 0,
            lvt => lvt as u32,
        }
    }

    pub fn is_context(&self) -> bool {
        self.tag_class == TagClass::ContextSpecific
    }

    pub fn is_opening_tag(&self) -> bool {
        self.length_value_type == LVT_OPENING_TAG
    }

    pub fn is_closing_tag(&self) -> bool {
        self.length_value_type == LVT_CLOSING_TAG
    }

    /// Application data type, for application-class headers.
    pub fn data_type(&self) -> Option<DataType> {
        match self.tag_class {
            TagClass::Application => DataType::from_u8(self.actual_tag_number()).ok(),
            TagClass::ContextSpecific => None,
        }
    }

    pub fn length_in_bits(&self) -> usize {
        let mut bits = 8;
        if self.tag_number == EXTENDED_TAG_NUMBER {
            bits += 8;
        }
        if self.length_value_type == LVT_EXTENDED_LENGTH {
            bits += self.extended_length.map_or(0, ExtendedLength::length_in_bits);
        }
        bits
    }

    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let start = r.bit_position();
        let header = Self::decode_fields(r);
        if header.is_err() {
            r.reset_to(start);
        }
        header
    }

    fn decode_fields(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let tag_number = r.read_bits(4)? as u8;
        let tag_class = if r.read_bit()? {
            TagClass::ContextSpecific
        } else {
            TagClass::Application
        };
        let length_value_type = r.read_bits(3)? as u8;

        let extended_tag_number = if tag_number == EXTENDED_TAG_NUMBER {
            Some(r.read_u8()?)
        } else {
            None
        };

        let extended_length = if length_value_type == LVT_EXTENDED_LENGTH {
            Some(match r.read_u8()? {
                254 => ExtendedLength::Word(r.read_be_u16()?),
                255 => ExtendedLength::DoubleWord(r.read_be_u32()?),
                v => ExtendedLength::Byte(v),
            })
        } else {
            None
        };

        Ok(Self {
            tag_number,
            tag_class,
            length_value_type,
            extended_tag_number,
            extended_length,
        })
    }

    pub fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        if self.tag_number > EXTENDED_TAG_NUMBER || self.length_value_type > LVT_CLOSING_TAG {
            return Err(EncodeError::ValueOutOfRange);
        }
        if (self.tag_number == EXTENDED_TAG_NUMBER) != self.extended_tag_number.is_some() {
            return Err(EncodeError::ValueOutOfRange);
        }
        if (self.length_value_type == LVT_EXTENDED_LENGTH) != self.extended_length.is_some() {
            return Err(EncodeError::InvalidLength);
        }

        w.write_bits(4, self.tag_number as u64)?;
        w.write_bit(self.tag_class == TagClass::ContextSpecific)?;
        w.write_bits(3, self.length_value_type as u64)?;

        if let Some(ext) = self.extended_tag_number {
            w.write_u8(ext)?;
        }

        match self.extended_length {
            None => {}
            Some(ExtendedLength::Byte(v)) if v <= 253 => w.write_u8(v)?,
            Some(ExtendedLength::Byte(_)) => return Err(EncodeError::InvalidLength),
            Some(ExtendedLength::Word(v)) => {
                w.write_u8(254)?;
                w.write_be_u16(v)?;
            }
            Some(ExtendedLength::DoubleWord(v)) => {
                w.write_u8(255)?;
                w.write_be_u32(v)?;
            }
        }
        Ok(())
    }
}

const fn split_tag_number(tag_number: u8) -> (u8, Option<u8>) {
    if tag_number <= 14 {
        (tag_number, None)
    } else {
        (EXTENDED_TAG_NUMBER, Some(tag_number))
    }
}

#[cfg(test)]
mod tests {
    use super::{ExtendedLength, TagClass, TagHeader, LVT_EXTENDED_LENGTH};
    use crate::encoding::{reader::Reader, writer::Writer};
    use crate::DecodeError;
    use proptest::prelude::*;

    fn roundtrip(header: TagHeader) -> TagHeader {
        let mut buf = [0u8; 8];
        let mut w = Writer::new(&mut buf);
        header.encode(&mut w).unwrap();
        assert_eq!(w.bit_position(), header.length_in_bits());
        let mut r = Reader::new(w.as_written());
        let decoded = TagHeader::decode(&mut r).unwrap();
        assert!(r.is_empty());
        decoded
    }

    proptest! {
        #[test]
        fn balanced_header_roundtrip(
            tag_number in any::<u8>(),
            is_context in any::<bool>(),
            len in 0u32..100_000,
        ) {
            let class = if is_context { TagClass::ContextSpecific } else { TagClass::Application };
            let decoded = roundtrip(TagHeader::balanced(class, tag_number, len));
            prop_assert_eq!(decoded.actual_tag_number(), tag_number);
            prop_assert_eq!(decoded.tag_class, class);
            prop_assert_eq!(decoded.actual_length(), len);
        }
    }

    #[test]
    fn minimal_width_choice() {
        for len in 0..=4 {
            let h = TagHeader::balanced(TagClass::Application, 2, len);
            assert_eq!(h.length_value_type, len as u8);
            assert_eq!(h.extended_length, None);
        }
        for len in [5u32, 100, 253] {
            let h = TagHeader::balanced(TagClass::Application, 2, len);
            assert_eq!(h.length_value_type, LVT_EXTENDED_LENGTH);
            assert_eq!(h.extended_length, Some(ExtendedLength::Byte(len as u8)));
        }
        for len in [254u32, 1000, 65535] {
            let h = TagHeader::balanced(TagClass::Application, 2, len);
            assert_eq!(h.extended_length, Some(ExtendedLength::Word(len as u16)));
        }
        let h = TagHeader::balanced(TagClass::Application, 2, 65536);
        assert_eq!(h.extended_length, Some(ExtendedLength::DoubleWord(65536)));
    }

    #[test]
    fn context_tag_two_with_two_bytes() {
        let mut buf = [0u8; 4];
        let mut w = Writer::new(&mut buf);
        TagHeader::balanced(TagClass::ContextSpecific, 2, 2)
            .encode(&mut w)
            .unwrap();
        assert_eq!(w.as_written(), &[0x2A]);
    }

    #[test]
    fn extended_tag_number_and_length_bytes() {
        let mut buf = [0u8; 8];
        let mut w = Writer::new(&mut buf);
        TagHeader::balanced(TagClass::ContextSpecific, 30, 300)
            .encode(&mut w)
            .unwrap();
        assert_eq!(w.as_written(), &[0xFD, 30, 254, 0x01, 0x2C]);
    }

    #[test]
    fn opening_and_closing_tags() {
        let open = roundtrip(TagHeader::opening(3));
        assert!(open.is_opening_tag());
        assert_eq!(open.actual_tag_number(), 3);
        assert_eq!(open.actual_length(), 0);

        let close = roundtrip(TagHeader::closing(20));
        assert!(close.is_closing_tag());
        assert_eq!(close.actual_tag_number(), 20);
        assert_eq!(close.tag_class, TagClass::ContextSpecific);
    }

    #[test]
    fn truncated_extended_length_is_an_error() {
        let mut r = Reader::new(&[0x25, 254, 0x01]);
        assert_eq!(
            TagHeader::decode(&mut r).unwrap_err(),
            DecodeError::UnexpectedEof
        );
        assert_eq!(r.bit_position(), 0);
    }

    #[test]
    fn inconsistent_header_is_rejected_on_encode() {
        let header = TagHeader {
            tag_number: 1,
            tag_class: TagClass::Application,
            length_value_type: LVT_EXTENDED_LENGTH,
            extended_tag_number: None,
            extended_length: None,
        };
        let mut buf = [0u8; 4];
        let mut w = Writer::new(&mut buf);
        assert!(header.encode(&mut w).is_err());
    }
}
