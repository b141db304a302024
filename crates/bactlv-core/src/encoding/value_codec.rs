use crate::encoding::{
    primitives::{
        decode_context_boolean, decode_double, decode_octet_string, decode_real, payload_len,
        SignedInteger, UnsignedInteger,
    },
    reader::Reader,
    tag::{DataType, TagClass, TagHeader},
    writer::Writer,
};
use crate::types::{BitString, CharacterString, DataValue, Date, ObjectId, Time};
use crate::{DecodeError, EncodeError};

/// Payload bytes of `value` under a header of class `class`. Application
/// booleans carry their value in the header and have no payload.
pub fn data_value_payload_len(value: &DataValue, class: TagClass) -> Result<u32, EncodeError> {
    Ok(match value {
        DataValue::Null => 0,
        DataValue::Boolean(_) => match class {
            TagClass::Application => 0,
            TagClass::ContextSpecific => 1,
        },
        DataValue::Unsigned(v) => v.payload_len(),
        DataValue::Signed(v) => v.payload_len(),
        DataValue::Real(_) => 4,
        DataValue::Double(_) => 8,
        DataValue::OctetString(v) => payload_len(v.len())?,
        DataValue::CharacterString(v) => v.payload_len(),
        DataValue::BitString(v) => v.payload_len(),
        DataValue::Enumerated(v) => crate::encoding::enumerated::enum_payload_len(*v),
        DataValue::Date(_) | DataValue::Time(_) | DataValue::ObjectId(_) => 4,
    })
}

impl DataValue {
    /// Header plus payload size in bits when encoded with `class`.
    pub fn length_in_bits(&self, class: TagClass, tag_number: u8) -> Result<usize, EncodeError> {
        let len = data_value_payload_len(self, class)?;
        let header = value_header(self, class, tag_number, len);
        Ok(header.length_in_bits() + len as usize * 8)
    }
}

fn value_header(value: &DataValue, class: TagClass, tag_number: u8, len: u32) -> TagHeader {
    match (value, class) {
        (DataValue::Boolean(v), TagClass::Application) => {
            TagHeader::balanced(class, DataType::Boolean as u8, *v as u32)
        }
        _ => TagHeader::balanced(class, tag_number, len),
    }
}

fn encode_payload(w: &mut Writer<'_>, value: &DataValue, class: TagClass) -> Result<(), EncodeError> {
    match value {
        DataValue::Null => Ok(()),
        DataValue::Boolean(v) => match class {
            TagClass::Application => Ok(()),
            TagClass::ContextSpecific => w.write_u8(*v as u8),
        },
        DataValue::Unsigned(v) => v.encode(w),
        DataValue::Signed(v) => v.encode(w),
        DataValue::Real(v) => w.write_f32(*v),
        DataValue::Double(v) => w.write_f64(*v),
        DataValue::OctetString(v) => w.write_all(v),
        DataValue::CharacterString(v) => v.encode_payload(w),
        DataValue::BitString(v) => v.encode_payload(w),
        DataValue::Enumerated(v) => {
            let width = crate::encoding::enumerated::enum_payload_len(*v) * 8;
            w.write_bits(width as u8, *v as u64)
        }
        DataValue::Date(v) => v.encode_payload(w),
        DataValue::Time(v) => v.encode_payload(w),
        DataValue::ObjectId(v) => v.encode_payload(w),
    }
}

pub fn encode_application_data_value(
    w: &mut Writer<'_>,
    value: &DataValue,
) -> Result<(), EncodeError> {
    let len = data_value_payload_len(value, TagClass::Application)?;
    value_header(value, TagClass::Application, value.data_type() as u8, len).encode(w)?;
    encode_payload(w, value, TagClass::Application)
}

pub fn encode_context_data_value(
    w: &mut Writer<'_>,
    tag_number: u8,
    value: &DataValue,
) -> Result<(), EncodeError> {
    let len = data_value_payload_len(value, TagClass::ContextSpecific)?;
    TagHeader::balanced(TagClass::ContextSpecific, tag_number, len).encode(w)?;
    encode_payload(w, value, TagClass::ContextSpecific)
}

pub fn decode_application_data_value(r: &mut Reader<'_>) -> Result<DataValue, DecodeError> {
    let header = TagHeader::decode(r)?;
    decode_application_data_value_from_header(r, &header)
}

pub fn decode_application_data_value_from_header(
    r: &mut Reader<'_>,
    header: &TagHeader,
) -> Result<DataValue, DecodeError> {
    if header.tag_class != TagClass::Application {
        return Err(DecodeError::TagClassMismatch {
            expected: TagClass::Application,
            found: header.tag_class,
        });
    }
    if header.is_opening_tag() || header.is_closing_tag() {
        return Err(DecodeError::InvalidTag);
    }
    let data_type = DataType::from_u8(header.actual_tag_number())?;
    if data_type == DataType::Boolean {
        return match header.length_value_type {
            0 => Ok(DataValue::Boolean(false)),
            1 => Ok(DataValue::Boolean(true)),
            _ => Err(DecodeError::InvalidValue),
        };
    }
    decode_payload(r, data_type, header.actual_length())
}

/// Decodes a context-tagged primitive whose type comes from the schema.
pub fn decode_context_data_value(
    r: &mut Reader<'_>,
    header: &TagHeader,
    data_type: DataType,
) -> Result<DataValue, DecodeError> {
    if header.tag_class != TagClass::ContextSpecific {
        return Err(DecodeError::TagClassMismatch {
            expected: TagClass::ContextSpecific,
            found: header.tag_class,
        });
    }
    if header.is_opening_tag() || header.is_closing_tag() {
        return Err(DecodeError::Validation("expected a primitive context tag"));
    }
    if data_type == DataType::Boolean {
        return decode_context_boolean(r, header.actual_length()).map(DataValue::Boolean);
    }
    decode_payload(r, data_type, header.actual_length())
}

fn decode_payload(
    r: &mut Reader<'_>,
    data_type: DataType,
    len: u32,
) -> Result<DataValue, DecodeError> {
    Ok(match data_type {
        DataType::Null => {
            if len != 0 {
                return Err(DecodeError::InvalidLength);
            }
            DataValue::Null
        }
        DataType::Boolean => DataValue::Boolean(decode_context_boolean(r, len)?),
        DataType::UnsignedInt => DataValue::Unsigned(UnsignedInteger::decode(r, len)?),
        DataType::SignedInt => DataValue::Signed(SignedInteger::decode(r, len)?),
        DataType::Real => DataValue::Real(decode_real(r, len)?),
        DataType::Double => DataValue::Double(decode_double(r, len)?),
        DataType::OctetString => DataValue::OctetString(decode_octet_string(r, len)?),
        DataType::CharacterString => {
            DataValue::CharacterString(CharacterString::decode_payload(r, len)?)
        }
        DataType::BitString => DataValue::BitString(BitString::decode_payload(r, len)?),
        DataType::Enumerated => {
            if !(1..=4).contains(&len) {
                return Err(DecodeError::InvalidLength);
            }
            DataValue::Enumerated(r.read_bits((len * 8) as u8)? as u32)
        }
        DataType::Date => DataValue::Date(Date::decode_payload(r, len)?),
        DataType::Time => DataValue::Time(Time::decode_payload(r, len)?),
        DataType::ObjectId => DataValue::ObjectId(ObjectId::decode_payload(r, len)?),
    })
}

#[cfg(test)]
mod tests {
    use super::{
        decode_application_data_value, decode_context_data_value, encode_application_data_value,
        encode_context_data_value,
    };
    use crate::encoding::{
        reader::Reader,
        tag::{DataType, TagClass, TagHeader},
        writer::Writer,
    };
    use crate::types::{BitString, CharacterString, DataValue, Date, ObjectId, ObjectType, Time};
    use alloc::vec;

    #[test]
    fn value_codec_roundtrip_supported_types() {
        let values = [
            DataValue::Null,
            DataValue::Boolean(true),
            DataValue::Boolean(false),
            DataValue::unsigned(123),
            DataValue::signed(-123),
            DataValue::Real(12.5),
            DataValue::Double(42.25),
            DataValue::OctetString(vec![1, 2, 3]),
            DataValue::CharacterString(CharacterString::utf8("hello")),
            DataValue::BitString(BitString::new(vec![true, false, true])),
            DataValue::Enumerated(9),
            DataValue::Date(Date {
                year_since_1900: 124,
                month: 2,
                day: 3,
                weekday: 6,
            }),
            DataValue::Time(Time {
                hour: 1,
                minute: 2,
                second: 3,
                hundredths: 4,
            }),
            DataValue::ObjectId(ObjectId::new(ObjectType::Device, 1).unwrap()),
        ];

        for v in values {
            let mut buf = [0u8; 64];
            let mut w = Writer::new(&mut buf);
            encode_application_data_value(&mut w, &v).unwrap();
            assert_eq!(
                w.bit_position(),
                v.length_in_bits(TagClass::Application, v.data_type() as u8)
                    .unwrap()
            );
            let mut r = Reader::new(w.as_written());
            let got = decode_application_data_value(&mut r).unwrap();
            assert_eq!(got, v);
            assert!(r.is_empty());
        }
    }

    #[test]
    fn application_boolean_has_no_payload() {
        let mut buf = [0u8; 4];
        let mut w = Writer::new(&mut buf);
        encode_application_data_value(&mut w, &DataValue::Boolean(true)).unwrap();
        assert_eq!(w.as_written(), &[0x11]);
    }

    #[test]
    fn context_boolean_has_one_byte() {
        let mut buf = [0u8; 4];
        let mut w = Writer::new(&mut buf);
        encode_context_data_value(&mut w, 1, &DataValue::Boolean(true)).unwrap();
        assert_eq!(w.as_written(), &[0x19, 0x01]);

        let mut r = Reader::new(&[0x19, 0x01]);
        let header = TagHeader::decode(&mut r).unwrap();
        let v = decode_context_data_value(&mut r, &header, DataType::Boolean).unwrap();
        assert_eq!(v, DataValue::Boolean(true));
    }

    #[test]
    fn real_with_wrong_length_is_rejected() {
        let mut r = Reader::new(&[0x43, 0x00, 0x00, 0x00]);
        assert_eq!(
            decode_application_data_value(&mut r).unwrap_err(),
            crate::DecodeError::InvalidLength
        );
    }

    #[test]
    fn bit_string_longer_than_input() {
        // Extended length 0xFFFFFFFF with a single payload byte present.
        let mut r = Reader::new(&[0x85, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
        assert_eq!(
            decode_application_data_value(&mut r).unwrap_err(),
            crate::DecodeError::UnexpectedEof
        );
    }

    #[test]
    fn reserved_application_tag() {
        let mut r = Reader::new(&[0xD0]);
        assert_eq!(
            decode_application_data_value(&mut r).unwrap_err(),
            crate::DecodeError::InvalidTag
        );
    }
}
