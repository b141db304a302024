use crate::encoding::{
    enumerated::{BacnetEnum, EnumValue},
    reader::Reader,
    tag::DataType,
    writer::Writer,
};
use crate::error::FieldContext;
use crate::schema::{
    decode_fields, encode_fields, FieldKind, FieldSpec, PropertySchema, Record, Value, RELINQUISH,
};
use crate::services::{
    object_id_field, optional_u32_field, property_field, read_property::property_reference,
    required, OBJECT_IDENTIFIER, PRIORITY, PROPERTY_ARRAY_INDEX, PROPERTY_IDENTIFIER,
    PROPERTY_VALUE, PROPERTY_VALUE_KIND,
};
use crate::types::{DataValue, EnumKind, ObjectId, ObjectType, PropertyIdentifier};
use crate::{DecodeError, EncodeError};

pub const SERVICE_WRITE_PROPERTY: u8 = 0x0F;

pub static WRITE_PROPERTY_REQUEST: &[FieldSpec] = &[
    FieldSpec::context(OBJECT_IDENTIFIER, 0, FieldKind::Primitive(DataType::ObjectId)),
    FieldSpec::context(
        PROPERTY_IDENTIFIER,
        1,
        FieldKind::Enum(EnumKind::PropertyIdentifier),
    ),
    FieldSpec::context(
        PROPERTY_ARRAY_INDEX,
        2,
        FieldKind::Primitive(DataType::UnsignedInt),
    )
    .optional(),
    FieldSpec::context(PROPERTY_VALUE, 3, PROPERTY_VALUE_KIND),
    FieldSpec::context(PRIORITY, 4, FieldKind::Primitive(DataType::UnsignedInt)).optional(),
];

const PRIORITY_RANGE: core::ops::RangeInclusive<u8> = 1..=16;

#[derive(Debug, Clone, PartialEq)]
pub struct WritePropertyRequest {
    pub object_id: ObjectId,
    pub property_id: EnumValue<PropertyIdentifier>,
    pub value: Value,
    pub array_index: Option<u32>,
    pub priority: Option<u8>,
}

/// Relinquishes the present value of analog-value 0 at the lowest
/// priority.
impl Default for WritePropertyRequest {
    fn default() -> Self {
        Self {
            object_id: ObjectId::from_raw(ObjectType::AnalogValue.to_raw() << 22),
            property_id: PropertyIdentifier::PresentValue.into(),
            value: Value::choice(RELINQUISH, DataValue::Null),
            array_index: None,
            priority: None,
        }
    }
}

impl WritePropertyRequest {
    pub fn to_record(&self) -> Record {
        let mut record = property_reference(&self.object_id, self.property_id, self.array_index)
            .with(PROPERTY_VALUE, self.value.clone());
        if let Some(priority) = self.priority {
            record.push(PRIORITY, DataValue::unsigned(u64::from(priority)));
        }
        record
    }

    pub fn from_record(record: &Record) -> Result<Self, DecodeError> {
        let priority = match optional_u32_field(record, PRIORITY)? {
            Some(p) => Some(
                u8::try_from(p)
                    .ok()
                    .filter(|p| PRIORITY_RANGE.contains(p))
                    .ok_or(DecodeError::Validation("priority outside 1..=16"))
                    .field(PRIORITY)?,
            ),
            None => None,
        };
        Ok(Self {
            object_id: object_id_field(record, OBJECT_IDENTIFIER)?,
            property_id: property_field(record, PROPERTY_IDENTIFIER)?,
            value: required(record, PROPERTY_VALUE)?.clone(),
            array_index: optional_u32_field(record, PROPERTY_ARRAY_INDEX)?,
            priority,
        })
    }

    pub fn encode(&self, w: &mut Writer<'_>, schema: &dyn PropertySchema) -> Result<(), EncodeError> {
        if let Some(p) = self.priority {
            if !PRIORITY_RANGE.contains(&p) {
                return Err(EncodeError::ValueOutOfRange.in_field(PRIORITY));
            }
        }
        encode_fields(w, WRITE_PROPERTY_REQUEST, &self.to_record(), schema)
    }

    pub fn decode(r: &mut Reader<'_>, schema: &dyn PropertySchema) -> Result<Self, DecodeError> {
        let record = decode_fields(r, WRITE_PROPERTY_REQUEST, schema)?;
        Self::from_record(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::WritePropertyRequest;
    use crate::encoding::{reader::Reader, writer::Writer};
    use crate::schema::{StandardSchema, Value, RELINQUISH};
    use crate::types::{CharacterString, DataValue, ObjectId, ObjectType, PropertyIdentifier};
    use crate::{DecodeError, EncodeError};

    const PRESENT_VALUE_AT_8: [u8; 16] = [
        0x0C, 0x00, 0x80, 0x00, 0x03, // [0] analog-value 3
        0x19, 0x55, // [1] present-value
        0x3E, 0x44, 0x42, 0x48, 0x00, 0x00, 0x3F, // {[3] 50.0 [3]}
        0x49, 0x08, // [4] 8
    ];

    #[test]
    fn encode_write_property_with_priority() {
        let req = WritePropertyRequest {
            object_id: ObjectId::new(ObjectType::AnalogValue, 3).unwrap(),
            value: Value::choice("real", DataValue::Real(50.0)),
            priority: Some(8),
            ..Default::default()
        };

        let mut buf = [0u8; 64];
        let mut w = Writer::new(&mut buf);
        req.encode(&mut w, &StandardSchema).unwrap();
        assert_eq!(w.as_written(), PRESENT_VALUE_AT_8);

        let mut r = Reader::new(&PRESENT_VALUE_AT_8);
        assert_eq!(WritePropertyRequest::decode(&mut r, &StandardSchema).unwrap(), req);
    }

    #[test]
    fn null_relinquishes_the_priority_slot() {
        let bytes = [
            0x0C, 0x00, 0x80, 0x00, 0x03, // [0] analog-value 3
            0x19, 0x55, // [1] present-value
            0x3E, 0x00, 0x3F, // {[3] NULL [3]}
            0x49, 0x08, // [4] 8
        ];
        let mut r = Reader::new(&bytes);
        let req = WritePropertyRequest::decode(&mut r, &StandardSchema).unwrap();
        assert!(r.is_empty());
        assert_eq!(req.value, Value::choice(RELINQUISH, DataValue::Null));
        assert_eq!(req.priority, Some(8));

        let mut buf = [0u8; 32];
        let mut w = Writer::new(&mut buf);
        req.encode(&mut w, &StandardSchema).unwrap();
        assert_eq!(w.as_written(), bytes);
    }

    #[test]
    fn default_request_encodes() {
        let mut buf = [0u8; 32];
        let mut w = Writer::new(&mut buf);
        WritePropertyRequest::default()
            .encode(&mut w, &StandardSchema)
            .unwrap();
        assert_eq!(
            w.as_written(),
            [0x0C, 0x00, 0x80, 0x00, 0x00, 0x19, 0x55, 0x3E, 0x00, 0x3F]
        );
    }

    #[test]
    fn bare_real_is_not_a_commandable_value() {
        let req = WritePropertyRequest {
            value: DataValue::Real(50.0).into(),
            ..Default::default()
        };
        let mut buf = [0u8; 32];
        let mut w = Writer::new(&mut buf);
        let err = req.encode(&mut w, &StandardSchema).unwrap_err();
        assert_eq!(err.path(), ["propertyValue", "value"]);
        assert_eq!(err.root_cause(), &EncodeError::ValueMismatch);
    }

    #[test]
    fn encode_write_property_with_character_string() {
        let req = WritePropertyRequest {
            object_id: ObjectId::new(ObjectType::AnalogValue, 3).unwrap(),
            property_id: PropertyIdentifier::Description.into(),
            value: DataValue::CharacterString(CharacterString::utf8("loop tuning pending")).into(),
            ..Default::default()
        };

        let mut buf = [0u8; 64];
        let mut w = Writer::new(&mut buf);
        req.encode(&mut w, &StandardSchema).unwrap();
        // Opening tag, 0x75 + length 20, encoding byte, text, closing tag.
        assert_eq!(w.as_written()[7..10], [0x3E, 0x75, 20]);
        assert_eq!(w.as_written().last(), Some(&0x3F));

        let mut r = Reader::new(w.as_written());
        let decoded = WritePropertyRequest::decode(&mut r, &StandardSchema).unwrap();
        assert_eq!(decoded.value, req.value);
        assert_eq!(decoded.priority, None);
    }

    #[test]
    fn priority_out_of_range() {
        let req = WritePropertyRequest {
            value: Value::choice("real", DataValue::Real(1.0)),
            priority: Some(17),
            ..Default::default()
        };
        let mut buf = [0u8; 64];
        let mut w = Writer::new(&mut buf);
        let err = req.encode(&mut w, &StandardSchema).unwrap_err();
        assert_eq!(err.path(), ["priority"]);
        assert_eq!(err.root_cause(), &EncodeError::ValueOutOfRange);

        let mut bytes = PRESENT_VALUE_AT_8;
        bytes[15] = 17;
        let mut r = Reader::new(&bytes);
        let err = WritePropertyRequest::decode(&mut r, &StandardSchema).unwrap_err();
        assert_eq!(err.path(), ["priority"]);
        assert!(matches!(err.root_cause(), DecodeError::Validation(_)));
    }
}
