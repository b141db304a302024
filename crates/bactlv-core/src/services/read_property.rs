use crate::encoding::{enumerated::EnumValue, reader::Reader, tag::DataType, writer::Writer};
use crate::schema::{
    decode_fields, encode_fields, FieldKind, FieldSpec, PropertySchema, Record, StandardSchema,
    Value,
};
use crate::services::{
    object_id_field, optional_u32_field, property_field, required, OBJECT_IDENTIFIER,
    PROPERTY_ARRAY_INDEX, PROPERTY_IDENTIFIER, PROPERTY_VALUE, PROPERTY_VALUE_KIND,
};
use crate::types::{AnyEnum, DataValue, EnumKind, ObjectId, PropertyIdentifier};
use crate::{DecodeError, EncodeError};

pub const SERVICE_READ_PROPERTY: u8 = 0x0C;

pub static READ_PROPERTY_REQUEST: &[FieldSpec] = &[
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
];

pub static READ_PROPERTY_ACK: &[FieldSpec] = &[
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
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadPropertyRequest {
    pub object_id: ObjectId,
    pub property_id: EnumValue<PropertyIdentifier>,
    pub array_index: Option<u32>,
}

impl ReadPropertyRequest {
    pub fn new(object_id: ObjectId, property_id: PropertyIdentifier) -> Self {
        Self {
            object_id,
            property_id: property_id.into(),
            array_index: None,
        }
    }

    pub fn to_record(&self) -> Record {
        property_reference(&self.object_id, self.property_id, self.array_index)
    }

    pub fn from_record(record: &Record) -> Result<Self, DecodeError> {
        Ok(Self {
            object_id: object_id_field(record, OBJECT_IDENTIFIER)?,
            property_id: property_field(record, PROPERTY_IDENTIFIER)?,
            array_index: optional_u32_field(record, PROPERTY_ARRAY_INDEX)?,
        })
    }

    pub fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        encode_fields(w, READ_PROPERTY_REQUEST, &self.to_record(), &StandardSchema)
    }

    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let record = decode_fields(r, READ_PROPERTY_REQUEST, &StandardSchema)?;
        Self::from_record(&record)
    }
}

/// Result of a ReadProperty. `value` is shaped by the schema entry for the
/// object type and property: a single element, or a record of
/// `numberOfDataElements`/`elements` for array properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadPropertyAck {
    pub object_id: ObjectId,
    pub property_id: EnumValue<PropertyIdentifier>,
    pub array_index: Option<u32>,
    pub value: Value,
}

impl ReadPropertyAck {
    pub fn to_record(&self) -> Record {
        property_reference(&self.object_id, self.property_id, self.array_index)
            .with(PROPERTY_VALUE, self.value.clone())
    }

    pub fn from_record(record: &Record) -> Result<Self, DecodeError> {
        Ok(Self {
            object_id: object_id_field(record, OBJECT_IDENTIFIER)?,
            property_id: property_field(record, PROPERTY_IDENTIFIER)?,
            array_index: optional_u32_field(record, PROPERTY_ARRAY_INDEX)?,
            value: required(record, PROPERTY_VALUE)?.clone(),
        })
    }

    pub fn encode(&self, w: &mut Writer<'_>, schema: &dyn PropertySchema) -> Result<(), EncodeError> {
        encode_fields(w, READ_PROPERTY_ACK, &self.to_record(), schema)
    }

    pub fn decode(r: &mut Reader<'_>, schema: &dyn PropertySchema) -> Result<Self, DecodeError> {
        let record = decode_fields(r, READ_PROPERTY_ACK, schema)?;
        Self::from_record(&record)
    }
}

pub(crate) fn property_reference(
    object_id: &ObjectId,
    property_id: EnumValue<PropertyIdentifier>,
    array_index: Option<u32>,
) -> Record {
    let mut record = Record::new()
        .with(OBJECT_IDENTIFIER, DataValue::ObjectId(*object_id))
        .with(PROPERTY_IDENTIFIER, AnyEnum::from(property_id));
    if let Some(index) = array_index {
        record.push(PROPERTY_ARRAY_INDEX, DataValue::unsigned(u64::from(index)));
    }
    record
}

#[cfg(test)]
mod tests {
    use super::{ReadPropertyAck, ReadPropertyRequest};
    use crate::encoding::{enumerated::EnumValue, reader::Reader, writer::Writer};
    use crate::schema::{StandardSchema, Value};
    use crate::types::{
        AnyEnum, BinaryPV, DataValue, ObjectId, ObjectType, PropertyIdentifier,
    };
    use crate::DecodeError;

    #[test]
    fn encode_request_with_array_index() {
        let mut req = ReadPropertyRequest::new(
            ObjectId::new(ObjectType::AnalogInput, 1).unwrap(),
            PropertyIdentifier::PresentValue,
        );
        let mut buf = [0u8; 32];
        let mut w = Writer::new(&mut buf);
        req.encode(&mut w).unwrap();
        assert_eq!(w.as_written(), [0x0C, 0x00, 0x00, 0x00, 0x01, 0x19, 0x55]);

        req.array_index = Some(3);
        let mut buf = [0u8; 32];
        let mut w = Writer::new(&mut buf);
        req.encode(&mut w).unwrap();
        assert_eq!(
            w.as_written(),
            [0x0C, 0x00, 0x00, 0x00, 0x01, 0x19, 0x55, 0x29, 0x03]
        );

        let mut r = Reader::new(w.as_written());
        assert_eq!(ReadPropertyRequest::decode(&mut r).unwrap(), req);
    }

    #[test]
    fn decode_real_present_value() {
        let bytes = [
            0x0C, 0x00, 0x00, 0x00, 0x01, 0x19, 0x55, 0x3E, 0x44, 0x42, 0x91, 0x00, 0x00, 0x3F,
        ];
        let mut r = Reader::new(&bytes);
        let ack = ReadPropertyAck::decode(&mut r, &StandardSchema).unwrap();
        assert!(r.is_empty());
        assert_eq!(ack.object_id.instance(), 1);
        assert_eq!(ack.property_id.value(), PropertyIdentifier::PresentValue);
        assert_eq!(ack.value, Value::Primitive(DataValue::Real(72.5)));

        let mut buf = [0u8; 32];
        let mut w = Writer::new(&mut buf);
        ack.encode(&mut w, &StandardSchema).unwrap();
        assert_eq!(w.as_written(), bytes);
    }

    #[test]
    fn binary_present_value_is_typed() {
        let bytes = [
            0x0C, 0x01, 0x40, 0x00, 0x03, 0x19, 0x55, 0x3E, 0x91, 0x01, 0x3F,
        ];
        let mut r = Reader::new(&bytes);
        let ack = ReadPropertyAck::decode(&mut r, &StandardSchema).unwrap();
        assert_eq!(ack.object_id.object_type(), ObjectType::BinaryValue);
        assert_eq!(
            ack.value,
            Value::choice(
                "binaryPV",
                AnyEnum::BinaryPV(EnumValue::from(BinaryPV::Active))
            )
        );

        // binary-input 3 is not commandable
        let mut bytes = bytes;
        bytes[1..3].copy_from_slice(&[0x00, 0xC0]);
        let mut r = Reader::new(&bytes);
        let ack = ReadPropertyAck::decode(&mut r, &StandardSchema).unwrap();
        assert_eq!(ack.object_id.object_type(), ObjectType::BinaryInput);
        assert_eq!(
            ack.value,
            Value::Enum(AnyEnum::BinaryPV(EnumValue::from(BinaryPV::Active)))
        );
    }

    #[test]
    fn missing_value_is_reported_by_name() {
        let record = ReadPropertyRequest::new(
            ObjectId::new(ObjectType::Device, 9).unwrap(),
            PropertyIdentifier::ObjectName,
        )
        .to_record();
        let err = ReadPropertyAck::from_record(&record).unwrap_err();
        assert_eq!(err.path(), ["propertyValue"]);
        assert!(matches!(err.root_cause(), DecodeError::Validation(_)));
    }
}
