use bactlv_core::encoding::enumerated::EnumValue;
use bactlv_core::encoding::reader::Reader;
use bactlv_core::encoding::value_codec::{
    decode_application_data_value, encode_application_data_value,
};
use bactlv_core::encoding::writer::Writer;
use bactlv_core::schema::{
    decode_fields, encode_to_vec, FieldKind, PropertyKind, PropertySchema, StandardSchema, Value,
    RELINQUISH,
};
use bactlv_core::services::read_property::{ReadPropertyAck, ReadPropertyRequest, READ_PROPERTY_ACK};
use bactlv_core::services::write_property::WritePropertyRequest;
use bactlv_core::types::{
    AnyEnum, CharacterString, DataValue, DeviceStatus, EngineeringUnits, ObjectId, ObjectType,
    PropertyIdentifier,
};
use bactlv_core::DecodeError;

#[test]
fn read_property_frame_matches_fixture() {
    let mut buf = [0u8; 64];
    let mut w = Writer::new(&mut buf);
    ReadPropertyRequest::new(
        ObjectId::new(ObjectType::Device, 123).unwrap(),
        PropertyIdentifier::ObjectName,
    )
    .encode(&mut w)
    .unwrap();

    assert_eq!(w.as_written(), &[0x0C, 0x02, 0x00, 0x00, 0x7B, 0x19, 0x4D]);
}

#[test]
fn write_property_frame_matches_fixture() {
    let mut buf = [0u8; 64];
    let mut w = Writer::new(&mut buf);
    WritePropertyRequest {
        object_id: ObjectId::new(ObjectType::BinaryOutput, 10).unwrap(),
        property_id: PropertyIdentifier::PresentValue.into(),
        value: Value::choice(
            "binaryPV",
            AnyEnum::BinaryPV(bactlv_core::types::BinaryPV::Active.into()),
        ),
        array_index: None,
        priority: Some(16),
    }
    .encode(&mut w, &StandardSchema)
    .unwrap();

    assert_eq!(
        w.as_written(),
        &[0x0C, 0x01, 0x00, 0x00, 0x0A, 0x19, 0x55, 0x3E, 0x91, 0x01, 0x3F, 0x49, 0x10]
    );
}

#[test]
fn relinquish_frame_matches_fixture() {
    let request = WritePropertyRequest {
        object_id: ObjectId::new(ObjectType::AnalogValue, 3).unwrap(),
        priority: Some(8),
        ..Default::default()
    };
    let bytes = [
        0x0C, 0x00, 0x80, 0x00, 0x03, 0x19, 0x55, 0x3E, 0x00, 0x3F, 0x49, 0x08,
    ];

    let mut buf = [0u8; 64];
    let mut w = Writer::new(&mut buf);
    request.encode(&mut w, &StandardSchema).unwrap();
    assert_eq!(w.as_written(), bytes);

    let mut r = Reader::new(&bytes);
    let decoded = WritePropertyRequest::decode(&mut r, &StandardSchema).unwrap();
    assert_eq!(decoded.value, Value::choice(RELINQUISH, DataValue::Null));
    assert_eq!(decoded, request);
}

#[test]
fn proprietary_enumeration_keeps_its_raw_value() {
    // device 1 system-status = 300
    let bytes = [
        0x0C, 0x02, 0x00, 0x00, 0x01, 0x19, 0x70, 0x3E, 0x92, 0x01, 0x2C, 0x3F,
    ];
    let mut r = Reader::new(&bytes);
    let ack = ReadPropertyAck::decode(&mut r, &StandardSchema).unwrap();
    match &ack.value {
        Value::Enum(AnyEnum::DeviceStatus(status)) => {
            assert_eq!(status.value(), DeviceStatus::VendorProprietary);
            assert_eq!(status.proprietary_value(), Some(300));
            assert!(status.is_proprietary());
        }
        other => panic!("unexpected value {other:?}"),
    }

    let mut buf = [0u8; 32];
    let mut w = Writer::new(&mut buf);
    ack.encode(&mut w, &StandardSchema).unwrap();
    assert_eq!(w.as_written(), bytes);
}

#[test]
fn proprietary_object_type_is_reread_from_the_identifier() {
    // Object identifier, type 200 instance 1.
    let bytes = [0xC4, 0x32, 0x00, 0x00, 0x01];
    let mut r = Reader::new(&bytes);
    let value = decode_application_data_value(&mut r).unwrap();
    let id = match value {
        DataValue::ObjectId(id) => id,
        other => panic!("unexpected value {other:?}"),
    };
    assert_eq!(id.object_type(), ObjectType::VendorProprietary);
    assert_eq!(id.proprietary_type(), Some(200));
    assert_eq!(id.instance(), 1);
    assert_eq!(id.raw(), 0x3200_0001);

    let mut buf = [0u8; 8];
    let mut w = Writer::new(&mut buf);
    encode_application_data_value(&mut w, &DataValue::ObjectId(id)).unwrap();
    assert_eq!(w.as_written(), bytes);
}

#[test]
fn vendor_object_reads_shared_properties() {
    // object 200:1, object-name = "A"
    let bytes = [
        0x0C, 0x32, 0x00, 0x00, 0x01, 0x19, 0x4D, 0x3E, 0x72, 0x00, 0x41, 0x3F,
    ];
    let mut r = Reader::new(&bytes);
    let ack = ReadPropertyAck::decode(&mut r, &StandardSchema).unwrap();
    assert!(r.is_empty());
    assert_eq!(ack.object_id.proprietary_type(), Some(200));
    assert_eq!(
        ack.value,
        Value::Primitive(DataValue::CharacterString(CharacterString::utf8("A")))
    );

    let mut buf = [0u8; 32];
    let mut w = Writer::new(&mut buf);
    ack.encode(&mut w, &StandardSchema).unwrap();
    assert_eq!(w.as_written(), bytes);
}

/// Site schema layered over the standard one.
struct SiteSchema;

impl PropertySchema for SiteSchema {
    fn property_kind(
        &self,
        object_type: EnumValue<ObjectType>,
        property: EnumValue<PropertyIdentifier>,
    ) -> Option<PropertyKind> {
        if property.proprietary_value() == Some(512) {
            return Some(PropertyKind::scalar(FieldKind::Enum(
                bactlv_core::types::EnumKind::EngineeringUnits,
            )));
        }
        StandardSchema.property_kind(object_type, property)
    }
}

#[test]
fn injected_schema_resolves_vendor_properties() {
    // analog-input 4, property 512 = degrees-celsius (62)
    let bytes = [
        0x0C, 0x00, 0x00, 0x00, 0x04, 0x1A, 0x02, 0x00, 0x3E, 0x91, 0x3E, 0x3F,
    ];
    let mut r = Reader::new(&bytes);
    let err = decode_fields(&mut r, READ_PROPERTY_ACK, &StandardSchema).unwrap_err();
    assert_eq!(
        err.root_cause(),
        &DecodeError::UnknownConstructedData {
            object_type: 0,
            property: 512
        }
    );

    let mut r = Reader::new(&bytes);
    let record = decode_fields(&mut r, READ_PROPERTY_ACK, &SiteSchema).unwrap();
    assert_eq!(
        record.get("propertyValue"),
        Some(&Value::Enum(AnyEnum::EngineeringUnits(
            EngineeringUnits::DegreesCelsius.into()
        )))
    );
    assert_eq!(encode_to_vec(READ_PROPERTY_ACK, &record, &SiteSchema).unwrap(), bytes);
}

#[test]
fn truncated_ack_reports_the_failing_field() {
    let bytes = [0x0C, 0x00, 0x00, 0x00, 0x01, 0x19, 0x55, 0x3E, 0x44, 0x42, 0x91];
    let mut r = Reader::new(&bytes);
    let err = ReadPropertyAck::decode(&mut r, &StandardSchema).unwrap_err();
    assert!(err.is_eof());
    assert_eq!(err.path(), ["propertyValue", "value"]);
}
