//! Service parameter tables and typed views over the records they produce.

pub mod read_property;
pub mod write_property;

use crate::encoding::enumerated::EnumValue;
use crate::error::FieldContext;
use crate::schema::{FieldKind, Record, Value};
use crate::types::{AnyEnum, ObjectId, PropertyIdentifier};
use crate::DecodeError;

pub const OBJECT_IDENTIFIER: &str = "objectIdentifier";
pub const PROPERTY_IDENTIFIER: &str = "propertyIdentifier";
pub const PROPERTY_ARRAY_INDEX: &str = "propertyArrayIndex";
pub const PROPERTY_VALUE: &str = "propertyValue";
pub const PRIORITY: &str = "priority";

/// Property value dispatched on the object identifier and property of the
/// same record.
pub const PROPERTY_VALUE_KIND: FieldKind = FieldKind::PropertyValue {
    object_id: OBJECT_IDENTIFIER,
    property: PROPERTY_IDENTIFIER,
    array_index: PROPERTY_ARRAY_INDEX,
};

pub(crate) fn required<'r>(record: &'r Record, name: &'static str) -> Result<&'r Value, DecodeError> {
    record
        .get(name)
        .ok_or(DecodeError::Validation("required field is missing"))
        .field(name)
}

pub(crate) fn object_id_field(record: &Record, name: &'static str) -> Result<ObjectId, DecodeError> {
    required(record, name)?
        .as_object_id()
        .ok_or(DecodeError::InvalidValue)
        .field(name)
}

pub(crate) fn property_field(
    record: &Record,
    name: &'static str,
) -> Result<EnumValue<PropertyIdentifier>, DecodeError> {
    match required(record, name)? {
        Value::Enum(AnyEnum::PropertyIdentifier(p)) => Ok(*p),
        _ => Err(DecodeError::InvalidValue.in_field(name)),
    }
}

pub(crate) fn optional_u32_field(
    record: &Record,
    name: &'static str,
) -> Result<Option<u32>, DecodeError> {
    let Some(value) = record.get(name) else {
        return Ok(None);
    };
    value
        .as_unsigned()
        .and_then(|v| u32::try_from(v).ok())
        .map(Some)
        .ok_or(DecodeError::InvalidValue)
        .field(name)
}
