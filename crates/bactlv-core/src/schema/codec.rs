use crate::encoding::{
    framer::{
        parse_enclosed, parse_optional, parse_terminated_array, parse_to_end, peek_header,
        write_enclosed,
    },
    primitives::{decode_app_unsigned, encode_app_unsigned, expect_application, expect_context},
    reader::Reader,
    tag::{DataType, TagClass, TagHeader},
    value_codec::{
        decode_application_data_value, decode_application_data_value_from_header,
        decode_context_data_value, encode_application_data_value, encode_context_data_value,
    },
    writer::Writer,
};
use crate::error::FieldContext;
use crate::schema::{FieldKind, FieldSpec, PropertyKind, PropertySchema, Record, Value};
use crate::types::{AnyEnum, DataValue, ObjectType, PropertyIdentifier};
use crate::{encoding::enumerated::EnumValue, DecodeError, EncodeError};
use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

/// Element count read for array index 0.
pub const NUMBER_OF_DATA_ELEMENTS: &str = "numberOfDataElements";
/// Elements of an array property.
pub const ELEMENTS: &str = "elements";
/// Name of a single property element.
pub const ELEMENT: &str = "value";

const MAX_ENCODE_BUFFER: usize = 1 << 24;

/// Decodes `fields` in order into a record.
pub fn decode_fields(
    r: &mut Reader<'_>,
    fields: &[FieldSpec],
    schema: &dyn PropertySchema,
) -> Result<Record, DecodeError> {
    decode_sequence(r, fields, schema, None)
}

fn decode_sequence(
    r: &mut Reader<'_>,
    fields: &[FieldSpec],
    schema: &dyn PropertySchema,
    enclosing: Option<u8>,
) -> Result<Record, DecodeError> {
    let mut record = Record::new();
    for spec in fields {
        let value = if spec.optional {
            parse_optional(r, |r| decode_field(r, spec, &record, schema, enclosing))
        } else {
            decode_field(r, spec, &record, schema, enclosing).map(Some)
        }
        .field(spec.name)?;
        if let Some(value) = value {
            record.push(spec.name, value);
        }
    }
    Ok(record)
}

fn decode_field(
    r: &mut Reader<'_>,
    spec: &FieldSpec,
    siblings: &Record,
    schema: &dyn PropertySchema,
    enclosing: Option<u8>,
) -> Result<Value, DecodeError> {
    match spec.kind {
        FieldKind::Primitive(data_type) => match spec.tag {
            Some(n) => {
                let header = expect_context(r, n)?;
                decode_context_data_value(r, &header, data_type).map(Value::Primitive)
            }
            None => {
                let header = expect_application(r, data_type)?;
                decode_application_data_value_from_header(r, &header).map(Value::Primitive)
            }
        },
        FieldKind::AnyApplication => match spec.tag {
            Some(n) => parse_enclosed(r, n, decode_application_data_value).map(Value::Primitive),
            None => decode_application_data_value(r).map(Value::Primitive),
        },
        FieldKind::Enum(kind) => {
            let header = match spec.tag {
                Some(n) => expect_context(r, n)?,
                None => expect_application(r, DataType::Enumerated)?,
            };
            kind.decode(r, header.actual_length()).map(Value::Enum)
        }
        FieldKind::Sequence(fields) => match spec.tag {
            Some(n) => parse_enclosed(r, n, |r| decode_sequence(r, fields, schema, Some(n)))
                .map(Value::Record),
            None => decode_sequence(r, fields, schema, enclosing).map(Value::Record),
        },
        FieldKind::List(element) => match spec.tag {
            Some(n) => {
                parse_enclosed(r, n, |r| decode_list(r, element, schema, Some(n))).map(Value::List)
            }
            None => decode_list(r, element, schema, enclosing).map(Value::List),
        },
        FieldKind::Choice(alternatives) => match spec.tag {
            Some(n) => parse_enclosed(r, n, |r| {
                decode_choice(r, alternatives, siblings, schema, Some(n))
            }),
            None => decode_choice(r, alternatives, siblings, schema, enclosing),
        },
        FieldKind::PropertyValue {
            object_id,
            property,
            array_index,
        } => {
            let (object_type, property, index) =
                property_keys(siblings, object_id, property, array_index).ok_or(
                    DecodeError::Validation("constructed data without object type and property"),
                )?;
            let kind = lookup_property(schema, object_type, property).ok_or_else(|| {
                log::debug!(
                    "no constructed data decoder for {:?}/{:?}",
                    object_type,
                    property
                );
                DecodeError::UnknownConstructedData {
                    object_type: object_type.raw_value(),
                    property: property.raw_value(),
                }
            })?;
            match spec.tag {
                Some(n) => parse_enclosed(r, n, |r| {
                    decode_property_body(r, &kind, index, schema, Some(n))
                }),
                None => decode_property_body(r, &kind, index, schema, enclosing),
            }
        }
    }
}

fn decode_list(
    r: &mut Reader<'_>,
    element: &FieldSpec,
    schema: &dyn PropertySchema,
    end: Option<u8>,
) -> Result<Vec<Value>, DecodeError> {
    let empty = Record::new();
    match end {
        Some(tag) => parse_terminated_array(r, tag, |r| {
            decode_field(r, element, &empty, schema, end).field(element.name)
        }),
        None => parse_to_end(r, |r| {
            decode_field(r, element, &empty, schema, end).field(element.name)
        }),
    }
}

fn decode_choice(
    r: &mut Reader<'_>,
    alternatives: &[FieldSpec],
    siblings: &Record,
    schema: &dyn PropertySchema,
    enclosing: Option<u8>,
) -> Result<Value, DecodeError> {
    let header = peek_header(r)?;
    let alternative = alternatives
        .iter()
        .find(|alt| alternative_matches(alt, &header))
        .ok_or(DecodeError::Validation("no alternative matches the next tag"))?;
    log::trace!(
        "choice alternative '{}' for tag {}",
        alternative.name,
        header.actual_tag_number()
    );
    let value =
        decode_field(r, alternative, siblings, schema, enclosing).field(alternative.name)?;
    Ok(Value::Choice {
        name: alternative.name,
        value: Box::new(value),
    })
}

fn alternative_matches(alternative: &FieldSpec, header: &TagHeader) -> bool {
    if let Some(n) = alternative.tag {
        return header.is_context() && header.actual_tag_number() == n;
    }
    let primitive_application = header.tag_class == TagClass::Application
        && !header.is_opening_tag()
        && !header.is_closing_tag();
    match alternative.kind {
        FieldKind::Primitive(data_type) => {
            primitive_application && header.actual_tag_number() == data_type as u8
        }
        FieldKind::Enum(_) => {
            primitive_application && header.actual_tag_number() == DataType::Enumerated as u8
        }
        FieldKind::AnyApplication => primitive_application,
        FieldKind::Sequence(fields) => fields
            .first()
            .is_some_and(|first| alternative_matches(first, header)),
        FieldKind::List(element) => alternative_matches(element, header),
        FieldKind::Choice(inner) => inner.iter().any(|alt| alternative_matches(alt, header)),
        FieldKind::PropertyValue { .. } => false,
    }
}

type PropertyKeys = (EnumValue<ObjectType>, EnumValue<PropertyIdentifier>, Option<u64>);

fn property_keys(
    siblings: &Record,
    object_id: &str,
    property: &str,
    array_index: &str,
) -> Option<PropertyKeys> {
    let object_type = siblings.get(object_id)?.as_object_id()?.object_type_value();
    let property = match siblings.get(property)?.as_enum()? {
        AnyEnum::PropertyIdentifier(p) => *p,
        _ => return None,
    };
    let index = siblings.get(array_index).and_then(Value::as_unsigned);
    Some((object_type, property, index))
}

fn lookup_property(
    schema: &dyn PropertySchema,
    object_type: EnumValue<ObjectType>,
    property: EnumValue<PropertyIdentifier>,
) -> Option<PropertyKind> {
    let kind = schema.property_kind(object_type, property)?;
    log::trace!(
        "constructed data for {:?}/{:?}: {:?}",
        object_type.value(),
        property.value(),
        kind
    );
    Some(kind)
}

const fn element_spec(kind: &PropertyKind) -> FieldSpec {
    FieldSpec::application(ELEMENT, kind.element)
}

fn decode_property_body(
    r: &mut Reader<'_>,
    kind: &PropertyKind,
    array_index: Option<u64>,
    schema: &dyn PropertySchema,
    end: Option<u8>,
) -> Result<Value, DecodeError> {
    let element = element_spec(kind);
    if !kind.array {
        return decode_field(r, &element, &Record::new(), schema, end).field(ELEMENT);
    }

    let mut record = Record::new();
    if array_index == Some(0) {
        let count = parse_optional(r, decode_app_unsigned).field(NUMBER_OF_DATA_ELEMENTS)?;
        if let Some(count) = count {
            record.push(NUMBER_OF_DATA_ELEMENTS, DataValue::Unsigned(count));
        }
    }
    let items = decode_list(r, &element, schema, end).field(ELEMENTS)?;
    record.push(ELEMENTS, Value::List(items));
    Ok(Value::Record(record))
}

/// Writes `record` following `fields`. Headers and lengths are recomputed
/// from the values.
pub fn encode_fields(
    w: &mut Writer<'_>,
    fields: &[FieldSpec],
    record: &Record,
    schema: &dyn PropertySchema,
) -> Result<(), EncodeError> {
    for spec in fields {
        match record.get(spec.name) {
            Some(value) => encode_field(w, spec, value, record, schema).field(spec.name)?,
            None if spec.optional => {}
            None => return Err(EncodeError::MissingField(spec.name)),
        }
    }
    Ok(())
}

fn encode_field(
    w: &mut Writer<'_>,
    spec: &FieldSpec,
    value: &Value,
    siblings: &Record,
    schema: &dyn PropertySchema,
) -> Result<(), EncodeError> {
    match (spec.kind, value) {
        (FieldKind::Primitive(data_type), Value::Primitive(v)) if v.data_type() == data_type => {
            match spec.tag {
                Some(n) => encode_context_data_value(w, n, v),
                None => encode_application_data_value(w, v),
            }
        }
        (FieldKind::AnyApplication, Value::Primitive(v)) => match spec.tag {
            Some(n) => write_enclosed(w, n, |w| encode_application_data_value(w, v)),
            None => encode_application_data_value(w, v),
        },
        (FieldKind::Enum(kind), Value::Enum(v)) if v.kind() == kind => {
            let header = match spec.tag {
                Some(n) => TagHeader::balanced(TagClass::ContextSpecific, n, v.payload_len()),
                None => TagHeader::balanced(
                    TagClass::Application,
                    DataType::Enumerated as u8,
                    v.payload_len(),
                ),
            };
            header.encode(w)?;
            v.encode_payload(w)
        }
        (FieldKind::Sequence(fields), Value::Record(record)) => match spec.tag {
            Some(n) => write_enclosed(w, n, |w| encode_fields(w, fields, record, schema)),
            None => encode_fields(w, fields, record, schema),
        },
        (FieldKind::List(element), Value::List(items)) => match spec.tag {
            Some(n) => write_enclosed(w, n, |w| encode_list(w, element, items, schema)),
            None => encode_list(w, element, items, schema),
        },
        (FieldKind::Choice(alternatives), Value::Choice { name, value }) => {
            let alternative = alternatives
                .iter()
                .find(|alt| alt.name == *name)
                .ok_or(EncodeError::ValueMismatch)?;
            let body = |w: &mut Writer<'_>| {
                encode_field(w, alternative, value, siblings, schema).field(alternative.name)
            };
            match spec.tag {
                Some(n) => write_enclosed(w, n, body),
                None => body(w),
            }
        }
        (
            FieldKind::PropertyValue {
                object_id,
                property,
                array_index,
            },
            value,
        ) => {
            let (object_type, property, _) =
                property_keys(siblings, object_id, property, array_index)
                    .ok_or(EncodeError::MissingField(property))?;
            let kind = lookup_property(schema, object_type, property).ok_or(
                EncodeError::UnknownConstructedData {
                    object_type: object_type.raw_value(),
                    property: property.raw_value(),
                },
            )?;
            match spec.tag {
                Some(n) => write_enclosed(w, n, |w| encode_property_body(w, &kind, value, schema)),
                None => encode_property_body(w, &kind, value, schema),
            }
        }
        _ => Err(EncodeError::ValueMismatch),
    }
}

fn encode_list(
    w: &mut Writer<'_>,
    element: &FieldSpec,
    items: &[Value],
    schema: &dyn PropertySchema,
) -> Result<(), EncodeError> {
    let empty = Record::new();
    for item in items {
        encode_field(w, element, item, &empty, schema).field(element.name)?;
    }
    Ok(())
}

fn encode_property_body(
    w: &mut Writer<'_>,
    kind: &PropertyKind,
    value: &Value,
    schema: &dyn PropertySchema,
) -> Result<(), EncodeError> {
    let element = element_spec(kind);
    if !kind.array {
        return encode_field(w, &element, value, &Record::new(), schema).field(ELEMENT);
    }

    let record = value.as_record().ok_or(EncodeError::ValueMismatch)?;
    if let Some(count) = record.get(NUMBER_OF_DATA_ELEMENTS) {
        let count = count.as_unsigned().ok_or(EncodeError::ValueMismatch);
        count
            .and_then(|n| encode_app_unsigned(w, n))
            .field(NUMBER_OF_DATA_ELEMENTS)?;
    }
    let items = record.get(ELEMENTS).and_then(Value::as_list).unwrap_or(&[]);
    encode_list(w, &element, items, schema).field(ELEMENTS)
}

/// Encodes into a fresh buffer, growing it until the record fits.
pub fn encode_to_vec(
    fields: &[FieldSpec],
    record: &Record,
    schema: &dyn PropertySchema,
) -> Result<Vec<u8>, EncodeError> {
    let mut capacity = 64;
    loop {
        let mut buf = vec![0u8; capacity];
        let mut w = Writer::new(&mut buf);
        match encode_fields(&mut w, fields, record, schema) {
            Ok(()) => {
                let len = w.position();
                buf.truncate(len);
                return Ok(buf);
            }
            Err(e)
                if *e.root_cause() == EncodeError::BufferTooSmall
                    && capacity < MAX_ENCODE_BUFFER =>
            {
                capacity *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Encoded size of `record` in bytes.
pub fn encoded_len(
    fields: &[FieldSpec],
    record: &Record,
    schema: &dyn PropertySchema,
) -> Result<usize, EncodeError> {
    encode_to_vec(fields, record, schema).map(|bytes| bytes.len())
}
