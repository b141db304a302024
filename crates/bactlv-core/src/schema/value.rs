use crate::types::{AnyEnum, DataValue, ObjectId};
use alloc::boxed::Box;
use alloc::vec::Vec;

/// Output of the generic field-table decoder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Primitive(DataValue),
    Enum(AnyEnum),
    Record(Record),
    List(Vec<Value>),
    Choice {
        name: &'static str,
        value: Box<Value>,
    },
}

impl Value {
    /// The `name` alternative of a choice.
    pub fn choice(name: &'static str, value: impl Into<Value>) -> Self {
        Self::Choice {
            name,
            value: Box::new(value.into()),
        }
    }

    /// The selected alternative of a choice.
    pub fn as_choice(&self) -> Option<(&'static str, &Value)> {
        match self {
            Self::Choice { name, value } => Some((name, value)),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&DataValue> {
        match self {
            Self::Primitive(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&AnyEnum> {
        match self {
            Self::Enum(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_unsigned(&self) -> Option<u64> {
        self.as_primitive().and_then(DataValue::as_unsigned)
    }

    pub fn as_object_id(&self) -> Option<ObjectId> {
        self.as_primitive().and_then(DataValue::as_object_id)
    }
}

impl From<DataValue> for Value {
    fn from(value: DataValue) -> Self {
        Self::Primitive(value)
    }
}

impl From<AnyEnum> for Value {
    fn from(value: AnyEnum) -> Self {
        Self::Enum(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

/// Named fields in wire order. Absent optional fields are not stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: &'static str, value: impl Into<Value>) {
        self.fields.push((name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(n, v)| (*n, v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::encoding::reader::Reader;
    use crate::schema::{decode_fields, StandardSchema};
    use crate::services::write_property::WRITE_PROPERTY_REQUEST;
    use alloc::format;
    use alloc::vec::Vec;
    use serde_json::json;

    // binary-output 10, present-value = active at priority 16
    const BINARY_OUTPUT_ACTIVE: [u8; 13] = [
        0x0C, 0x01, 0x00, 0x00, 0x0A, 0x19, 0x55, 0x3E, 0x91, 0x01, 0x3F, 0x49, 0x10,
    ];

    #[test]
    fn decoded_record_serializes_in_wire_order() {
        let mut r = Reader::new(&BINARY_OUTPUT_ACTIVE);
        let record = decode_fields(&mut r, WRITE_PROPERTY_REQUEST, &StandardSchema).unwrap();

        let text = serde_json::to_string(&record).unwrap();
        let offsets: Vec<usize> = [
            "objectIdentifier",
            "propertyIdentifier",
            "propertyValue",
            "priority",
        ]
        .iter()
        .map(|name| text.find(&format!("\"{name}\":")).unwrap())
        .collect();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]), "{text}");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json["propertyValue"],
            json!({
                "name": "binaryPV",
                "value": { "BinaryPV": { "value": "Active", "proprietary_value": null } }
            })
        );
        assert_eq!(
            json["propertyIdentifier"],
            json!({ "PropertyIdentifier": { "value": "PresentValue", "proprietary_value": null } })
        );
        assert_eq!(json["priority"], json!({ "Unsigned": { "U8": 16 } }));
        assert_eq!(json["objectIdentifier"]["ObjectId"]["instance"], 10);
    }
}
