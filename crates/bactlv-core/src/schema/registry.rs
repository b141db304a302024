use crate::encoding::{enumerated::EnumValue, tag::DataType};
use crate::schema::{FieldKind, FieldSpec};
use crate::types::{EnumKind, ObjectType, PropertyIdentifier};

/// How the value of one property is laid out inside its constructed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyKind {
    /// Kind of a single element, application tagged.
    pub element: FieldKind,
    /// Array properties carry a list of elements and, for array index 0,
    /// the element count.
    pub array: bool,
}

impl PropertyKind {
    pub const fn scalar(element: FieldKind) -> Self {
        Self {
            element,
            array: false,
        }
    }

    pub const fn array(element: FieldKind) -> Self {
        Self {
            element,
            array: true,
        }
    }
}

/// Maps `(objectType, propertyIdentifier)` to the layout of the property
/// value. `None` means the pair is unknown.
pub trait PropertySchema {
    fn property_kind(
        &self,
        object_type: EnumValue<ObjectType>,
        property: EnumValue<PropertyIdentifier>,
    ) -> Option<PropertyKind>;
}

impl<T: PropertySchema + ?Sized> PropertySchema for &T {
    fn property_kind(
        &self,
        object_type: EnumValue<ObjectType>,
        property: EnumValue<PropertyIdentifier>,
    ) -> Option<PropertyKind> {
        (**self).property_kind(object_type, property)
    }
}

/// Standard properties of the common object types.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSchema;

struct Entry {
    /// `None` applies to every object type.
    object_type: Option<ObjectType>,
    property: PropertyIdentifier,
    kind: PropertyKind,
}

const fn any(property: PropertyIdentifier, kind: PropertyKind) -> Entry {
    Entry {
        object_type: None,
        property,
        kind,
    }
}

const fn on(object_type: ObjectType, property: PropertyIdentifier, kind: PropertyKind) -> Entry {
    Entry {
        object_type: Some(object_type),
        property,
        kind,
    }
}

const REAL: PropertyKind = PropertyKind::scalar(FieldKind::Primitive(DataType::Real));
const UNSIGNED: PropertyKind = PropertyKind::scalar(FieldKind::Primitive(DataType::UnsignedInt));
const BOOLEAN: PropertyKind = PropertyKind::scalar(FieldKind::Primitive(DataType::Boolean));
const TEXT: PropertyKind = PropertyKind::scalar(FieldKind::Primitive(DataType::CharacterString));
const BITS: PropertyKind = PropertyKind::scalar(FieldKind::Primitive(DataType::BitString));
const OBJECT_ID: PropertyKind = PropertyKind::scalar(FieldKind::Primitive(DataType::ObjectId));
const ANY: PropertyKind = PropertyKind::scalar(FieldKind::AnyApplication);

const fn enumerated(kind: EnumKind) -> PropertyKind {
    PropertyKind::scalar(FieldKind::Enum(kind))
}

/// Alternative name of the NULL written to relinquish a command priority.
pub const RELINQUISH: &str = "null";

const NULL: FieldSpec = FieldSpec::application(RELINQUISH, FieldKind::Primitive(DataType::Null));

/// Commandable REAL value.
pub const NULL_OR_REAL: &[FieldSpec] = &[
    NULL,
    FieldSpec::application("real", FieldKind::Primitive(DataType::Real)),
];

/// Commandable BACnetBinaryPV value.
pub const NULL_OR_BINARY_PV: &[FieldSpec] = &[
    NULL,
    FieldSpec::application("binaryPV", FieldKind::Enum(EnumKind::BinaryPV)),
];

/// Commandable unsigned value, the state of a multi-state object.
pub const NULL_OR_UNSIGNED: &[FieldSpec] = &[
    NULL,
    FieldSpec::application("unsigned", FieldKind::Primitive(DataType::UnsignedInt)),
];

const fn commandable(alternatives: &'static [FieldSpec]) -> PropertyKind {
    PropertyKind::scalar(FieldKind::Choice(alternatives))
}

/// BACnetDeviceObjectReference.
pub const DEVICE_OBJECT_REFERENCE: &[FieldSpec] = &[
    FieldSpec::context(
        "deviceIdentifier",
        0,
        FieldKind::Primitive(DataType::ObjectId),
    )
    .optional(),
    FieldSpec::context(
        "objectIdentifier",
        1,
        FieldKind::Primitive(DataType::ObjectId),
    ),
];

use crate::types::ObjectType as O;
use crate::types::PropertyIdentifier as P;

static STANDARD_PROPERTIES: &[Entry] = &[
    any(P::ObjectIdentifier, OBJECT_ID),
    any(P::ObjectName, TEXT),
    any(P::ObjectType, enumerated(EnumKind::ObjectType)),
    any(P::Description, TEXT),
    any(P::StatusFlags, BITS),
    any(P::EventState, enumerated(EnumKind::EventState)),
    any(P::Reliability, enumerated(EnumKind::Reliability)),
    any(P::OutOfService, BOOLEAN),
    any(P::Units, enumerated(EnumKind::EngineeringUnits)),
    any(P::Polarity, enumerated(EnumKind::Polarity)),
    any(P::ActiveText, TEXT),
    any(P::InactiveText, TEXT),
    any(P::NumberOfStates, UNSIGNED),
    any(P::StateText, PropertyKind::array(FieldKind::Primitive(DataType::CharacterString))),
    any(P::NotifyType, enumerated(EnumKind::NotifyType)),
    any(P::NotificationClass, UNSIGNED),
    any(P::CovIncrement, REAL),
    any(P::HighLimit, REAL),
    any(P::LowLimit, REAL),
    any(P::Deadband, REAL),
    any(P::MinPresValue, REAL),
    any(P::MaxPresValue, REAL),
    any(P::Resolution, REAL),
    any(P::TimeDelay, UNSIGNED),
    any(P::EventEnable, BITS),
    any(P::AckedTransitions, BITS),
    any(P::LimitEnable, BITS),
    any(P::PriorityArray, PropertyKind::array(FieldKind::AnyApplication)),
    any(P::RelinquishDefault, ANY),
    any(P::PresentValue, ANY),
    any(P::PropertyList, PropertyKind::array(FieldKind::Enum(EnumKind::PropertyIdentifier))),
    any(P::ProfileName, TEXT),
    on(O::AnalogInput, P::PresentValue, REAL),
    on(O::AnalogOutput, P::PresentValue, commandable(NULL_OR_REAL)),
    on(O::AnalogValue, P::PresentValue, commandable(NULL_OR_REAL)),
    on(O::AnalogOutput, P::RelinquishDefault, commandable(NULL_OR_REAL)),
    on(O::AnalogValue, P::RelinquishDefault, commandable(NULL_OR_REAL)),
    on(O::BinaryInput, P::PresentValue, enumerated(EnumKind::BinaryPV)),
    on(O::BinaryOutput, P::PresentValue, commandable(NULL_OR_BINARY_PV)),
    on(O::BinaryValue, P::PresentValue, commandable(NULL_OR_BINARY_PV)),
    on(O::BinaryOutput, P::RelinquishDefault, commandable(NULL_OR_BINARY_PV)),
    on(O::BinaryValue, P::RelinquishDefault, commandable(NULL_OR_BINARY_PV)),
    on(O::MultiStateInput, P::PresentValue, UNSIGNED),
    on(O::MultiStateOutput, P::PresentValue, commandable(NULL_OR_UNSIGNED)),
    on(O::MultiStateValue, P::PresentValue, commandable(NULL_OR_UNSIGNED)),
    on(O::MultiStateOutput, P::RelinquishDefault, commandable(NULL_OR_UNSIGNED)),
    on(O::MultiStateValue, P::RelinquishDefault, commandable(NULL_OR_UNSIGNED)),
    on(O::LifeSafetyPoint, P::PresentValue, enumerated(EnumKind::LifeSafetyState)),
    on(O::LifeSafetyZone, P::PresentValue, enumerated(EnumKind::LifeSafetyState)),
    on(O::Loop, P::PresentValue, REAL),
    on(O::Loop, P::Action, enumerated(EnumKind::Action)),
    on(O::AccessDoor, P::DoorStatus, enumerated(EnumKind::DoorStatus)),
    on(
        O::AccessDoor,
        P::DoorMembers,
        PropertyKind::array(FieldKind::Sequence(DEVICE_OBJECT_REFERENCE)),
    ),
    on(O::Device, P::ObjectList, PropertyKind::array(FieldKind::Primitive(DataType::ObjectId))),
    on(O::Device, P::SystemStatus, enumerated(EnumKind::DeviceStatus)),
    on(O::Device, P::VendorName, TEXT),
    on(O::Device, P::VendorIdentifier, UNSIGNED),
    on(O::Device, P::ModelName, TEXT),
    on(O::Device, P::FirmwareRevision, TEXT),
    on(O::Device, P::ApplicationSoftwareVersion, TEXT),
    on(O::Device, P::Location, TEXT),
    on(O::Device, P::ProtocolVersion, UNSIGNED),
    on(O::Device, P::ProtocolRevision, UNSIGNED),
    on(O::Device, P::DatabaseRevision, UNSIGNED),
    on(O::Device, P::MaxApduLengthAccepted, UNSIGNED),
    on(O::Device, P::SegmentationSupported, enumerated(EnumKind::Segmentation)),
    on(O::Device, P::ApduTimeout, UNSIGNED),
    on(O::Device, P::NumberOfApduRetries, UNSIGNED),
    on(O::Device, P::UtcOffset, PropertyKind::scalar(FieldKind::Primitive(DataType::SignedInt))),
];

impl PropertySchema for StandardSchema {
    fn property_kind(
        &self,
        object_type: EnumValue<ObjectType>,
        property: EnumValue<PropertyIdentifier>,
    ) -> Option<PropertyKind> {
        if property.is_proprietary() {
            return None;
        }
        let property = property.value();
        // Vendor object types only see the entries shared by every type.
        let exact = if object_type.is_proprietary() {
            None
        } else {
            STANDARD_PROPERTIES
                .iter()
                .find(|e| e.object_type == Some(object_type.value()) && e.property == property)
        };
        exact
            .or_else(|| {
                STANDARD_PROPERTIES
                    .iter()
                    .find(|e| e.object_type.is_none() && e.property == property)
            })
            .map(|e| e.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        PropertyKind, PropertySchema, StandardSchema, DEVICE_OBJECT_REFERENCE, NULL_OR_BINARY_PV,
        NULL_OR_REAL,
    };
    use crate::encoding::{enumerated::EnumValue, tag::DataType};
    use crate::schema::FieldKind;
    use crate::types::{EnumKind, ObjectType, PropertyIdentifier};

    fn lookup(object_type: ObjectType, property: PropertyIdentifier) -> Option<PropertyKind> {
        StandardSchema.property_kind(EnumValue::from(object_type), EnumValue::from(property))
    }

    #[test]
    fn exact_entry_wins_over_wildcard() {
        assert_eq!(
            lookup(ObjectType::AnalogInput, PropertyIdentifier::PresentValue),
            Some(PropertyKind::scalar(FieldKind::Primitive(DataType::Real)))
        );
        assert_eq!(
            lookup(ObjectType::BinaryInput, PropertyIdentifier::PresentValue),
            Some(PropertyKind::scalar(FieldKind::Enum(EnumKind::BinaryPV)))
        );
        assert_eq!(
            lookup(ObjectType::Schedule, PropertyIdentifier::PresentValue),
            Some(PropertyKind::scalar(FieldKind::AnyApplication))
        );
    }

    #[test]
    fn door_members_is_an_array_of_references() {
        assert_eq!(
            lookup(ObjectType::AccessDoor, PropertyIdentifier::DoorMembers),
            Some(PropertyKind::array(FieldKind::Sequence(
                DEVICE_OBJECT_REFERENCE
            )))
        );
    }

    #[test]
    fn commandable_values_accept_null() {
        assert_eq!(
            lookup(ObjectType::AnalogValue, PropertyIdentifier::PresentValue),
            Some(PropertyKind::scalar(FieldKind::Choice(NULL_OR_REAL)))
        );
        assert_eq!(
            lookup(ObjectType::BinaryOutput, PropertyIdentifier::RelinquishDefault),
            Some(PropertyKind::scalar(FieldKind::Choice(NULL_OR_BINARY_PV)))
        );
        assert_eq!(NULL_OR_REAL[0].kind, FieldKind::Primitive(DataType::Null));
    }

    #[test]
    fn vendor_object_type_uses_shared_entries() {
        let vendor = EnumValue::<ObjectType>::from_raw(200).unwrap();
        assert!(vendor.is_proprietary());
        assert_eq!(
            StandardSchema.property_kind(vendor, EnumValue::from(PropertyIdentifier::ObjectName)),
            Some(PropertyKind::scalar(FieldKind::Primitive(
                DataType::CharacterString
            )))
        );
        assert_eq!(
            StandardSchema.property_kind(vendor, EnumValue::from(PropertyIdentifier::PresentValue)),
            Some(PropertyKind::scalar(FieldKind::AnyApplication))
        );
        assert_eq!(
            StandardSchema.property_kind(vendor, EnumValue::from(PropertyIdentifier::ObjectList)),
            None
        );
    }

    #[test]
    fn unknown_pairs() {
        assert_eq!(lookup(ObjectType::Device, PropertyIdentifier::DoorMembers), None);
        let vendor = EnumValue::<PropertyIdentifier>::from_raw(600).unwrap();
        assert_eq!(
            StandardSchema.property_kind(EnumValue::from(ObjectType::Device), vendor),
            None
        );
        let vendor_type = EnumValue::<ObjectType>::from_raw(200).unwrap();
        assert_eq!(StandardSchema.property_kind(vendor_type, vendor), None);
    }
}
