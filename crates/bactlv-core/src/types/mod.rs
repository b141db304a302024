pub mod bit_string;
pub mod character_string;
pub mod data_value;
pub mod date_time;
pub mod enum_kind;
pub mod enums;
pub mod object_id;
pub mod object_type;
pub mod property_id;
pub mod status_flags;

pub use bit_string::BitString;
pub use character_string::{CharacterEncoding, CharacterString};
pub use data_value::DataValue;
pub use date_time::{Date, Time};
pub use enum_kind::{AnyEnum, EnumKind};
pub use enums::{
    Action, BinaryPV, DeviceStatus, DoorStatus, EngineeringUnits, ErrorClass, ErrorCode,
    EventState, LifeSafetyState, NotifyType, Polarity, Reliability, Segmentation,
};
pub use object_id::ObjectId;
pub use object_type::ObjectType;
pub use property_id::PropertyIdentifier;
pub use status_flags::StatusFlags;
