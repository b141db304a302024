use crate::encoding::primitives::{SignedInteger, UnsignedInteger};
use crate::encoding::tag::DataType;
use crate::types::{BitString, CharacterString, Date, ObjectId, Time};
use alloc::vec::Vec;

/// A primitive BACnet value of any application data type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DataValue {
    Null,
    Boolean(bool),
    Unsigned(UnsignedInteger),
    Signed(SignedInteger),
    Real(f32),
    Double(f64),
    OctetString(Vec<u8>),
    CharacterString(CharacterString),
    BitString(BitString),
    /// Raw enumerated value; typed enumerations live in `AnyEnum`.
    Enumerated(u32),
    Date(Date),
    Time(Time),
    ObjectId(ObjectId),
}

impl DataValue {
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Null => DataType::Null,
            Self::Boolean(_) => DataType::Boolean,
            Self::Unsigned(_) => DataType::UnsignedInt,
            Self::Signed(_) => DataType::SignedInt,
            Self::Real(_) => DataType::Real,
            Self::Double(_) => DataType::Double,
            Self::OctetString(_) => DataType::OctetString,
            Self::CharacterString(_) => DataType::CharacterString,
            Self::BitString(_) => DataType::BitString,
            Self::Enumerated(_) => DataType::Enumerated,
            Self::Date(_) => DataType::Date,
            Self::Time(_) => DataType::Time,
            Self::ObjectId(_) => DataType::ObjectId,
        }
    }

    pub fn unsigned(value: u64) -> Self {
        Self::Unsigned(UnsignedInteger::from_value(value))
    }

    pub fn signed(value: i64) -> Self {
        Self::Signed(SignedInteger::from_value(value))
    }

    pub fn as_unsigned(&self) -> Option<u64> {
        match self {
            Self::Unsigned(v) => Some(v.actual_value()),
            _ => None,
        }
    }

    pub fn as_object_id(&self) -> Option<ObjectId> {
        match self {
            Self::ObjectId(v) => Some(*v),
            _ => None,
        }
    }
}
