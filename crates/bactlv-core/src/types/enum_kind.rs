use crate::encoding::{
    enumerated::{decode_enum_value, encode_enum_value, BacnetEnum, EnumValue},
    reader::Reader,
    writer::Writer,
};
use crate::types::{
    Action, BinaryPV, DeviceStatus, DoorStatus, EngineeringUnits, ErrorClass, ErrorCode,
    EventState, LifeSafetyState, NotifyType, ObjectType, Polarity, PropertyIdentifier,
    Reliability, Segmentation,
};
use crate::{DecodeError, EncodeError};

macro_rules! enum_kinds {
    ($( $kind:ident => $ty:ty, )+) => {
        /// Enumerations a field table can name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum EnumKind {
            $( $kind, )+
        }

        /// A decoded enumeration of any [`EnumKind`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum AnyEnum {
            $( $kind(EnumValue<$ty>), )+
        }

        impl EnumKind {
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$kind => <$ty as BacnetEnum>::NAME, )+
                }
            }

            pub fn decode(self, r: &mut Reader<'_>, actual_length: u32) -> Result<AnyEnum, DecodeError> {
                Ok(match self {
                    $( Self::$kind => AnyEnum::$kind(decode_enum_value::<$ty>(r, actual_length)?), )+
                })
            }

            /// `None` when `raw` is unknown to a closed enumeration.
            pub fn from_raw(self, raw: u32) -> Option<AnyEnum> {
                match self {
                    $( Self::$kind => EnumValue::<$ty>::from_raw(raw).map(AnyEnum::$kind), )+
                }
            }
        }

        impl AnyEnum {
            pub fn kind(&self) -> EnumKind {
                match self {
                    $( Self::$kind(_) => EnumKind::$kind, )+
                }
            }

            pub fn raw_value(&self) -> u32 {
                match self {
                    $( Self::$kind(v) => v.raw_value(), )+
                }
            }

            pub fn is_proprietary(&self) -> bool {
                match self {
                    $( Self::$kind(v) => v.is_proprietary(), )+
                }
            }

            pub fn encode_payload(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
                match self {
                    $( Self::$kind(v) => encode_enum_value(w, v), )+
                }
            }
        }

        $(
            impl From<EnumValue<$ty>> for AnyEnum {
                fn from(value: EnumValue<$ty>) -> Self {
                    Self::$kind(value)
                }
            }
        )+
    };
}

enum_kinds! {
    ObjectType => ObjectType,
    PropertyIdentifier => PropertyIdentifier,
    EngineeringUnits => EngineeringUnits,
    EventState => EventState,
    Reliability => Reliability,
    DeviceStatus => DeviceStatus,
    BinaryPV => BinaryPV,
    Polarity => Polarity,
    Segmentation => Segmentation,
    NotifyType => NotifyType,
    ErrorClass => ErrorClass,
    ErrorCode => ErrorCode,
    LifeSafetyState => LifeSafetyState,
    DoorStatus => DoorStatus,
    Action => Action,
}

impl AnyEnum {
    pub fn payload_len(&self) -> u32 {
        crate::encoding::enumerated::enum_payload_len(self.raw_value())
    }
}

#[cfg(test)]
mod tests {
    use super::{AnyEnum, EnumKind};
    use crate::encoding::{enumerated::EnumValue, reader::Reader, writer::Writer};
    use crate::types::{EngineeringUnits, Reliability};
    use crate::DecodeError;

    #[test]
    fn dispatch_by_kind() {
        let mut r = Reader::new(&[62]);
        let v = EnumKind::EngineeringUnits.decode(&mut r, 1).unwrap();
        assert_eq!(
            v,
            AnyEnum::EngineeringUnits(EnumValue::from(EngineeringUnits::DegreesCelsius))
        );
        assert_eq!(v.kind(), EnumKind::EngineeringUnits);
        assert_eq!(EnumKind::EngineeringUnits.name(), "BACnetEngineeringUnits");
    }

    #[test]
    fn proprietary_through_kind() {
        let v = EnumKind::Reliability.from_raw(100).unwrap();
        assert!(v.is_proprietary());
        assert_eq!(v.raw_value(), 100);
        assert_eq!(v.payload_len(), 1);

        let mut buf = [0u8; 2];
        let mut w = Writer::new(&mut buf);
        v.encode_payload(&mut w).unwrap();
        assert_eq!(w.as_written(), &[100]);

        let known: AnyEnum = EnumValue::from(Reliability::OverRange).into();
        assert!(!known.is_proprietary());
    }

    #[test]
    fn closed_kind_rejects_unknown() {
        assert_eq!(EnumKind::BinaryPV.from_raw(2), None);
        let mut r = Reader::new(&[2]);
        assert_eq!(
            EnumKind::BinaryPV.decode(&mut r, 1).unwrap_err(),
            DecodeError::InvalidValue
        );
    }
}
