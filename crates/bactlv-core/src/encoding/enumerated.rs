use crate::encoding::{
    primitives::{expect_application, expect_context},
    reader::Reader,
    tag::{DataType, TagClass, TagHeader},
    writer::Writer,
};
use crate::{DecodeError, EncodeError};
use core::fmt::Debug;

/// A BACnet enumeration with a fixed raw value table.
///
/// Open enumerations reserve a range for vendors and name a
/// `VENDOR_PROPRIETARY` variant that stands in for any value outside the
/// table; closed enumerations leave it `None` and reject unknown values.
pub trait BacnetEnum: Copy + Eq + Debug + 'static {
    const NAME: &'static str;
    const VENDOR_PROPRIETARY: Option<Self>;

    fn from_raw(raw: u32) -> Option<Self>;
    fn to_raw(self) -> u32;
}

/// Decoded enumeration plus the raw vendor value when the variant is the
/// proprietary sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnumValue<E> {
    value: E,
    proprietary_value: Option<u32>,
}

impl<E: BacnetEnum> EnumValue<E> {
    /// Maps a raw wire value. `None` for an unknown value of a closed
    /// enumeration.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match E::from_raw(raw) {
            Some(value) => Some(Self {
                value,
                proprietary_value: None,
            }),
            None => E::VENDOR_PROPRIETARY.map(|value| Self {
                value,
                proprietary_value: Some(raw),
            }),
        }
    }

    /// Wraps a table variant. The sentinel has no raw value of its own and
    /// must be built with [`EnumValue::from_raw`].
    pub fn known(value: E) -> Option<Self> {
        if E::VENDOR_PROPRIETARY == Some(value) {
            return None;
        }
        Some(Self {
            value,
            proprietary_value: None,
        })
    }

    pub fn value(&self) -> E {
        self.value
    }

    pub fn proprietary_value(&self) -> Option<u32> {
        self.proprietary_value
    }

    pub fn raw_value(&self) -> u32 {
        self.proprietary_value.unwrap_or_else(|| self.value.to_raw())
    }

    pub fn is_proprietary(&self) -> bool {
        E::VENDOR_PROPRIETARY == Some(self.value)
    }
}

impl<E: BacnetEnum> From<E> for EnumValue<E> {
    fn from(value: E) -> Self {
        Self {
            value,
            proprietary_value: None,
        }
    }
}

/// Reads `actual_length` bytes as an unsigned integer and maps them through
/// the enumeration table.
pub fn read_enum<E: BacnetEnum>(r: &mut Reader<'_>, actual_length: u32) -> Result<E, DecodeError> {
    let raw = read_raw(r, actual_length)?;
    match E::from_raw(raw) {
        Some(v) => Ok(v),
        None => match E::VENDOR_PROPRIETARY {
            Some(sentinel) => Ok(sentinel),
            None => {
                log::debug!("{} has no variant for raw value {raw}", E::NAME);
                Err(DecodeError::InvalidValue)
            }
        },
    }
}

/// Re-reads the bytes just consumed by [`read_enum`] as the raw vendor value.
pub fn read_proprietary(
    r: &mut Reader<'_>,
    actual_length: u32,
    should_read: bool,
) -> Result<Option<u32>, DecodeError> {
    if !should_read {
        return Ok(None);
    }
    let bits = (actual_length as usize) * 8;
    let pos = r
        .bit_position()
        .checked_sub(bits)
        .ok_or(DecodeError::InvalidLength)?;
    r.reset_to(pos);
    read_raw(r, actual_length).map(Some)
}

pub fn decode_enum_value<E: BacnetEnum>(
    r: &mut Reader<'_>,
    actual_length: u32,
) -> Result<EnumValue<E>, DecodeError> {
    let value = read_enum::<E>(r, actual_length)?;
    let proprietary_value =
        read_proprietary(r, actual_length, E::VENDOR_PROPRIETARY == Some(value))?;
    Ok(EnumValue {
        value,
        proprietary_value,
    })
}

/// Emits the minimal-width payload of a table variant; the sentinel emits
/// nothing.
pub fn write_enum<E: BacnetEnum>(w: &mut Writer<'_>, value: E) -> Result<(), EncodeError> {
    if E::VENDOR_PROPRIETARY == Some(value) {
        return Ok(());
    }
    write_raw(w, value.to_raw())
}

pub fn write_proprietary(
    w: &mut Writer<'_>,
    raw: u32,
    should_write: bool,
) -> Result<(), EncodeError> {
    if !should_write {
        return Ok(());
    }
    write_raw(w, raw)
}

pub fn encode_enum_value<E: BacnetEnum>(
    w: &mut Writer<'_>,
    value: &EnumValue<E>,
) -> Result<(), EncodeError> {
    write_enum(w, value.value)?;
    match value.proprietary_value {
        Some(raw) => write_proprietary(w, raw, value.is_proprietary()),
        None if value.is_proprietary() => Err(EncodeError::ValueOutOfRange),
        None => Ok(()),
    }
}

/// Payload length of an enumerated raw value: 1, 2 or 4 bytes.
pub const fn enum_payload_len(raw: u32) -> u32 {
    if raw <= 0xFF {
        1
    } else if raw <= 0xFFFF {
        2
    } else {
        4
    }
}

pub fn encode_app_enum<E: BacnetEnum>(
    w: &mut Writer<'_>,
    value: &EnumValue<E>,
) -> Result<(), EncodeError> {
    let len = enum_payload_len(value.raw_value());
    TagHeader::balanced(TagClass::Application, DataType::Enumerated as u8, len).encode(w)?;
    encode_enum_value(w, value)
}

pub fn decode_app_enum<E: BacnetEnum>(r: &mut Reader<'_>) -> Result<EnumValue<E>, DecodeError> {
    let header = expect_application(r, DataType::Enumerated)?;
    decode_enum_value(r, header.actual_length())
}

pub fn encode_ctx_enum<E: BacnetEnum>(
    w: &mut Writer<'_>,
    tag_number: u8,
    value: &EnumValue<E>,
) -> Result<(), EncodeError> {
    let len = enum_payload_len(value.raw_value());
    TagHeader::balanced(TagClass::ContextSpecific, tag_number, len).encode(w)?;
    encode_enum_value(w, value)
}

pub fn decode_ctx_enum<E: BacnetEnum>(
    r: &mut Reader<'_>,
    tag_number: u8,
) -> Result<EnumValue<E>, DecodeError> {
    let header = expect_context(r, tag_number)?;
    decode_enum_value(r, header.actual_length())
}

fn read_raw(r: &mut Reader<'_>, actual_length: u32) -> Result<u32, DecodeError> {
    if !(1..=4).contains(&actual_length) {
        return Err(DecodeError::InvalidLength);
    }
    Ok(r.read_bits((actual_length * 8) as u8)? as u32)
}

fn write_raw(w: &mut Writer<'_>, raw: u32) -> Result<(), EncodeError> {
    w.write_bits((enum_payload_len(raw) * 8) as u8, raw as u64)
}

/// Declares a BACnet enumeration and its [`BacnetEnum`] table.
///
/// ```ignore
/// bacnet_enumeration! {
///     pub enum Polarity("BACnetPolarity") {
///         Normal = 0,
///         Reverse = 1,
///     }
/// }
/// ```
///
/// A trailing `vendor_proprietary Variant = raw;` line makes the enumeration
/// open.
macro_rules! bacnet_enumeration {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($label:literal) {
            $( $variant:ident = $raw:literal, )+
        }
        vendor_proprietary $sentinel:ident = $sentinel_raw:literal;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $variant, )+
            $sentinel,
        }

        impl $crate::encoding::enumerated::BacnetEnum for $name {
            const NAME: &'static str = $label;
            const VENDOR_PROPRIETARY: Option<Self> = Some(Self::$sentinel);

            fn from_raw(raw: u32) -> Option<Self> {
                match raw {
                    $( $raw => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn to_raw(self) -> u32 {
                match self {
                    $( Self::$variant => $raw, )+
                    Self::$sentinel => $sentinel_raw,
                }
            }
        }
    };
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($label:literal) {
            $( $variant:ident = $raw:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $variant, )+
        }

        impl $crate::encoding::enumerated::BacnetEnum for $name {
            const NAME: &'static str = $label;
            const VENDOR_PROPRIETARY: Option<Self> = None;

            fn from_raw(raw: u32) -> Option<Self> {
                match raw {
                    $( $raw => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn to_raw(self) -> u32 {
                match self {
                    $( Self::$variant => $raw, )+
                }
            }
        }
    };
}

pub(crate) use bacnet_enumeration;
