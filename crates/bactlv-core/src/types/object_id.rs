use crate::encoding::{
    enumerated::{BacnetEnum, EnumValue},
    reader::Reader,
    writer::Writer,
};
use crate::types::ObjectType;
use crate::{DecodeError, EncodeError};

const TYPE_BITS: u8 = 10;
const INSTANCE_BITS: u8 = 22;
pub const MAX_INSTANCE: u32 = 0x3F_FFFF;

/// A BACnet object identifier: 10-bit object type and 22-bit instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ObjectId {
    object_type: EnumValue<ObjectType>,
    instance: u32,
}

impl ObjectId {
    /// Returns `None` for an instance wider than 22 bits or for the
    /// proprietary sentinel, which needs a raw type code.
    pub fn new(object_type: ObjectType, instance: u32) -> Option<Self> {
        if instance > MAX_INSTANCE {
            return None;
        }
        Some(Self {
            object_type: EnumValue::known(object_type)?,
            instance,
        })
    }

    /// Unpacks a 32-bit wire value.
    pub fn from_raw(raw: u32) -> Self {
        let type_code = raw >> INSTANCE_BITS;
        Self {
            object_type: EnumValue::from_raw(type_code)
                .unwrap_or_else(|| EnumValue::from(ObjectType::VendorProprietary)),
            instance: raw & MAX_INSTANCE,
        }
    }

    pub fn raw(&self) -> u32 {
        (self.object_type.raw_value() << INSTANCE_BITS) | self.instance
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type.value()
    }

    pub fn object_type_value(&self) -> EnumValue<ObjectType> {
        self.object_type
    }

    pub fn proprietary_type(&self) -> Option<u32> {
        self.object_type.proprietary_value()
    }

    pub fn is_proprietary(&self) -> bool {
        self.object_type.is_proprietary()
    }

    pub fn instance(&self) -> u32 {
        self.instance
    }

    pub fn decode_payload(r: &mut Reader<'_>, len: u32) -> Result<Self, DecodeError> {
        if len != 4 {
            return Err(DecodeError::InvalidLength);
        }
        let start = r.bit_position();
        let code = r.read_bits(TYPE_BITS)? as u32;
        let object_type = match ObjectType::from_raw(code) {
            Some(known) => EnumValue::from(known),
            None => {
                r.reset_to(start);
                let raw = r.read_bits(TYPE_BITS)? as u32;
                EnumValue::from_raw(raw).ok_or(DecodeError::InvalidValue)?
            }
        };
        let instance = r.read_bits(INSTANCE_BITS)? as u32;
        Ok(Self {
            object_type,
            instance,
        })
    }

    pub fn encode_payload(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        let code = self.object_type.raw_value();
        if self.instance > MAX_INSTANCE || code > 0x3FF {
            return Err(EncodeError::ValueOutOfRange);
        }
        w.write_bits(TYPE_BITS, code as u64)?;
        w.write_bits(INSTANCE_BITS, self.instance as u64)
    }
}
