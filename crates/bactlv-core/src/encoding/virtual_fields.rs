//! Derived fields. These read already-decoded data, never the cursor, and
//! contribute no bytes to the wire encoding.

use crate::encoding::enumerated::{BacnetEnum, EnumValue};

/// `bits[index]`, or `false` past the end.
pub fn bit_flag(bits: &[bool], index: usize) -> bool {
    bits.get(index).copied().unwrap_or(false)
}

pub fn is_proprietary<E: BacnetEnum>(value: &EnumValue<E>) -> bool {
    value.is_proprietary()
}
