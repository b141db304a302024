use crate::encoding::virtual_fields::bit_flag;
use crate::types::BitString;

/// View over the four-bit status-flags string. Every accessor reads the
/// underlying bits again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFlags<'a> {
    bits: &'a BitString,
}

impl<'a> StatusFlags<'a> {
    pub const fn new(bits: &'a BitString) -> Self {
        Self { bits }
    }

    pub fn in_alarm(&self) -> bool {
        bit_flag(self.bits.bits(), 0)
    }

    pub fn fault(&self) -> bool {
        bit_flag(self.bits.bits(), 1)
    }

    pub fn overridden(&self) -> bool {
        bit_flag(self.bits.bits(), 2)
    }

    pub fn out_of_service(&self) -> bool {
        bit_flag(self.bits.bits(), 3)
    }
}
