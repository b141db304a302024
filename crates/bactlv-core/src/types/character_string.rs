use crate::encoding::{reader::Reader, writer::Writer};
use crate::{DecodeError, EncodeError};
use alloc::string::String;
use alloc::vec::Vec;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterEncoding {
    Utf8 = 0,
    /// IBM/Microsoft DBCS.
    Dbcs = 1,
    /// JIS X 0208.
    Jis = 2,
    Ucs4 = 3,
    Ucs2 = 4,
    Iso8859_1 = 5,
}

impl CharacterEncoding {
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Utf8),
            1 => Some(Self::Dbcs),
            2 => Some(Self::Jis),
            3 => Some(Self::Ucs4),
            4 => Some(Self::Ucs2),
            5 => Some(Self::Iso8859_1),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterString {
    pub encoding: CharacterEncoding,
    pub value: String,
}

impl CharacterString {
    pub fn utf8(value: impl Into<String>) -> Self {
        Self {
            encoding: CharacterEncoding::Utf8,
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Encoding byte plus the encoded characters.
    pub fn payload_len(&self) -> u32 {
        let body = match self.encoding {
            CharacterEncoding::Utf8 | CharacterEncoding::Dbcs | CharacterEncoding::Jis => {
                self.value.len()
            }
            CharacterEncoding::Ucs4 => self.value.chars().count() * 4,
            CharacterEncoding::Ucs2 => self.value.chars().count() * 2,
            CharacterEncoding::Iso8859_1 => self.value.chars().count(),
        };
        1 + body as u32
    }

    pub fn decode_payload(r: &mut Reader<'_>, len: u32) -> Result<Self, DecodeError> {
        if len == 0 {
            return Err(DecodeError::InvalidLength);
        }
        let encoding =
            CharacterEncoding::from_u8(r.read_u8()?).ok_or(DecodeError::InvalidValue)?;
        let raw = r.read_exact(len as usize - 1)?;
        let value = match encoding {
            CharacterEncoding::Utf8 => core::str::from_utf8(raw)
                .map_err(|_| DecodeError::InvalidValue)?
                .into(),
            CharacterEncoding::Ucs4 => {
                if raw.len() % 4 != 0 {
                    return Err(DecodeError::InvalidLength);
                }
                raw.chunks_exact(4)
                    .map(|c| char::from_u32(u32::from_be_bytes([c[0], c[1], c[2], c[3]])))
                    .collect::<Option<String>>()
                    .ok_or(DecodeError::InvalidValue)?
            }
            CharacterEncoding::Ucs2 => {
                if raw.len() % 2 != 0 {
                    return Err(DecodeError::InvalidLength);
                }
                let units: Vec<u16> = raw
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
                String::from_utf16(&units).map_err(|_| DecodeError::InvalidValue)?
            }
            CharacterEncoding::Iso8859_1 => raw.iter().map(|b| *b as char).collect(),
            CharacterEncoding::Dbcs | CharacterEncoding::Jis => {
                return Err(DecodeError::Unsupported)
            }
        };
        Ok(Self { encoding, value })
    }

    pub fn encode_payload(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_u8(self.encoding as u8)?;
        match self.encoding {
            CharacterEncoding::Utf8 => w.write_all(self.value.as_bytes()),
            CharacterEncoding::Ucs4 => {
                for c in self.value.chars() {
                    w.write_be_u32(c as u32)?;
                }
                Ok(())
            }
            CharacterEncoding::Ucs2 => {
                for c in self.value.chars() {
                    let unit = u16::try_from(c as u32).map_err(|_| EncodeError::ValueOutOfRange)?;
                    w.write_be_u16(unit)?;
                }
                Ok(())
            }
            CharacterEncoding::Iso8859_1 => {
                for c in self.value.chars() {
                    let b = u8::try_from(c as u32).map_err(|_| EncodeError::ValueOutOfRange)?;
                    w.write_u8(b)?;
                }
                Ok(())
            }
            CharacterEncoding::Dbcs | CharacterEncoding::Jis => Err(EncodeError::Unsupported),
        }
    }
}

impl From<&str> for CharacterString {
    fn from(value: &str) -> Self {
        Self::utf8(value)
    }
}
