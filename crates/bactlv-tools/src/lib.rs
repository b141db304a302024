use bactlv_core::schema::FieldSpec;
use bactlv_core::services::read_property::{READ_PROPERTY_ACK, READ_PROPERTY_REQUEST};
use bactlv_core::services::write_property::WRITE_PROPERTY_REQUEST;
use clap::ValueEnum;

/// CLI-friendly names for the service parameter tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableArg {
    ReadPropertyRequest,
    ReadPropertyAck,
    WritePropertyRequest,
}

impl TableArg {
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::ReadPropertyRequest => READ_PROPERTY_REQUEST,
            Self::ReadPropertyAck => READ_PROPERTY_ACK,
            Self::WritePropertyRequest => WRITE_PROPERTY_REQUEST,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HexError {
    #[error("odd number of hex digits")]
    OddLength,
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Parses hex bytes. Whitespace, `#` comments and `0x` prefixes are
/// skipped, so fixture files can be piped in unchanged.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, HexError> {
    let mut digits = Vec::new();
    for line in text.lines() {
        let line = line.split('#').next().unwrap_or_default();
        for token in line.split_whitespace() {
            let token = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            for c in token.chars() {
                let digit = c.to_digit(16).ok_or(HexError::InvalidDigit(c))?;
                digits.push(digit as u8);
            }
        }
    }
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }
    Ok(digits.chunks(2).map(|pair| pair[0] << 4 | pair[1]).collect())
}
