use crate::encoding::{reader::Reader, writer::Writer};
use crate::{DecodeError, EncodeError};

pub const WILDCARD: u8 = 0xFF;

/// BACnet date. Each octet may be the 0xFF wildcard; month and day also carry
/// the odd/even/last-day specials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date {
    pub year_since_1900: u8,
    pub month: u8,
    pub day: u8,
    pub weekday: u8,
}

impl Date {
    pub fn year(&self) -> u16 {
        self.year_since_1900 as u16 + 1900
    }

    pub fn is_year_wildcard(&self) -> bool {
        self.year_since_1900 == WILDCARD
    }

    pub fn is_month_wildcard(&self) -> bool {
        self.month == WILDCARD
    }

    pub fn is_odd_month(&self) -> bool {
        self.month == 13
    }

    pub fn is_even_month(&self) -> bool {
        self.month == 14
    }

    pub fn is_day_of_month_wildcard(&self) -> bool {
        self.day == WILDCARD
    }

    pub fn is_last_day_of_month(&self) -> bool {
        self.day == 32
    }

    pub fn is_odd_day_of_month(&self) -> bool {
        self.day == 33
    }

    pub fn is_even_day_of_month(&self) -> bool {
        self.day == 34
    }

    pub fn is_day_of_week_wildcard(&self) -> bool {
        self.weekday == WILDCARD
    }

    pub fn decode_payload(r: &mut Reader<'_>, len: u32) -> Result<Self, DecodeError> {
        if len != 4 {
            return Err(DecodeError::InvalidLength);
        }
        let b = r.read_exact(4)?;
        Ok(Self {
            year_since_1900: b[0],
            month: b[1],
            day: b[2],
            weekday: b[3],
        })
    }

    pub fn encode_payload(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_all(&[self.year_since_1900, self.month, self.day, self.weekday])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub hundredths: u8,
}

impl Time {
    pub fn is_hour_wildcard(&self) -> bool {
        self.hour == WILDCARD
    }

    pub fn is_minute_wildcard(&self) -> bool {
        self.minute == WILDCARD
    }

    pub fn is_second_wildcard(&self) -> bool {
        self.second == WILDCARD
    }

    pub fn is_fractional_wildcard(&self) -> bool {
        self.hundredths == WILDCARD
    }

    pub fn decode_payload(r: &mut Reader<'_>, len: u32) -> Result<Self, DecodeError> {
        if len != 4 {
            return Err(DecodeError::InvalidLength);
        }
        let b = r.read_exact(4)?;
        Ok(Self {
            hour: b[0],
            minute: b[1],
            second: b[2],
            hundredths: b[3],
        })
    }

    pub fn encode_payload(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_all(&[self.hour, self.minute, self.second, self.hundredths])
    }
}

#[cfg(test)]
mod tests {
    use super::{Date, Time};
    use crate::encoding::reader::Reader;
    use crate::DecodeError;

    #[test]
    fn date_specials() {
        let mut r = Reader::new(&[0xFF, 13, 32, 0xFF]);
        let d = Date::decode_payload(&mut r, 4).unwrap();
        assert!(d.is_year_wildcard());
        assert!(d.is_odd_month());
        assert!(!d.is_even_month());
        assert!(d.is_last_day_of_month());
        assert!(d.is_day_of_week_wildcard());

        let d = Date {
            year_since_1900: 124,
            month: 14,
            day: 34,
            weekday: 3,
        };
        assert_eq!(d.year(), 2024);
        assert!(d.is_even_month());
        assert!(d.is_even_day_of_month());
        assert!(!d.is_odd_day_of_month());
    }

    #[test]
    fn time_wildcards() {
        let t = Time {
            hour: 12,
            minute: 0xFF,
            second: 0,
            hundredths: 0xFF,
        };
        assert!(!t.is_hour_wildcard());
        assert!(t.is_minute_wildcard());
        assert!(!t.is_second_wildcard());
        assert!(t.is_fractional_wildcard());
    }

    #[test]
    fn fixed_width_is_enforced() {
        let mut r = Reader::new(&[1, 2, 3]);
        assert_eq!(
            Time::decode_payload(&mut r, 3).unwrap_err(),
            DecodeError::InvalidLength
        );
    }
}
