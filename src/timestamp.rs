use std::fmt::Display;

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::error::{Error, Result};

/// A commit time: seconds since the epoch plus the author's UTC offset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<FixedOffset>);

impl Timestamp {
    pub fn now() -> Self {
        Self(chrono::offset::Local::now().into())
    }

    /// Build a timestamp from a unix time and an offset east of UTC, in seconds.
    pub fn new(unix: i64, offset_seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(offset_seconds)?
            .timestamp_opt(unix, 0)
            .single()
            .map(Self)
    }

    /// Parse a timestamp from a unix + HH + mm offset, e.g. `1658312219 +0100`
    pub fn from_git(s: &str) -> Result<Self> {
        let invalid = || Error::MalformedObject(format!("invalid timestamp '{s}'"));

        let (unix, offset) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let unix: i64 = unix.parse().map_err(|_| invalid())?;

        let (sign, digits) = match offset.as_bytes().first() {
            Some(b'+') => (1, &offset[1..]),
            Some(b'-') => (-1, &offset[1..]),
            _ => return Err(invalid()),
        };
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
        let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;

        Self::new(unix, sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%s %z"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Timestamp::new(1658312219, 3600).unwrap().to_string(),
            "1658312219 +0100"
        );
        assert_eq!(
            Timestamp::new(1700000000, -(5 * 3600 + 30 * 60))
                .unwrap()
                .to_string(),
            "1700000000 -0530"
        );
        assert_eq!(Timestamp::new(0, 0).unwrap().to_string(), "0 +0000");
    }

    #[test]
    fn test_from_git() {
        for s in ["1658312219 +0100", "1700000000 -0530", "0 +0000"] {
            assert_eq!(Timestamp::from_git(s).unwrap().to_string(), s);
        }

        for s in ["", "1658312219", "1658312219 0100", "abc +0100", "1 +01", "1 +01x0"] {
            assert!(Timestamp::from_git(s).is_err(), "{s}");
        }
    }
}
