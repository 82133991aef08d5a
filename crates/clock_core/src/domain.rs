use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ClockError;

pub const MINUTES_PER_BUCKET: u8 = 5;
pub const BUCKET_COUNT: usize = 12;
pub const CORNER_COUNT: usize = 4;

/// A grid coordinate, column first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
}

impl Cell {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Corner dots in the order they light up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; CORNER_COUNT] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomLeft => 2,
            Corner::BottomRight => 3,
        }
    }
}

/// Hour and minute of a 24h day, range-checked on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    pub fn new(hour: u32, minute: u32) -> Result<Self, ClockError> {
        if hour > 23 {
            return Err(ClockError::HourOutOfRange { hour });
        }
        if minute > 59 {
            return Err(ClockError::MinuteOutOfRange { minute });
        }

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Start of the 5-minute bucket this minute falls into.
    pub fn bucket_base(self) -> u8 {
        (self.minute / MINUTES_PER_BUCKET) * MINUTES_PER_BUCKET
    }

    pub fn bucket_index(self) -> usize {
        (self.minute / MINUTES_PER_BUCKET) as usize
    }

    /// Minutes past the bucket start, shown by the corner dots.
    pub fn corner_count(self) -> u8 {
        self.minute % MINUTES_PER_BUCKET
    }

    /// The following minute, wrapping 23:59 to 00:00.
    pub fn next_minute(self) -> Self {
        let total = (u16::from(self.hour) * 60 + u16::from(self.minute) + 1) % (24 * 60);
        Self {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        }
    }

    /// Every minute of the day in order.
    pub fn all_day() -> impl Iterator<Item = ClockTime> {
        (0u8..24).flat_map(|hour| (0u8..60).map(move |minute| ClockTime { hour, minute }))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_components() {
        assert_eq!(
            ClockTime::new(24, 0),
            Err(ClockError::HourOutOfRange { hour: 24 })
        );
        assert_eq!(
            ClockTime::new(12, 60),
            Err(ClockError::MinuteOutOfRange { minute: 60 })
        );
    }

    #[test]
    fn next_minute_wraps_at_midnight() {
        let late = ClockTime::new(23, 59).expect("time");
        assert_eq!(late.next_minute(), ClockTime::MIDNIGHT);

        let noonish = ClockTime::new(11, 59).expect("time");
        assert_eq!(noonish.next_minute(), ClockTime::new(12, 0).expect("time"));
    }

    #[test]
    fn bucket_and_corners_split_the_minute() {
        let time = ClockTime::new(10, 27).expect("time");
        assert_eq!(time.bucket_base(), 25);
        assert_eq!(time.bucket_index(), 5);
        assert_eq!(time.corner_count(), 2);
        assert_eq!(time.to_string(), "10:27");
    }

    #[test]
    fn all_day_covers_every_minute() {
        assert_eq!(ClockTime::all_day().count(), 24 * 60);
    }
}
