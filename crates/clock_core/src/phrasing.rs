//! Minute-bucket and hour tables.
//!
//! A phrasing is one unit: the bucket table, the hour table and the minute at
//! which the named hour moves on all depend on the same spoken convention, so
//! they are never swapped independently.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{ClockTime, BUCKET_COUNT},
    words::WordKey::{self, *},
};

const HOURS: [WordKey; 12] = [
    Zwolf, Eins, Zwei, Drei, Vier, Funf, Sechs, Sieben, Acht, Neun, Zehn, Elf,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhrasingKind {
    /// "viertel nach drei", "viertel vor vier".
    #[default]
    Standard,
    /// "viertel vier", "dreiviertel vier".
    Regional,
}

impl PhrasingKind {
    pub fn phrasing(self) -> &'static Phrasing {
        match self {
            PhrasingKind::Standard => &STANDARD,
            PhrasingKind::Regional => &REGIONAL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PhrasingKind::Standard => "standard",
            PhrasingKind::Regional => "regional",
        }
    }
}

impl fmt::Display for PhrasingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown phrasing `{0}`, expected `standard` or `regional`")]
pub struct UnknownPhrasing(pub String);

impl FromStr for PhrasingKind {
    type Err = UnknownPhrasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(PhrasingKind::Standard),
            "regional" => Ok(PhrasingKind::Regional),
            _ => Err(UnknownPhrasing(s.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct Phrasing {
    pub kind: PhrasingKind,
    /// From this minute on, the phrase names the next hour.
    pub rollover_minute: u8,
    pub buckets: [&'static [WordKey]; BUCKET_COUNT],
    pub hours: [WordKey; 12],
}

pub static STANDARD: Phrasing = Phrasing {
    kind: PhrasingKind::Standard,
    rollover_minute: 25,
    buckets: [
        &[Uhr],
        &[FunfMinuten, Nach],
        &[ZehnMinuten, Nach],
        &[Viertel, Nach],
        &[Zwanzig, Nach],
        &[FunfMinuten, Vor, Halb],
        &[Halb],
        &[FunfMinuten, Nach, Halb],
        &[Zwanzig, Vor],
        &[Viertel, Vor],
        &[ZehnMinuten, Vor],
        &[FunfMinuten, Vor],
    ],
    hours: HOURS,
};

pub static REGIONAL: Phrasing = Phrasing {
    kind: PhrasingKind::Regional,
    rollover_minute: 15,
    buckets: [
        &[Uhr],
        &[FunfMinuten, Nach],
        &[ZehnMinuten, Nach],
        &[Viertel],
        &[ZehnMinuten, Vor, Halb],
        &[FunfMinuten, Vor, Halb],
        &[Halb],
        &[FunfMinuten, Nach, Halb],
        &[ZehnMinuten, Nach, Halb],
        &[Dreiviertel],
        &[ZehnMinuten, Vor],
        &[FunfMinuten, Vor],
    ],
    hours: HOURS,
};

impl Phrasing {
    pub fn minute_words(&self, time: ClockTime) -> &'static [WordKey] {
        self.buckets[time.bucket_index()]
    }

    /// Hour named by the phrase, on the 12-hour dial (0 is twelve).
    pub fn named_hour(&self, time: ClockTime) -> u8 {
        let hour = if time.minute() >= self.rollover_minute {
            time.hour() + 1
        } else {
            time.hour()
        };
        hour % 12
    }

    pub fn hour_word(&self, time: ClockTime) -> WordKey {
        self.hours[usize::from(self.named_hour(time))]
    }

    /// Every word this phrasing can ever light.
    pub fn vocabulary(&self) -> Vec<WordKey> {
        let mut words: Vec<WordKey> = WordKey::ALWAYS_ON
            .iter()
            .chain(self.buckets.iter().flat_map(|bucket| bucket.iter()))
            .chain(self.hours.iter())
            .copied()
            .collect();
        words.sort();
        words.dedup();
        words
    }
}
