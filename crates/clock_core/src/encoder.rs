//! Time to phrase-words.

use serde::Serialize;

use crate::{
    domain::ClockTime,
    error::ClockError,
    phrasing::{Phrasing, PhrasingKind},
    words::WordKey,
};

/// The words to light for one minute, plus the corner-dot count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoding {
    pub words: Vec<WordKey>,
    pub corners: u8,
}

impl Encoding {
    /// Words between the always-on prefix and the hour word.
    pub fn minute_words(&self) -> &[WordKey] {
        let start = WordKey::ALWAYS_ON.len();
        let end = self.words.len().saturating_sub(1).max(start);
        &self.words[start..end]
    }

    pub fn hour_word(&self) -> Option<WordKey> {
        self.words.last().copied()
    }

    pub fn phrase(&self) -> String {
        self.words
            .iter()
            .map(|word| word.letters())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimeEncoder {
    phrasing: &'static Phrasing,
}

impl Default for TimeEncoder {
    fn default() -> Self {
        Self::new(PhrasingKind::Standard)
    }
}

impl TimeEncoder {
    pub fn new(kind: PhrasingKind) -> Self {
        Self {
            phrasing: kind.phrasing(),
        }
    }

    pub fn phrasing(&self) -> &'static Phrasing {
        self.phrasing
    }

    /// Range-checks the inputs, then encodes.
    pub fn encode(&self, hour: u32, minute: u32) -> Result<Encoding, ClockError> {
        Ok(self.encode_time(ClockTime::new(hour, minute)?))
    }

    pub fn encode_time(&self, time: ClockTime) -> Encoding {
        let minute_words = self.phrasing.minute_words(time);

        let mut words = Vec::with_capacity(WordKey::ALWAYS_ON.len() + minute_words.len() + 1);
        words.extend_from_slice(&WordKey::ALWAYS_ON);
        words.extend_from_slice(minute_words);
        words.push(self.phrasing.hour_word(time));

        Encoding {
            words,
            corners: time.corner_count(),
        }
    }
}

#[cfg(test)]
#[path = "tests/encoder_tests.rs"]
mod tests;
