use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnknownWordKey,
    MalformedGrid,
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// A phrase-word produced by the encoder has no placement in the word table.
    #[error("word `{key}` has no placement in the word table")]
    UnknownWordKey { key: String },
    #[error("malformed letter grid: {reason}")]
    MalformedGrid { reason: String },
    #[error("hour {hour} is outside 0..=23")]
    HourOutOfRange { hour: u32 },
    #[error("minute {minute} is outside 0..=59")]
    MinuteOutOfRange { minute: u32 },
}

impl ClockError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedGrid {
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownWordKey { .. } => ErrorCode::UnknownWordKey,
            Self::MalformedGrid { .. } => ErrorCode::MalformedGrid,
            Self::HourOutOfRange { .. } | Self::MinuteOutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }

    /// Static-data errors are fatal at start-up; range errors are caller bugs.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::UnknownWordKey | ErrorCode::MalformedGrid
        )
    }
}
