//! UI layer for the clock window: app shell, face painting and colours.

pub mod app;
pub mod face;
pub mod theme;

pub use app::WordClockApp;
