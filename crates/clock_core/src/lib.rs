//! Word clock core: the letter grid, the word table, and the encoder that
//! turns a time of day into lit cells and corner dots.

pub mod domain;
pub mod encoder;
pub mod error;
pub mod grid;
pub mod phrasing;
pub mod resolver;
pub mod state;
pub mod words;

pub use domain::{Cell, ClockTime, Corner};
pub use encoder::{Encoding, TimeEncoder};
pub use error::{ClockError, ErrorCode};
pub use grid::LetterGrid;
pub use phrasing::{Phrasing, PhrasingKind};
pub use resolver::CellResolver;
pub use state::{ActiveState, ClockState};
pub use words::{WordKey, WordPlacement, WordTable};
