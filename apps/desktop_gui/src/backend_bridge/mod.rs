//! Bridge from the clock scheduler thread to the UI event queue.

pub mod runtime;
