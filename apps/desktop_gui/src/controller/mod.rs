//! Controller layer: folds scheduler events into the state the face paints.

pub mod events;
