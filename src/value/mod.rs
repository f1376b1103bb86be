//! Place-value arithmetic and display text.

pub mod place;
pub mod words;

pub use place::{expanded_notation, hand_value, slot_labels, slot_weight_millis, PlaceValue};
pub use words::number_words;
