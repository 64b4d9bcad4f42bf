//! Line breaking for free-text fields.

mod wrapper;

pub use wrapper::{WrappedText, split_fixed, wrap_words};
