//! Shared helpers

pub mod values;

pub use values::{parse_scalar, scalar_text};
