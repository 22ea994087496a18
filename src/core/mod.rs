//! Tuned gameplay constants.

pub mod constants;

pub use constants::*;
