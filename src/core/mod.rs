//! Core types and constants for green measurement

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
