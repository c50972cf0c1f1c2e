//! Sample validation and error types

pub mod data;
pub mod error;

pub use data::{PerimeterValidator, ValidationError};
pub use error::{GreenError, GreenResult};
