//! Caller-facing survey API
//!
//! The geometry engine never reads positions or touches storage itself.
//! Position streams and persistence are injected through the
//! `PositionSource` and `PerimeterStore` traits.

pub mod source;
pub mod store;
pub mod survey;
pub mod types;

pub use source::{PositionSource, ReplaySource};
pub use store::{JsonFileStore, MemoryStore, PerimeterStore, StoreError};
pub use survey::GreenSurvey;
pub use types::{summarize, GreenRecord, GreenSummary};
