use thiserror::Error;

use crate::api::store::StoreError;
use crate::utils::config::ConfigError;
use crate::validation::data::ValidationError;

/// Errors surfaced by the survey and storage layer.
///
/// The geometry functions never fail; they return `None` when there is not
/// enough data yet.
#[derive(Error, Debug)]
pub enum GreenError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type GreenResult<T> = Result<T, GreenError>;
