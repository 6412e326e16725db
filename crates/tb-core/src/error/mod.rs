use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Name of the field a validation error refers to, for form display
    pub fn field(&self) -> &'static str {
        match self {
            Self::Validation { field, .. } => field,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
