use crate::{CoreError, Project, Result};

use std::panic::Location;

use error_location::ErrorLocation;

// Validation constraints
pub const MIN_PROJECT_NAME_LENGTH: usize = 1;
pub const MAX_PROJECT_NAME_LENGTH: usize = 10;

/// Validates form input against the model constraints.
///
/// Constructors never reject input; the form host calls these on submission
/// and maps the returned error onto the offending input.
pub struct FormValidator;

impl FormValidator {
    /// Validate a string field against length bounds
    #[track_caller]
    pub fn validate_string(
        value: &str,
        field_name: &'static str,
        min_length: usize,
        max_length: usize,
    ) -> Result<()> {
        if value.len() < min_length {
            return Err(CoreError::Validation {
                field: field_name,
                message: format!("must be at least {} characters", min_length),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if value.len() > max_length {
            return Err(CoreError::Validation {
                field: field_name,
                message: format!("must not exceed {} characters", max_length),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Validate a project name: required (whitespace-only counts as empty)
    /// and at most [`MAX_PROJECT_NAME_LENGTH`] characters
    #[track_caller]
    pub fn validate_project_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(CoreError::Validation {
                field: "name",
                message: "is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Self::validate_string(
            name,
            "name",
            MIN_PROJECT_NAME_LENGTH,
            MAX_PROJECT_NAME_LENGTH,
        )
    }

    /// Validate a whole project before submission.
    ///
    /// Boards and work items carry no constraints, so only the project name
    /// is checked.
    #[track_caller]
    pub fn validate_project(project: &Project) -> Result<()> {
        Self::validate_project_name(&project.name)
    }
}
