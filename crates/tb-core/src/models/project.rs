//! Project entity - top-level container a board form binds against.

use crate::models::board::Board;

use serde::{Deserialize, Serialize};

/// A project is the root of the form model.
/// Its name is the only constrained field in the hierarchy: the form layer
/// rejects names that are empty or longer than
/// [`MAX_PROJECT_NAME_LENGTH`](crate::validation::MAX_PROJECT_NAME_LENGTH)
/// via [`FormValidator::validate_project`](crate::FormValidator::validate_project).
/// The constructor itself never rejects input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub boards: Vec<Board>,
}

impl Project {
    /// Create a project owning the given boards, stored as passed
    pub fn new(name: String, boards: Vec<Board>) -> Self {
        Self { name, boards }
    }
}
