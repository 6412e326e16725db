use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: Uuid,
    pub name: String,

    /// Empty until the user fills it in
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl WorkItem {
    /// Create a work item with an empty description, not yet done
    pub fn new(id: Uuid, name: String) -> Self {
        Self {
            id,
            name,
            description: String::new(),
            done: false,
        }
    }
}
