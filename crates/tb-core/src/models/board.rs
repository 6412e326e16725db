use crate::models::work_item::WorkItem;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Expected to be unique within the owning project's boards (not enforced)
    pub id: Uuid,
    pub name: String,
    pub synced: bool,
    pub work_items: Vec<WorkItem>,
}

impl Board {
    pub fn new(id: Uuid, name: String, synced: bool, work_items: Vec<WorkItem>) -> Self {
        Self {
            id,
            name,
            synced,
            work_items,
        }
    }
}
