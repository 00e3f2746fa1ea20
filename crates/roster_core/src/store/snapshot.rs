//! Owned, serializable copy of the store state.

use crate::model::record::{Record, RecordId};
use crate::model::view_state::{EditMode, Filter};
use serde::{Deserialize, Serialize};

/// Full observable store state at one point in time.
///
/// Field order is the serialization order of the debug dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub records: Vec<Record>,
    pub filter: Filter,
    pub edit_mode: EditMode,
    pub edit_target_id: Option<RecordId>,
    pub next_id: RecordId,
}

impl StoreSnapshot {
    /// Serializes the snapshot as compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
