//! Record table.
//!
//! Rows follow the store's filtered view. Each row carries the two actions
//! it exposes so the caller can route them back with `apply_row_action`.

use crate::model::record::{Record, RecordId, Role};
use crate::model::view_state::EditMode;
use crate::presenter::counter::{counter_view, CounterView};
use crate::store::record_store::RecordStore;

pub const LIST_HEADERS: [&str; 5] = [
    "First Name",
    "Last Name",
    "Email Address",
    "Role",
    "Active",
];

/// Per-row user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Flip the row's active checkbox.
    Toggle(RecordId),
    /// Switch the form into edit mode targeting the row.
    StartEdit(RecordId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: RecordId,
    pub first: String,
    pub last: String,
    pub email: String,
    pub role: Option<Role>,
    pub active: bool,
    pub toggle: RowAction,
    pub edit: RowAction,
}

impl From<&Record> for RowView {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            first: record.first.clone(),
            last: record.last.clone(),
            email: record.email.clone(),
            role: record.role,
            active: record.active,
            toggle: RowAction::Toggle(record.id),
            edit: RowAction::StartEdit(record.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub headers: [&'static str; 5],
    pub rows: Vec<RowView>,
    pub footer: CounterView,
}

pub fn list_view(store: &RecordStore) -> ListView {
    ListView {
        headers: LIST_HEADERS,
        rows: store
            .filtered_records()
            .into_iter()
            .map(RowView::from)
            .collect(),
        footer: counter_view(store),
    }
}

/// Applies one row action to the store. Returns whether state changed.
pub fn apply_row_action(store: &mut RecordStore, action: RowAction) -> bool {
    match action {
        RowAction::Toggle(id) => store.toggle_active(id),
        RowAction::StartEdit(id) => {
            let mode_changed = store.set_edit_mode(EditMode::Edit);
            let target_changed = store.set_edit_target(Some(id));
            mode_changed || target_changed
        }
    }
}
