//! "Show JSON" debug panel.

use crate::store::record_store::RecordStore;
use log::warn;

/// Holds the panel's visibility; everything else is read from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugPresenter {
    visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugView {
    pub visible: bool,
    /// Compact JSON of the store snapshot. `None` while hidden.
    pub json: Option<String>,
}

impl DebugPresenter {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flips visibility and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn view(&self, store: &RecordStore) -> DebugView {
        if !self.visible {
            return DebugView {
                visible: false,
                json: None,
            };
        }

        let json = match store.snapshot().to_json() {
            Ok(json) => Some(json),
            Err(err) => {
                warn!("event=debug_dump module=presenter status=error error={err}");
                None
            }
        };
        DebugView {
            visible: true,
            json,
        }
    }
}
