//! Active-record counter shown in the table footer.

use crate::store::record_store::RecordStore;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterView {
    pub active: usize,
    pub total: usize,
}

pub fn counter_view(store: &RecordStore) -> CounterView {
    CounterView {
        active: store.active_count(),
        total: store.records().len(),
    }
}

impl Display for CounterView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} Actived", self.active, self.total)
    }
}
