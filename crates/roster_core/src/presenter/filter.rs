//! Filter selector.

use crate::model::view_state::Filter;
use crate::store::record_store::RecordStore;

pub const FILTER_HEADING: &str = "Filter Users";

/// One filter choice. The selected choice is not interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterLink {
    pub filter: Filter,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView {
    pub heading: &'static str,
    pub links: Vec<FilterLink>,
}

pub fn filter_view(store: &RecordStore) -> FilterView {
    let current = store.filter();
    FilterView {
        heading: FILTER_HEADING,
        links: Filter::all()
            .into_iter()
            .map(|filter| FilterLink {
                filter,
                selected: filter == current,
            })
            .collect(),
    }
}

/// Activates one filter link.
///
/// Selecting the already-selected link does nothing and returns `false`.
pub fn select_filter(store: &mut RecordStore, filter: Filter) -> bool {
    store.set_filter(filter)
}
