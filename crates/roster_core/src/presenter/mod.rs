//! View presenters over the record store.
//!
//! # Responsibility
//! - Map store state (plus presenter-local input state) to view models.
//! - Route per-view user actions back into store operations.
//!
//! # Invariants
//! - View functions never mutate the store.
//! - Only `FormPresenter` and `DebugPresenter` own state of their own.

pub mod counter;
pub mod debug;
pub mod filter;
pub mod form;
pub mod list;

use crate::store::record_store::RecordStore;
use debug::{DebugPresenter, DebugView};
use filter::{filter_view, FilterView};
use form::{FormPresenter, FormView};
use list::{list_view, ListView};

/// Every view of the page, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub form: FormView,
    pub list: ListView,
    pub filter: FilterView,
    pub debug: DebugView,
}

/// Builds the full page from the store and the presenter-local state.
pub fn page_view(store: &RecordStore, form: &FormPresenter, debug: &DebugPresenter) -> PageView {
    PageView {
        form: form.view(store),
        list: list_view(store),
        filter: filter_view(store),
        debug: debug.view(store),
    }
}
