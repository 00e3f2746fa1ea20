//! Core logic for the roster editor.
//! The store is the single source of truth; presenters only read it.

pub mod command;
pub mod config;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod render;
pub mod session;
pub mod store;

pub use command::{Command, CommandParseError, HELP_TEXT};
pub use config::{ConfigError, SessionConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{
    parse_role, seed_records, Record, RecordFields, RecordId, Role, RoleParseError,
};
pub use model::view_state::{parse_filter, EditMode, Filter, FilterParseError};
pub use presenter::debug::{DebugPresenter, DebugView};
pub use presenter::form::{FormField, FormPresenter, FormView, SubmitOutcome};
pub use presenter::list::{apply_row_action, list_view, ListView, RowAction, RowView};
pub use presenter::{page_view, PageView};
pub use render::render_page;
pub use session::{Outcome, RosterSession};
pub use store::record_store::{Listener, RecordStore, StoreChange, SubscriptionId};
pub use store::snapshot::StoreSnapshot;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
