//! Plain-text rendering of presenter view models.

pub mod text;

pub use text::{render_page, PageTextView};
