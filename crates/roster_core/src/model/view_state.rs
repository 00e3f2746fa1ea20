//! Scalar view state held by the store next to the records.

use crate::model::record::Record;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which records the list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Active,
    Inactive,
}

impl Filter {
    /// Filter choices in display order.
    pub fn all() -> [Filter; 3] {
        [Self::All, Self::Active, Self::Inactive]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Returns whether `record` is visible under this filter.
    pub fn matches(self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Active => record.active,
            Self::Inactive => !record.active,
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a filter choice, case-insensitively.
pub fn parse_filter(value: &str) -> Result<Filter, FilterParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(FilterParseError::EmptyFilter);
    }

    match normalized.to_ascii_lowercase().as_str() {
        "all" => Ok(Filter::All),
        "active" => Ok(Filter::Active),
        "inactive" => Ok(Filter::Inactive),
        _ => Err(FilterParseError::UnsupportedFilter(normalized.to_string())),
    }
}

/// Filter parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterParseError {
    EmptyFilter,
    UnsupportedFilter(String),
}

impl Display for FilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFilter => write!(f, "filter value must not be empty"),
            Self::UnsupportedFilter(value) => write!(
                f,
                "unsupported filter `{value}`; expected all|active|inactive"
            ),
        }
    }
}

impl Error for FilterParseError {}

/// Whether the form creates a new record or updates the edit target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    Create,
    Edit,
}

impl EditMode {
    /// Label of the form's submit control for this mode.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Create User",
            Self::Edit => "Update User",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_filter, EditMode, Filter, FilterParseError};
    use crate::model::record::{Record, RecordFields};

    #[test]
    fn parses_all_filters() {
        assert_eq!(parse_filter("all").expect("all parse"), Filter::All);
        assert_eq!(parse_filter("Active").expect("active parse"), Filter::Active);
        assert_eq!(
            parse_filter(" INACTIVE ").expect("inactive parse"),
            Filter::Inactive
        );
    }

    #[test]
    fn rejects_empty_and_unknown_filters() {
        assert_eq!(
            parse_filter("  ").expect_err("empty filter must fail"),
            FilterParseError::EmptyFilter
        );
        assert_eq!(
            parse_filter("done").expect_err("unknown filter must fail"),
            FilterParseError::UnsupportedFilter("done".to_string())
        );
    }

    #[test]
    fn filter_matches_on_active_flag() {
        let mut record = Record::new(0, RecordFields::default());
        assert!(Filter::All.matches(&record));
        assert!(!Filter::Active.matches(&record));
        assert!(Filter::Inactive.matches(&record));

        record.toggle_active();
        assert!(Filter::Active.matches(&record));
        assert!(!Filter::Inactive.matches(&record));
    }

    #[test]
    fn submit_label_follows_mode() {
        assert_eq!(EditMode::Create.submit_label(), "Create User");
        assert_eq!(EditMode::Edit.submit_label(), "Update User");
    }
}
