use std::fmt;

use crate::model::record::Role;
use crate::presenter::debug::DebugView;
use crate::presenter::filter::FilterView;
use crate::presenter::form::{FormField, FormView};
use crate::presenter::list::ListView;
use crate::presenter::PageView;

const MAX_CELL_CHARS: usize = 32;
const RULE: &str = "----------------------------------------";

// --------------------------------------------------------
// Page
// --------------------------------------------------------

pub struct PageTextView<'a> {
    pub data: &'a PageView,
}

impl<'a> PageTextView<'a> {
    pub fn new(data: &'a PageView) -> Self {
        Self { data }
    }
}

impl fmt::Display for PageTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", FormTextView(&self.data.form))?;
        writeln!(f, "{RULE}")?;
        write!(f, "{}", ListTextView(&self.data.list))?;
        writeln!(f, "{RULE}")?;
        write!(f, "{}", FilterTextView(&self.data.filter))?;
        write!(f, "{}", DebugTextView(&self.data.debug))
    }
}

pub fn render_page(page: &PageView) -> String {
    PageTextView::new(page).to_string()
}

// --------------------------------------------------------
// Form
// --------------------------------------------------------

struct FormTextView<'a>(&'a FormView);

impl fmt::Display for FormTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let form = self.0;
        writeln!(f, "{} {}", FormField::First.label(), form.first)?;
        writeln!(f, "{} {}", FormField::Last.label(), form.last)?;
        writeln!(f, "{} {}", FormField::Email.label(), form.email)?;

        let options: Vec<String> = form
            .role_options
            .iter()
            .map(|option| {
                if option.selected {
                    format!("({})", option.label)
                } else {
                    option.label.to_string()
                }
            })
            .collect();
        writeln!(f, "role: {}", options.join(" | "))?;
        writeln!(f, "[ {} ]", form.submit_label)
    }
}

// --------------------------------------------------------
// Table
// --------------------------------------------------------

struct ListTextView<'a>(&'a ListView);

impl fmt::Display for ListTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let list = self.0;

        let mut table: Vec<[String; 7]> = Vec::with_capacity(list.rows.len() + 1);
        table.push([
            "#".to_string(),
            list.headers[0].to_string(),
            list.headers[1].to_string(),
            list.headers[2].to_string(),
            list.headers[3].to_string(),
            list.headers[4].to_string(),
            String::new(),
        ]);
        for row in &list.rows {
            table.push([
                row.id.to_string(),
                truncate(&row.first, MAX_CELL_CHARS),
                truncate(&row.last, MAX_CELL_CHARS),
                truncate(&row.email, MAX_CELL_CHARS),
                role_cell(row.role).to_string(),
                checkbox(row.active).to_string(),
                "Edit".to_string(),
            ]);
        }

        let mut widths = [0_usize; 7];
        for cells in &table {
            for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for cells in &table {
            let line: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, width)| pad(cell, *width))
                .collect();
            writeln!(f, "{}", line.join("  ").trim_end())?;
        }
        writeln!(f, "{}", list.footer)
    }
}

// --------------------------------------------------------
// Filter
// --------------------------------------------------------

struct FilterTextView<'a>(&'a FilterView);

impl fmt::Display for FilterTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let view = self.0;
        write!(f, "{}:", view.heading)?;
        for link in &view.links {
            if link.selected {
                write!(f, " | [{}]", link.filter)?;
            } else {
                write!(f, " | {}", link.filter)?;
            }
        }
        writeln!(f)
    }
}

// --------------------------------------------------------
// Debug
// --------------------------------------------------------

struct DebugTextView<'a>(&'a DebugView);

impl fmt::Display for DebugTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{} Show JSON", checkbox(view.visible))?;
        if let Some(json) = &view.json {
            writeln!(f, "{json}")?;
        }
        Ok(())
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn role_cell(role: Option<Role>) -> &'static str {
    role.map(Role::as_str).unwrap_or("-")
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{truncated}...")
}
