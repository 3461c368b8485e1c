pub mod html;
pub mod json;
pub mod table;

use crate::selector::SelectorEntry;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Table,
    Html,
    Json,
}

pub fn render(snapshot: &Snapshot, format: Format, currency: &str) -> String {
    match format {
        Format::Table => table::render(snapshot, currency),
        Format::Html => html::render(snapshot, currency),
        Format::Json => json::render(snapshot),
    }
}

/// Picker listing: `[current]` for the sentinel, the archive index otherwise.
pub fn render_entries(entries: &[SelectorEntry]) -> String {
    let mut output = String::new();

    for entry in entries {
        let key = match entry.index {
            Some(i) => i.to_string(),
            None => "current".to_string(),
        };
        output.push_str(&format!("  {key:<8} {}\n", entry.label));
    }

    output
}
