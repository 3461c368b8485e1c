//! JSON output for snapshots.
//!
//! Same shape as the persisted archive entries, for scripting and piping.

use crate::snapshot::Snapshot;

pub fn render(snapshot: &Snapshot) -> String {
    serde_json::to_string_pretty(snapshot).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

pub fn render_archive(snapshots: &[Snapshot]) -> String {
    serde_json::to_string_pretty(snapshots).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}
