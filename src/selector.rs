//! Snapshot picker.
//!
//! The picker always offers "current result" first, then every archived
//! snapshot by timestamp. Resolving the sentinel yields the in-memory
//! result of this session; resolving an index reads the archive and fails
//! loudly when the index is stale.

use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;
use crate::snapshot::Snapshot;

pub const CURRENT_LABEL: &str = "current result";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Current,
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    pub label: String,
    pub index: Option<usize>,
}

impl SelectorEntry {
    pub fn selection(&self) -> Selection {
        match self.index {
            Some(i) => Selection::Index(i),
            None => Selection::Current,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSelectionError(String);

impl fmt::Display for ParseSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid selection '{}': expected 'current' or a snapshot number", self.0)
    }
}

impl std::error::Error for ParseSelectionError {}

impl FromStr for Selection {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("current") {
            return Ok(Selection::Current);
        }

        trimmed
            .parse::<usize>()
            .map(Selection::Index)
            .map_err(|_| ParseSelectionError(trimmed.to_string()))
    }
}

pub fn list(archive: &[Snapshot]) -> Vec<SelectorEntry> {
    let mut entries = Vec::with_capacity(archive.len() + 1);
    entries.push(SelectorEntry {
        label: CURRENT_LABEL.to_string(),
        index: None,
    });

    entries.extend(archive.iter().enumerate().map(|(index, snapshot)| SelectorEntry {
        label: snapshot.label(),
        index: Some(index),
    }));

    entries
}

pub fn resolve<'a>(
    selection: Selection,
    current: Option<&'a Snapshot>,
    archive: &'a [Snapshot],
) -> Result<Option<&'a Snapshot>, DashboardError> {
    match selection {
        Selection::Current => Ok(current),
        Selection::Index(index) => archive
            .get(index)
            .map(Some)
            .ok_or(DashboardError::OutOfRange {
                index,
                len: archive.len(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(timestamp: &str) -> Snapshot {
        Snapshot {
            timestamp: timestamp.to_string(),
            related_keywords: vec![],
            competitors: vec![],
            keyword_analysis: vec![],
        }
    }

    #[test]
    fn list_puts_sentinel_first() {
        let archive = vec![
            snapshot("2024-01-01T00:00:00Z"),
            snapshot("2024-02-01T00:00:00Z"),
        ];

        let entries = list(&archive);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label, CURRENT_LABEL);
        assert_eq!(entries[0].index, None);
        assert_eq!(entries[1].index, Some(0));
        assert_eq!(entries[1].label, archive[0].label());
        assert_eq!(entries[2].index, Some(1));
        assert_eq!(entries[2].label, archive[1].label());
    }

    #[test]
    fn list_of_empty_archive_is_only_sentinel() {
        let entries = list(&[]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].selection(), Selection::Current);
    }

    #[test]
    fn sentinel_resolves_to_current_regardless_of_archive() {
        let current = snapshot("now");
        let archive = vec![snapshot("a"), snapshot("b")];

        assert_eq!(
            resolve(Selection::Current, Some(&current), &archive).unwrap(),
            Some(&current)
        );
        assert_eq!(resolve(Selection::Current, Some(&current), &[]).unwrap(), Some(&current));
        assert_eq!(resolve(Selection::Current, None, &archive).unwrap(), None);
    }

    #[test]
    fn index_resolves_to_archive_entry() {
        let archive = vec![snapshot("a"), snapshot("b")];
        for (i, expected) in archive.iter().enumerate() {
            assert_eq!(resolve(Selection::Index(i), None, &archive).unwrap(), Some(expected));
        }
    }

    #[test]
    fn stale_index_is_out_of_range() {
        let archive = vec![snapshot("a")];
        let err = resolve(Selection::Index(1), None, &archive).unwrap_err();
        assert!(matches!(err, DashboardError::OutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn parses_selection_text() {
        assert_eq!("".parse::<Selection>().unwrap(), Selection::Current);
        assert_eq!("current".parse::<Selection>().unwrap(), Selection::Current);
        assert_eq!(" 3 ".parse::<Selection>().unwrap(), Selection::Index(3));
        assert!("-1".parse::<Selection>().is_err());
        assert!("latest".parse::<Selection>().is_err());
    }
}
