//! Dashboard context.
//!
//! Owns the session, the result of the latest analysis and the archive.
//! Analysis is split in two halves so the deferred generation can run
//! elsewhere: `begin_analysis` validates and spends quota, and
//! `complete_analysis` records the finished snapshot.

use crate::error::DashboardError;
use crate::generate;
use crate::selector::{self, Selection, SelectorEntry};
use crate::session::Session;
use crate::snapshot::Snapshot;
use crate::store::SnapshotRepository;

pub struct Dashboard<R> {
    session: Session,
    current: Option<Snapshot>,
    repo: R,
}

impl<R: SnapshotRepository> Dashboard<R> {
    pub fn new(session: Session, repo: R) -> Self {
        Dashboard {
            session,
            current: None,
            repo,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Trims inputs and drops blank slots. Changes nothing.
    pub fn check_analysis(&self, inputs: &[String]) -> Result<Vec<String>, DashboardError> {
        if !self.session.is_logged_in() {
            return Err(DashboardError::NotLoggedIn);
        }
        if self.session.remaining() == 0 {
            return Err(DashboardError::QuotaExceeded);
        }

        let keywords: Vec<String> = inputs
            .iter()
            .map(|input| input.trim())
            .filter(|input| !input.is_empty())
            .map(str::to_string)
            .collect();

        if keywords.is_empty() {
            return Err(DashboardError::EmptyKeywordSet);
        }

        Ok(keywords)
    }

    pub fn begin_analysis(&mut self, inputs: &[String]) -> Result<Vec<String>, DashboardError> {
        let keywords = self.check_analysis(inputs)?;
        let remaining = self.session.consume_search()?;
        tracing::info!(
            "analyzing {} keywords, {remaining} searches left",
            keywords.len()
        );
        Ok(keywords)
    }

    pub fn complete_analysis(&mut self, snapshot: Snapshot) -> Result<&Snapshot, DashboardError> {
        let archive = self.repo.append(snapshot.clone())?;
        tracing::debug!("stored snapshot {} of {}", snapshot.timestamp, archive.len());
        Ok(self.current.insert(snapshot))
    }

    /// Runs the whole analysis inline, without the deferred step.
    pub fn analyze(&mut self, inputs: &[String]) -> Result<&Snapshot, DashboardError> {
        let keywords = self.begin_analysis(inputs)?;
        let snapshot = generate::generate(&keywords);
        self.complete_analysis(snapshot)
    }

    pub fn snapshots(&self) -> Vec<SelectorEntry> {
        selector::list(&self.repo.load())
    }

    pub fn select(&self, selection: Selection) -> Result<Option<Snapshot>, DashboardError> {
        let archive = self.repo.load();
        let resolved = selector::resolve(selection, self.current.as_ref(), &archive)?;
        Ok(resolved.cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::ArchiveStore;

    fn dashboard() -> Dashboard<ArchiveStore<MemoryStore>> {
        Dashboard::new(Session::default(), ArchiveStore::new(MemoryStore::new()))
    }

    fn inputs(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn analysis_requires_login() {
        let mut dash = dashboard();
        let err = dash.analyze(&inputs(&["shoes"])).unwrap_err();
        assert!(matches!(err, DashboardError::NotLoggedIn));
        assert!(dash.repository().load().is_empty());
    }

    #[test]
    fn blank_inputs_block_without_spending_quota() {
        let mut dash = dashboard();
        dash.session_mut().login();

        let err = dash.analyze(&inputs(&["", "   ", "\t"])).unwrap_err();
        assert!(matches!(err, DashboardError::EmptyKeywordSet));
        assert_eq!(dash.session().remaining(), 10);
        assert!(dash.repository().load().is_empty());
        assert!(dash.current().is_none());
    }

    #[test]
    fn analysis_trims_and_skips_blank_slots() {
        let mut dash = dashboard();
        dash.session_mut().login();

        let snapshot = dash.analyze(&inputs(&["  shoes ", "", "boots"])).unwrap();
        let got: Vec<_> = snapshot.keyword_analysis.iter().map(|a| a.keyword.clone()).collect();
        assert_eq!(got, vec!["shoes", "boots"]);
    }

    #[test]
    fn analysis_stores_and_becomes_current() {
        let mut dash = dashboard();
        dash.session_mut().login();

        let stored = dash.analyze(&inputs(&["shoes"])).unwrap().clone();

        assert_eq!(dash.session().remaining(), 9);
        assert_eq!(dash.current(), Some(&stored));
        assert_eq!(dash.repository().load(), vec![stored.clone()]);
        assert_eq!(dash.select(Selection::Current).unwrap(), Some(stored.clone()));
        assert_eq!(dash.select(Selection::Index(0)).unwrap(), Some(stored));
    }

    #[test]
    fn quota_runs_out_after_ten_analyses() {
        let mut dash = dashboard();
        dash.session_mut().login();

        for _ in 0..10 {
            dash.analyze(&inputs(&["shoes"])).unwrap();
        }

        let err = dash.analyze(&inputs(&["shoes"])).unwrap_err();
        assert!(matches!(err, DashboardError::QuotaExceeded));
        assert_eq!(dash.repository().load().len(), 10);
    }

    #[test]
    fn snapshot_list_grows_with_archive() {
        let mut dash = dashboard();
        dash.session_mut().login();
        dash.analyze(&inputs(&["a"])).unwrap();
        dash.analyze(&inputs(&["b"])).unwrap();

        let entries = dash.snapshots();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].index, None);

        let err = dash.select(Selection::Index(2)).unwrap_err();
        assert!(matches!(err, DashboardError::OutOfRange { index: 2, len: 2 }));
    }
}
