use std::time::Duration;

use kwdash::config::Config;
use kwdash::dashboard::Dashboard;
use kwdash::error::DashboardError;
use kwdash::selector::{self, Selection};
use kwdash::session::Session;
use kwdash::shell::Shell;
use kwdash::snapshot::Snapshot;
use kwdash::store::sqlite::SqliteStore;
use kwdash::store::{ArchiveStore, SnapshotRepository};
use tempfile::TempDir;

fn inputs(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn fresh_store_then_one_append() {
    let dir = TempDir::new().unwrap();
    let store = ArchiveStore::new(SqliteStore::open(&dir.path().join("kwdash.db")).unwrap());
    assert!(store.load().is_empty());

    let snapshot = Snapshot {
        timestamp: "2024-01-01T00:00:00Z".to_string(),
        related_keywords: inputs(&["a", "b"]),
        competitors: vec![],
        keyword_analysis: vec![],
    };
    store.append(snapshot.clone()).unwrap();

    assert_eq!(store.load(), vec![snapshot]);
}

#[test]
fn history_outlives_the_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kwdash.db");

    let first = {
        let store = ArchiveStore::new(SqliteStore::open(&path).unwrap());
        let mut dashboard = Dashboard::new(Session::default(), store);
        dashboard.session_mut().login();
        let snapshot = dashboard.analyze(&inputs(&["shoes", "boots"])).unwrap().clone();
        snapshot
    };

    // a new session starts with no current result but the same archive
    let store = ArchiveStore::new(SqliteStore::open(&path).unwrap());
    let dashboard = Dashboard::new(Session::default(), store);

    assert_eq!(dashboard.select(Selection::Current).unwrap(), None);
    assert_eq!(dashboard.select(Selection::Index(0)).unwrap(), Some(first.clone()));

    let entries = dashboard.snapshots();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, selector::CURRENT_LABEL);
    assert_eq!(entries[1].label, first.label());
}

#[test]
fn blocked_actions_leave_archive_untouched() {
    let store = ArchiveStore::new(SqliteStore::open_in_memory().unwrap());
    let mut dashboard = Dashboard::new(Session::new(1), store);

    assert!(matches!(
        dashboard.analyze(&inputs(&["shoes"])),
        Err(DashboardError::NotLoggedIn)
    ));

    dashboard.session_mut().login();
    assert!(matches!(
        dashboard.analyze(&inputs(&["", " "])),
        Err(DashboardError::EmptyKeywordSet)
    ));
    dashboard.analyze(&inputs(&["shoes"])).unwrap();
    assert!(matches!(
        dashboard.analyze(&inputs(&["shoes"])),
        Err(DashboardError::QuotaExceeded)
    ));

    assert_eq!(dashboard.repository().load().len(), 1);
}

#[tokio::test]
async fn scripted_session_against_sqlite() {
    let dir = TempDir::new().unwrap();
    let store = ArchiveStore::new(SqliteStore::open(&dir.path().join("kwdash.db")).unwrap());
    let config = Config {
        analysis_delay: Duration::from_millis(1),
        ..Config::default()
    };
    let mut shell = Shell::new(Dashboard::new(Session::new(config.initial_quota), store), &config);

    let script = "login\nanalyze running shoes, trail shoes\nanalyze boots\nsnapshots\nhtml 1\nquit\n";
    let mut out = Vec::new();
    shell.run(script.as_bytes(), &mut out).await.unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("searches left: 8"));
    assert!(output.contains("<td>boots</td>"));

    let archive = shell.dashboard().repository().load();
    assert_eq!(archive.len(), 2);
    assert_eq!(archive[0].keyword_analysis[1].keyword, "trail shoes");
}
