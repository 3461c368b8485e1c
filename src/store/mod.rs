//! Snapshot archive storage.
//!
//! The archive is one json array persisted under a fixed key in a
//! key-value backend:
//! - memory: a plain map, used by tests and throwaway sessions
//! - sqlite: a single `kv` table in the platform data directory
//!
//! Reads fail soft. A missing key, a backend read error, or a value that
//! does not parse as a snapshot array all load as an empty archive.
//! Appends never fail soft: a read error aborts them before anything is
//! written. Each append is one read-modify-write through
//! `KeyValueStore::update`, serialized by a mutex within the process and
//! by an immediate sqlite transaction across handles on the same file, so
//! overlapping appends keep every snapshot.

pub mod memory;
pub mod sqlite;

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StoreError;
use crate::snapshot::Snapshot;

/// Key the archive lives under.
pub const ARCHIVE_KEY: &str = "snapshots";

/// String key-value persistence, the shape of a browser's local storage.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read-modify-write of one key. Backends shared between processes
    /// override this so the read and the write are one atomic unit.
    /// Nothing is written when the read or `apply` fails.
    fn update(
        &mut self,
        key: &str,
        apply: &mut dyn FnMut(Option<&str>) -> Result<String, StoreError>,
    ) -> Result<(), StoreError> {
        let current = self.get(key)?;
        let next = apply(current.as_deref())?;
        self.set(key, &next)
    }
}

/// Typed access to the archive. Callers never see the json.
pub trait SnapshotRepository {
    /// Full archive in append order. Never fails; unreadable data is empty.
    fn load(&self) -> Vec<Snapshot>;

    /// Appends at the end and returns the updated archive.
    fn append(&self, snapshot: Snapshot) -> Result<Vec<Snapshot>, StoreError>;
}

pub struct ArchiveStore<K> {
    backend: Mutex<K>,
}

impl<K: KeyValueStore> ArchiveStore<K> {
    pub fn new(backend: K) -> Self {
        ArchiveStore {
            backend: Mutex::new(backend),
        }
    }

    fn lock(&self) -> MutexGuard<'_, K> {
        // a panicked writer either wrote the whole array or nothing
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Absent and malformed values are an empty archive.
fn decode_archive(raw: Option<&str>) -> Vec<Snapshot> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str(raw) {
        Ok(snapshots) => snapshots,
        Err(e) => {
            tracing::warn!("archive is malformed, treating as empty: {e}");
            Vec::new()
        }
    }
}

impl<K: KeyValueStore> SnapshotRepository for ArchiveStore<K> {
    fn load(&self) -> Vec<Snapshot> {
        let backend = self.lock();
        match backend.get(ARCHIVE_KEY) {
            Ok(raw) => decode_archive(raw.as_deref()),
            Err(e) => {
                tracing::warn!("could not read archive, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    fn append(&self, snapshot: Snapshot) -> Result<Vec<Snapshot>, StoreError> {
        let mut backend = self.lock();
        let mut snapshot = Some(snapshot);
        let mut updated = Vec::new();

        // a failed read aborts the append instead of overwriting history
        backend.update(ARCHIVE_KEY, &mut |raw: Option<&str>| -> Result<String, StoreError> {
            let mut snapshots = decode_archive(raw);
            snapshots.extend(snapshot.take());
            let encoded = serde_json::to_string(&snapshots)?;
            updated = snapshots;
            Ok(encoded)
        })?;

        tracing::debug!("archive now holds {} snapshots", updated.len());
        Ok(updated)
    }
}
