//! Save Store
//!
//! Orchestrates whole-file read → decode-all → mutate → encode-all → write
//! cycles against individual store files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::config::{Config, FileFormat};
use crate::error::{Result, SaveError};
use crate::fs;
use crate::record::{decode_record, decode_records, encode_records, DataType, Record};
use crate::value::Value;

/// The save-file store
///
/// ## Concurrency Model
/// Every operation is synchronous, blocking, and self-contained: the record
/// list is re-read from disk on each call and never cached between calls.
/// Overlapping calls on the same path from one process are serialized by a
/// per-path mutex; two calls racing on the same file from *different*
/// processes can still lose writes (last writer wins), so cross-process
/// mutual exclusion is the caller's responsibility.
pub struct SaveStore {
    /// Store configuration
    config: Config,

    /// Per-path locks serializing read-modify-rewrite cycles
    locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl SaveStore {
    /// Create a store with the given config
    pub fn new(config: Config) -> Self {
        Self {
            config,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Create a store with the default config
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Path Assembly
    // =========================================================================

    /// Assemble the full path for a named store file using the configured
    /// file format, creating the base directory if needed
    pub fn file_path(&self, file_name: &str) -> Result<PathBuf> {
        self.file_path_with_format(file_name, self.config.file_format)
    }

    /// Assemble the full path for a named store file with an explicit format
    ///
    /// The extension is cosmetic; the byte layout does not change with it.
    pub fn file_path_with_format(&self, file_name: &str, format: FileFormat) -> Result<PathBuf> {
        fs::ensure_dir(&self.config.base_dir)?;
        let name = format!("{}{}", file_name, format.extension());
        Ok(self.config.base_dir.join(name))
    }

    /// Path for the configured default file name
    pub fn default_file_path(&self) -> Result<PathBuf> {
        self.file_path(&self.config.default_file_name)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert or replace the record stored under `key`
    ///
    /// If `path` does not exist, a store file holding exactly the one new
    /// record is written. Otherwise the full record list is decoded, any
    /// record with a matching key is dropped, and the new record is appended
    /// at the tail before the whole file is rewritten.
    ///
    /// A corrupt record stream aborts the operation before any write; the
    /// existing file is left untouched. On a write failure the previous
    /// content may already be partially overwritten: whole-file rewrite
    /// carries no atomicity guarantee.
    pub fn upsert(&self, key: &str, data: &[u8], data_type: DataType, path: &Path) -> Result<()> {
        let lock = self.lock_for(path);
        let _guard = lock.lock();

        if !fs::file_exists(path) {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::ensure_dir(parent)?;
                }
            }

            let records = [Record::new(key, data_type, data.to_vec())];
            fs::write_all_bytes(path, &encode_records(&records))?;

            debug!(key, path = %path.display(), "created store file with first record");
            return Ok(());
        }

        let bytes = fs::read_all_bytes(path)?;
        let mut records = decode_records(&bytes)?;

        records.retain(|record| record.key != key);
        records.push(Record::new(key, data_type, data.to_vec()));

        fs::write_all_bytes(path, &encode_records(&records))?;

        debug!(key, records = records.len(), path = %path.display(), "upserted record");
        Ok(())
    }

    /// Find the record stored under `key`
    ///
    /// Returns:
    /// - `Ok(Some((data_type, data)))` — the first record whose key matches
    /// - `Ok(None)` — the file does not exist, or no record matches
    /// - `Err(_)` — the file could not be read, or the stream is corrupt;
    ///   never reported as a silent absence
    pub fn lookup(&self, key: &str, path: &Path) -> Result<Option<(DataType, Vec<u8>)>> {
        let lock = self.lock_for(path);
        let _guard = lock.lock();

        if !fs::file_exists(path) {
            warn!(path = %path.display(), "store file not found");
            return Ok(None);
        }

        let bytes = fs::read_all_bytes(path)?;
        let mut pos = 0;

        while let Some(record) = decode_record(&bytes, &mut pos)? {
            if record.key == key {
                return Ok(Some((record.data_type, record.data)));
            }
        }

        Ok(None)
    }

    /// Remove the record stored under `key`
    ///
    /// The full record list is decoded, matching records are filtered out
    /// preserving the relative order of the remainder, and the file is
    /// rewritten. Removing a key that is not present still rewrites the
    /// unchanged list and succeeds; a missing file is an error.
    pub fn remove(&self, key: &str, path: &Path) -> Result<()> {
        let lock = self.lock_for(path);
        let _guard = lock.lock();

        if !fs::file_exists(path) {
            return Err(SaveError::StoreMissing(path.to_path_buf()));
        }

        let bytes = fs::read_all_bytes(path)?;
        let mut records = decode_records(&bytes)?;

        let before = records.len();
        records.retain(|record| record.key != key);

        fs::write_all_bytes(path, &encode_records(&records))?;

        debug!(
            key,
            removed = before - records.len(),
            remaining = records.len(),
            path = %path.display(),
            "removed record"
        );
        Ok(())
    }

    /// Delete an entire store file
    ///
    /// Missing files and failed deletes are logged, not escalated. Returns
    /// whether a file was actually removed.
    pub fn delete_store(&self, path: &Path) -> bool {
        let lock = self.lock_for(path);
        let _guard = lock.lock();

        fs::delete_file(path)
    }

    // =========================================================================
    // Typed Convenience
    // =========================================================================

    /// Encode a typed value and upsert it under `key`
    pub fn upsert_value(&self, key: &str, value: &Value, path: &Path) -> Result<()> {
        let (data_type, data) = value.encode();
        self.upsert(key, &data, data_type, path)
    }

    /// Look up `key` and decode the payload against its stored type tag
    pub fn lookup_value(&self, key: &str, path: &Path) -> Result<Option<Value>> {
        match self.lookup(key, path)? {
            Some((data_type, data)) => Ok(Some(Value::decode(data_type, &data)?)),
            None => Ok(None),
        }
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Get or create the lock guarding the given path
    ///
    /// Paths are compared as given; callers that reach one file through
    /// several spellings get several locks.
    fn lock_for(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock();
        locks
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
