//! World state storage and snapshot persistence.

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use crate::ledger::types::{LedgerError, LedgerResult, Tender, TenderRecord};
use crate::observability::metrics;

/// Inclusive start of the key range covered by `query_all_tenders`.
pub const RANGE_START: &str = "0";
/// Exclusive end of the key range covered by `query_all_tenders`.
pub const RANGE_END: &str = "999";

/// Number of arguments `record_tender` expects: key, type, size, timestamp, lots.
pub const RECORD_ARGS: usize = 5;

/// A thread-safe key/value world state of tenders.
#[derive(Clone, Default)]
pub struct Ledger {
    inner: Arc<DashMap<String, Tender>>,
    persistence_path: Option<String>,
}

impl Ledger {
    /// Create a new empty ledger.
    pub fn new(persistence_path: Option<String>) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            persistence_path,
        }
    }

    /// Create a ledger bound to `path`, loading its snapshot if the file exists.
    pub fn load_from_file(path: &str) -> LedgerResult<Self> {
        let ledger = Self::new(Some(path.to_string()));
        if Path::new(path).exists() {
            let reader = BufReader::new(File::open(path)?);
            let map: BTreeMap<String, Tender> = serde_json::from_reader(reader)?;

            for (k, v) in map {
                ledger.inner.insert(k, v);
            }
            metrics::record_ledger_size(ledger.inner.len());
            tracing::info!(path = %path, entries = ledger.inner.len(), "Loaded ledger snapshot");
        }
        Ok(ledger)
    }

    /// Write the snapshot. No-op when the ledger has no persistence path.
    ///
    /// The JSON is written to `<path>.tmp` and renamed over `path` once
    /// complete. An interrupted save leaves the previous snapshot intact.
    pub fn save_to_file(&self) -> LedgerResult<()> {
        if let Some(path) = &self.persistence_path {
            let tmp_path = snapshot_tmp_path(path);

            // Sorted so snapshots diff cleanly.
            let map: BTreeMap<_, _> = self
                .inner
                .iter()
                .map(|r| (r.key().clone(), r.value().clone()))
                .collect();

            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            serde_json::to_writer_pretty(&mut writer, &map)?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
            drop(writer);

            fs::rename(&tmp_path, path)?;
            tracing::info!(path = %path, entries = map.len(), "Saved ledger snapshot");
        }
        Ok(())
    }

    /// Seed the ledger with ten demo tenders under keys "1" through "10".
    pub fn init_ledger(&self) {
        let seed = [
            ("Service", "1504054225"),
            ("Supply", "1504057825"),
            ("Work", "1493517025"),
            ("Building", "1496105425"),
            ("Service", "1493512301"),
            ("Supply", "1494117101"),
            ("Work", "1496104301"),
            ("Service", "1485066691"),
            ("Building", "1485153091"),
            ("Service", "1487745091"),
        ];

        for (i, (kind, timestamp)) in seed.into_iter().enumerate() {
            let key = (i + 1).to_string();
            let tender = Tender::new(kind, "10", timestamp, "100");
            tracing::debug!(key = %key, tender = ?tender, "Seeding tender");
            self.inner.insert(key, tender);
        }
        metrics::record_ledger_size(self.inner.len());
        tracing::info!(entries = self.inner.len(), "Ledger initialized");
    }

    /// Look up a single tender.
    pub fn query_tender(&self, key: &str) -> LedgerResult<Tender> {
        self.inner
            .get(key)
            .map(|r| r.value().clone())
            .ok_or_else(|| LedgerError::NotFound(key.to_string()))
    }

    /// Record a tender from `[key, type, size, timestamp, lots]`.
    ///
    /// An existing tender under the same key is overwritten.
    pub fn record_tender(&self, args: &[&str]) -> LedgerResult<()> {
        if args.len() != RECORD_ARGS {
            return Err(LedgerError::IncorrectArguments {
                expected: RECORD_ARGS,
                got: args.len(),
            });
        }

        let key = args[0].to_string();
        let tender = Tender::new(args[1], args[2], args[3], args[4]);
        self.inner.insert(key, tender);
        metrics::record_ledger_size(self.inner.len());
        Ok(())
    }

    /// All tenders whose key falls in `[RANGE_START, RANGE_END)`, in key order.
    ///
    /// Ordering is lexicographic, so "10" sorts before "2".
    pub fn query_all_tenders(&self) -> Vec<TenderRecord> {
        let mut records: Vec<TenderRecord> = self
            .inner
            .iter()
            .filter(|r| {
                let key = r.key().as_str();
                key >= RANGE_START && key < RANGE_END
            })
            .map(|r| TenderRecord {
                key: r.key().clone(),
                record: r.value().clone(),
            })
            .collect();
        records.sort_by(|a, b| a.key.cmp(&b.key));
        records
    }

    /// Number of stored tenders.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn snapshot_tmp_path(path: &str) -> String {
    format!("{path}.tmp")
}
