//! Tender types and ledger error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single tender as stored in the world state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tender {
    /// Tender category (Service, Supply, Work, Building, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Unix timestamp, kept as the string the client supplied.
    pub timestamp: String,
    pub size: String,
    pub lots: String,
}

impl Tender {
    pub fn new(
        kind: impl Into<String>,
        size: impl Into<String>,
        timestamp: impl Into<String>,
        lots: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            timestamp: timestamp.into(),
            size: size.into(),
            lots: lots.into(),
        }
    }
}

/// A keyed entry returned by range queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenderRecord {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Record")]
    pub record: Tender,
}

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No tender stored under the key.
    #[error("Could not locate tender")]
    NotFound(String),

    /// Wrong number of arguments for a ledger call.
    #[error("Incorrect number of arguments. Expecting {expected}, got {got}")]
    IncorrectArguments { expected: usize, got: usize },

    /// Snapshot file could not be read or written.
    #[error("Snapshot IO error: {0}")]
    Snapshot(#[from] std::io::Error),

    /// Snapshot file is not valid JSON.
    #[error("Snapshot format error: {0}")]
    SnapshotFormat(#[from] serde_json::Error),
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
