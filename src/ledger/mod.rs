//! Tender ledger subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     snapshot file (optional) → store.rs load → optional seed (init_ledger)
//!
//! Requests (via controller):
//!     query_tender / record_tender / query_all_tenders
//!
//! Shutdown:
//!     store.rs save → snapshot file
//! ```
//!
//! # Design Decisions
//! - World state is a concurrent map; no global lock on reads
//! - Range queries are lexicographic over string keys
//! - Recording an existing key overwrites it

pub mod store;
pub mod types;

pub use store::Ledger;
pub use types::{LedgerError, LedgerResult, Tender, TenderRecord};
