//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Ledger is ready before the listener binds (traffic only when ready)

use crate::config::LedgerConfig;
use crate::ledger::{Ledger, LedgerResult};

/// Build the ledger: load the snapshot if configured, then seed if asked.
///
/// Seeding runs after loading, so the demo tenders overwrite snapshot
/// entries under keys "1" through "10".
pub fn prepare_ledger(config: &LedgerConfig) -> LedgerResult<Ledger> {
    let ledger = match &config.snapshot_path {
        Some(path) => Ledger::load_from_file(path)?,
        None => Ledger::new(None),
    };

    if config.seed_on_start {
        ledger.init_ledger();
    }

    Ok(ledger)
}
