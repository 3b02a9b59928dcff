//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields (operation, key, status) on every event
//! - Request ID flows in the `x-request-id` header and the trace span
//! - Metrics endpoint is optional and off by default

pub mod logging;
pub mod metrics;
