//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     TenderHandler impl
//!     → router.rs register (bind GET routes)
//!     → immutable axum Router handed to the HTTP server
//!
//! Request:
//!     GET /get_tender/{id}      → handler.get_tender(request)
//!     GET /add_tender/{tender}  → handler.add_tender(request)
//!     GET /get_all_tenders      → handler.get_all_tenders(request)
//!     anything else             → no match (caller's fallback)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Static dispatch through the `TenderHandler` trait
//! - Requests and responses pass through unchanged

pub mod handler;
pub mod router;

pub use handler::TenderHandler;
pub use router::{register, router, RouteSpec, ROUTES};
