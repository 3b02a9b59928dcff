//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, trace span)
//!     → routing (registrar dispatches to a TenderHandler)
//!     → controller.rs (ledger-backed operations)
//!     → response.rs (error mapping)
//!     → Send to client
//! ```

pub mod controller;
pub mod request;
pub mod response;
pub mod server;

pub use controller::LedgerController;
pub use request::X_REQUEST_ID;
pub use server::HttpServer;
