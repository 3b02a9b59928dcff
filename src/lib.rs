//! Tender Registry Library

pub mod config;
pub mod http;
pub mod ledger;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::RegistryConfig;
pub use http::HttpServer;
pub use ledger::Ledger;
pub use lifecycle::Shutdown;
pub use routing::TenderHandler;
