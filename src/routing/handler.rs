//! The handler collaborator the registrar dispatches to.

use std::future::Future;

use axum::extract::Request;
use axum::response::Response;

/// The three tender operations reachable over HTTP.
///
/// Each method receives the matched request exactly as the router handed
/// it over, with path parameters still attached, and its response is sent
/// back to the client as is.
pub trait TenderHandler: Send + Sync + 'static {
    /// `GET /get_tender/{id}`
    fn get_tender(&self, request: Request) -> impl Future<Output = Response> + Send;

    /// `GET /add_tender/{tender}`
    fn add_tender(&self, request: Request) -> impl Future<Output = Response> + Send;

    /// `GET /get_all_tenders`
    fn get_all_tenders(&self, request: Request) -> impl Future<Output = Response> + Send;
}
