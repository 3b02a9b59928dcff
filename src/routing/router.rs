//! Route registration.
//!
//! # Responsibilities
//! - Bind the three tender routes to a `TenderHandler`
//! - Forward each matched request to the handler untouched
//! - Return the handler's response untouched
//!
//! # Design Decisions
//! - Builder style: takes a router by value, returns the extended router
//! - No fallback here; unmatched paths get whatever the caller's router does
//! - Conflicts are resolved by axum: re-registering a path+method panics

use std::sync::Arc;

use axum::{extract::Request, routing::get, Router};

use crate::routing::handler::TenderHandler;

pub const GET_TENDER: &str = "/get_tender/{id}";
/// `{tender}` is `key-type-size-timestamp-lots`; no field may contain `-`.
pub const ADD_TENDER: &str = "/add_tender/{tender}";
pub const GET_ALL_TENDERS: &str = "/get_all_tenders";

/// Static description of one registered route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub method: &'static str,
    pub path: &'static str,
    pub operation: &'static str,
}

/// Every route `register` installs, in registration order.
pub const ROUTES: [RouteSpec; 3] = [
    RouteSpec {
        method: "GET",
        path: GET_TENDER,
        operation: "get_tender",
    },
    RouteSpec {
        method: "GET",
        path: ADD_TENDER,
        operation: "add_tender",
    },
    RouteSpec {
        method: "GET",
        path: GET_ALL_TENDERS,
        operation: "get_all_tenders",
    },
];

/// Register the tender routes on `router`, dispatching to `handler`.
///
/// # Panics
///
/// Panics if `router` already has a GET handler on one of the paths.
pub fn register<S, H>(router: Router<S>, handler: Arc<H>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    H: TenderHandler,
{
    let get_tender = {
        let handler = handler.clone();
        move |request: Request| async move { handler.get_tender(request).await }
    };
    let add_tender = {
        let handler = handler.clone();
        move |request: Request| async move { handler.add_tender(request).await }
    };
    let get_all_tenders =
        move |request: Request| async move { handler.get_all_tenders(request).await };

    // /change_holder/{holder} is deliberately not registered.
    router
        .route(GET_TENDER, get(get_tender))
        .route(ADD_TENDER, get(add_tender))
        .route(GET_ALL_TENDERS, get(get_all_tenders))
}

/// A fresh router carrying only the tender routes.
pub fn router<H: TenderHandler>(handler: Arc<H>) -> Router {
    register(Router::new(), handler)
}
