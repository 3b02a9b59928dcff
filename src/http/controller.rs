//! Ledger-backed implementation of the tender operations.

use std::time::Instant;

use axum::{
    extract::{FromRequestParts, Path, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::http::response::error_response;
use crate::ledger::Ledger;
use crate::observability::metrics;
use crate::routing::TenderHandler;

/// Separator between the fields of an `add_tender` path parameter.
///
/// Fields cannot contain it, not even percent-encoded as `%2D`; such
/// requests are rejected with 400 before the ledger sees them.
pub const FIELD_SEPARATOR: char = '-';

const ENCODED_SEPARATOR: &str = "%2d";

/// Reply to a successful `add_tender`.
#[derive(Debug, Serialize)]
pub struct RecordReceipt {
    pub tx_id: Uuid,
}

/// Serves the tender routes from a [`Ledger`].
#[derive(Clone)]
pub struct LedgerController {
    ledger: Ledger,
}

impl LedgerController {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    async fn query(&self, request: Request) -> Result<Response, Response> {
        let id = single_path_param(request).await?;
        let tender = self.ledger.query_tender(&id).map_err(|e| {
            tracing::warn!(operation = "get_tender", key = %id, error = %e, "Tender lookup failed");
            e.into_response()
        })?;

        tracing::debug!(operation = "get_tender", key = %id, "Tender found");
        Ok((StatusCode::OK, Json(tender)).into_response())
    }

    async fn record(&self, request: Request) -> Result<Response, Response> {
        if request.uri().path().to_ascii_lowercase().contains(ENCODED_SEPARATOR) {
            tracing::warn!(operation = "add_tender", path = %request.uri().path(), "Encoded field separator");
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "Tender fields must not contain '-'",
            ));
        }

        let raw = single_path_param(request).await?;
        let args: Vec<&str> = raw.split(FIELD_SEPARATOR).collect();

        self.ledger.record_tender(&args).map_err(|e| {
            tracing::warn!(operation = "add_tender", tender = %raw, error = %e, "Tender rejected");
            e.into_response()
        })?;

        let receipt = RecordReceipt {
            tx_id: Uuid::new_v4(),
        };
        tracing::info!(operation = "add_tender", key = %args[0], tx_id = %receipt.tx_id, "Tender recorded");
        Ok((StatusCode::OK, Json(receipt)).into_response())
    }

    fn list(&self) -> Response {
        let records = self.ledger.query_all_tenders();
        tracing::debug!(operation = "get_all_tenders", count = records.len(), "Listing tenders");
        (StatusCode::OK, Json(records)).into_response()
    }
}

impl TenderHandler for LedgerController {
    async fn get_tender(&self, request: Request) -> Response {
        let start = Instant::now();
        let response = self.query(request).await.unwrap_or_else(|rejected| rejected);
        finish("get_tender", start, response)
    }

    async fn add_tender(&self, request: Request) -> Response {
        let start = Instant::now();
        let response = self.record(request).await.unwrap_or_else(|rejected| rejected);
        finish("add_tender", start, response)
    }

    async fn get_all_tenders(&self, _request: Request) -> Response {
        let start = Instant::now();
        finish("get_all_tenders", start, self.list())
    }
}

/// Extract the route's only path parameter. Rejections become responses as axum renders them.
async fn single_path_param(request: Request) -> Result<String, Response> {
    let (mut parts, _body) = request.into_parts();
    let Path(value) = Path::<String>::from_request_parts(&mut parts, &())
        .await
        .map_err(IntoResponse::into_response)?;
    Ok(value)
}

fn finish(operation: &'static str, start: Instant, response: Response) -> Response {
    metrics::record_request(operation, response.status().as_u16(), start);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Tender, TenderRecord};
    use crate::routing::router;
    use axum::body::Body;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(ledger: Ledger) -> axum::Router {
        router(Arc::new(LedgerController::new(ledger)))
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn test_get_seeded_tender() {
        let ledger = Ledger::new(None);
        ledger.init_ledger();

        let (status, body) = get(app(ledger), "/get_tender/4").await;
        assert_eq!(status, StatusCode::OK);
        let tender: Tender = serde_json::from_value(body).unwrap();
        assert_eq!(tender, Tender::new("Building", "10", "1496105425", "100"));
    }

    #[tokio::test]
    async fn test_get_unknown_tender() {
        let (status, body) = get(app(Ledger::new(None)), "/get_tender/404").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Could not locate tender");
    }

    #[tokio::test]
    async fn test_add_then_get() {
        let ledger = Ledger::new(None);
        let app = app(ledger.clone());

        let (status, body) = get(app.clone(), "/add_tender/11-Supply-20-1600000000-5").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["tx_id"].as_str().and_then(|s| Uuid::parse_str(s).ok()).is_some());

        let stored = ledger.query_tender("11").unwrap();
        assert_eq!(stored, Tender::new("Supply", "20", "1600000000", "5"));

        let (status, body) = get(app, "/get_tender/11").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "Supply");
        assert_eq!(body["lots"], "5");
    }

    #[tokio::test]
    async fn test_add_wrong_field_count() {
        let ledger = Ledger::new(None);
        let (status, body) = get(app(ledger.clone()), "/add_tender/XYZ").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Incorrect number of arguments. Expecting 5, got 1");
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_tenders() {
        let ledger = Ledger::new(None);
        ledger.init_ledger();

        let (status, body) = get(app(ledger), "/get_all_tenders").await;
        assert_eq!(status, StatusCode::OK);

        let records: Vec<TenderRecord> = serde_json::from_value(body).unwrap();
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].key, "1");
        assert_eq!(records[1].key, "10");
        assert_eq!(records[1].record.timestamp, "1487745091");
    }

    #[tokio::test]
    async fn test_get_all_tenders_empty() {
        let (status, body) = get(app(Ledger::new(None)), "/get_all_tenders").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[test]
    fn test_finish_records_request_metrics() {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            let missing = crate::ledger::LedgerError::NotFound("9".into()).into_response();
            finish("get_tender", Instant::now(), missing);
            finish("get_all_tenders", Instant::now(), StatusCode::OK.into_response());
            finish("get_all_tenders", Instant::now(), StatusCode::OK.into_response());
        });

        let rendered = handle.render();
        let counter = |operation: &str, status: &str| {
            rendered
                .lines()
                .find(|line| {
                    line.starts_with("tender_requests_total{")
                        && line.contains(&format!("operation=\"{operation}\""))
                        && line.contains(&format!("status=\"{status}\""))
                })
                .and_then(|line| line.rsplit(' ').next())
                .map(str::to_string)
        };

        assert_eq!(counter("get_tender", "404").as_deref(), Some("1"));
        assert_eq!(counter("get_all_tenders", "200").as_deref(), Some("2"));
        assert_eq!(counter("get_tender", "200"), None);
        assert!(rendered.contains("tender_request_duration_seconds"));
    }

    #[tokio::test]
    async fn test_percent_encoded_param_is_decoded() {
        let ledger = Ledger::new(None);
        let (status, _) = get(app(ledger.clone()), "/add_tender/k%201-Work-1-2-3").await;
        assert_eq!(status, StatusCode::OK);
        assert!(ledger.query_tender("k 1").is_ok());
    }

    #[tokio::test]
    async fn test_encoded_separator_is_rejected() {
        let ledger = Ledger::new(None);
        let app = app(ledger.clone());

        for uri in ["/add_tender/a%2Db-Work-1-2-3", "/add_tender/a-Work-1-2-3%2d4"] {
            let (status, body) = get(app.clone(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Tender fields must not contain '-'");
        }
        assert!(ledger.is_empty());
    }
}
