//! Request routing and response mapping for the lookup endpoint.
//!
//! One route: `GET /lookup?domain=<name>`. Every response, success or
//! error, is JSON and carries permissive CORS headers so browser clients
//! can call the endpoint directly.

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use domain_expiry_lib::{DomainExpiryError, ExpiryChecker};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// JSON body for all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build the application router.
///
/// The CORS layer answers preflight requests itself and stamps
/// `Access-Control-Allow-Origin: *` on every other response.
pub fn router(checker: Arc<ExpiryChecker>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::OPTIONS]);

    Router::new()
        .route("/lookup", get(lookup_handler).options(preflight_handler))
        .layer(cors)
        .with_state(checker)
}

/// GET /lookup?domain=<name>
///
/// Status mapping:
/// - 200: a source produced a record with a non-null expiry date
/// - 400: missing or syntactically invalid `domain` parameter
/// - 404: every source failed or was inconclusive
/// - 500: anything unexpected, with a generic message
async fn lookup_handler(
    State(checker): State<Arc<ExpiryChecker>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(domain) = params.get("domain").map(|d| d.trim()).filter(|d| !d.is_empty())
    else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing required query parameter 'domain'".to_string(),
        );
    };

    match checker.lookup(domain).await {
        Ok(record) => {
            tracing::info!(domain = %record.domain, "Lookup succeeded");
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(err) => map_error(domain, err),
    }
}

/// Bare OPTIONS (non-preflight) gets an empty 200; real preflights are
/// answered by the CORS layer before reaching this handler.
async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

/// Map a lookup error to the endpoint's status-code contract.
fn map_error(domain: &str, err: DomainExpiryError) -> Response {
    match err {
        DomainExpiryError::InvalidDomain { .. } => {
            tracing::debug!(domain = %domain, error = %err, "Rejected invalid domain");
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        DomainExpiryError::NoData { .. } => {
            tracing::info!(domain = %domain, "No source yielded expiry data");
            error_response(StatusCode::NOT_FOUND, err.to_string())
        }
        other => {
            // Source-level failures are swallowed by the orchestrator, so
            // anything landing here is unexpected. Log the detail, return
            // a generic message.
            tracing::error!(domain = %domain, error = %other, "Unexpected lookup failure");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use domain_expiry_lib::{LookupConfig, WhoisRecord, WhoisSource};
    use tower::ServiceExt;

    /// Stub source with a canned outcome.
    struct StubSource {
        record: Option<WhoisRecord>,
    }

    #[async_trait]
    impl WhoisSource for StubSource {
        fn name(&self) -> &'static str {
            "stub"
        }
        async fn lookup(&self, domain: &str) -> Result<WhoisRecord, DomainExpiryError> {
            match &self.record {
                Some(record) => Ok(record.clone()),
                None => Err(DomainExpiryError::source(self.name(), domain, "stubbed failure")),
            }
        }
    }

    fn test_router(record: Option<WhoisRecord>) -> Router {
        let checker = ExpiryChecker::with_sources(
            LookupConfig::default(),
            vec![Box::new(StubSource { record })],
        );
        router(Arc::new(checker))
    }

    fn conclusive_record() -> WhoisRecord {
        WhoisRecord::registered(
            "example.com",
            Some("2025-01-01T00:00:00Z".into()),
            Some("1995-08-14T04:00:00Z".into()),
            Some("Example Registrar".into()),
        )
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_successful_lookup_returns_record() {
        let app = test_router(Some(conclusive_record()));
        let response = app
            .oneshot(
                Request::get("/lookup?domain=example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );

        let json = body_json(response).await;
        assert_eq!(json["domain"], "example.com");
        assert_eq!(json["expiry_date"], "2025-01-01T00:00:00Z");
        assert_eq!(json["creation_date"], "1995-08-14T04:00:00Z");
        assert_eq!(json["registrar"], "Example Registrar");
        assert_eq!(json["status"], "registered");
    }

    #[tokio::test]
    async fn test_missing_domain_param_is_400() {
        let app = test_router(Some(conclusive_record()));
        let response = app
            .oneshot(Request::get("/lookup").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("domain"));
    }

    #[tokio::test]
    async fn test_invalid_domain_is_400() {
        let app = test_router(Some(conclusive_record()));
        let response = app
            .oneshot(
                Request::get("/lookup?domain=not%20a%20domain")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("Invalid domain"));
    }

    #[tokio::test]
    async fn test_exhausted_sources_is_404() {
        let app = test_router(None);
        let response = app
            .oneshot(
                Request::get("/lookup?domain=example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("example.com"));
    }

    #[tokio::test]
    async fn test_inconclusive_record_is_404() {
        let record = WhoisRecord::registered(
            "example.com",
            None,
            None,
            Some("Registrar Without Dates".into()),
        );
        let app = test_router(Some(record));
        let response = app
            .oneshot(
                Request::get("/lookup?domain=example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_preflight_options_is_200_with_cors() {
        let app = test_router(Some(conclusive_record()));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/lookup")
                    .header(header::ORIGIN, "https://example.org")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
        let allow_methods = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .map(|v| v.to_str().unwrap())
            .unwrap_or_default();
        assert!(allow_methods.contains("GET"));
    }

    #[tokio::test]
    async fn test_bare_options_is_200() {
        let app = test_router(Some(conclusive_record()));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/lookup")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_map_error_statuses() {
        let invalid = DomainExpiryError::invalid_domain("not a domain", "contains space");
        assert_eq!(map_error("not a domain", invalid).status(), StatusCode::BAD_REQUEST);

        let no_data = DomainExpiryError::no_data("example.com");
        assert_eq!(map_error("example.com", no_data).status(), StatusCode::NOT_FOUND);

        let internal = DomainExpiryError::internal("broken");
        assert_eq!(
            map_error("example.com", internal).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        // Recoverable errors never normally escape the orchestrator, but
        // if one does it must map to 500, not leak as-is.
        let network = DomainExpiryError::network("connection reset");
        assert_eq!(
            map_error("example.com", network).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
