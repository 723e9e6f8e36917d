//! API error types with HTTP response mapping.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;
use queries::QueryError;
use store::StoreError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Write-side error.
    Domain(DomainError),
    /// Read-side error.
    Query(QueryError),
    /// Malformed or incomplete JSON body.
    Json(JsonRejection),
    /// Path segment that does not parse.
    Path(PathRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Domain(err) => domain_error_to_response(err),
            ApiError::Query(err) => query_error_to_response(err),
            ApiError::Json(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Path(rejection) => (rejection.status(), rejection.body_text()),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn domain_error_to_response(err: DomainError) -> (StatusCode, String) {
    match &err {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        DomainError::Store(store_err) => store_error_to_response(store_err),
    }
}

fn query_error_to_response(err: QueryError) -> (StatusCode, String) {
    match &err {
        QueryError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        QueryError::Store(store_err) => store_error_to_response(store_err),
    }
}

fn store_error_to_response(err: &StoreError) -> (StatusCode, String) {
    match err {
        StoreError::ForeignKeyViolation { table, .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("A row in {table} references a record that does not exist"),
        ),
        _ => {
            tracing::error!(error = %err, "internal server error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        ApiError::Query(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Json(rejection)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Path(rejection)
    }
}

#[cfg(test)]
mod tests {
    use domain::ValidationError;

    use super::*;

    #[test]
    fn not_found_maps_to_404_with_entity_message() {
        let (status, message) = domain_error_to_response(DomainError::NotFound {
            entity: "Order",
            id: 4,
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "Order not found");
    }

    #[test]
    fn validation_maps_to_400() {
        let (status, _) = domain_error_to_response(DomainError::Validation(
            ValidationError::Required { field: "title" },
        ));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn foreign_key_violation_maps_to_422() {
        let (status, message) = domain_error_to_response(DomainError::Store(
            StoreError::ForeignKeyViolation {
                table: "order_items".to_string(),
                detail: "product 9 does not exist".to_string(),
            },
        ));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(message.contains("order_items"));
    }

    #[test]
    fn database_failure_hides_driver_detail() {
        let (status, message) = query_error_to_response(QueryError::Store(StoreError::Database(
            sqlx::Error::PoolTimedOut,
        )));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "internal server error");
    }
}
