// storefront/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use prostore_flow::FlowError;
use serde_json::json;
use thiserror::Error;

use crate::services::payment_gateway::GatewayError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Payment Gateway Error: {0}")]
  Gateway(#[from] GatewayError),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  /// A persisted record breaks a state invariant, e.g. paid without `paidAt`.
  #[error("Data Integrity Error: {0}")]
  Integrity(String),

  #[error("Workflow Error: {source}")]
  Workflow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Gateway(GatewayError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
      AppError::Gateway(_) => StatusCode::BAD_GATEWAY,
      AppError::Config(_)
      | AppError::Sqlx(_)
      | AppError::Integrity(_)
      | AppError::Workflow { .. }
      | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    tracing::error!(application_error = %self, "Responding with error");
    let status = self.status_code();
    match self {
      AppError::Validation(m) | AppError::NotFound(m) => HttpResponse::build(status).json(json!({"error": m})),
      AppError::Gateway(gateway_err) => HttpResponse::build(status).json(json!({
        "error": "Payment provider error",
        "detail": gateway_err.to_string(),
        "retryable": gateway_err.is_retryable(),
      })),
      AppError::Config(m) => HttpResponse::build(status).json(json!({"error": "Configuration issue", "detail": m})),
      AppError::Sqlx(_) => HttpResponse::build(status).json(json!({"error": "Database operation failed"})),
      AppError::Integrity(_) => HttpResponse::build(status).json(json!({"error": "Stored order data is inconsistent"})),
      AppError::Workflow { source } => {
        tracing::error!(flow_error_source = ?source, "Workflow error details");
        HttpResponse::build(status).json(json!({"error": "Workflow processing error"}))
      }
      AppError::Internal(m) => {
        HttpResponse::build(status).json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[test]
  fn gateway_timeout_maps_to_504_and_other_gateway_errors_to_502() {
    let timeout = AppError::Gateway(GatewayError::Timeout(Duration::from_secs(10)));
    assert_eq!(timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);

    let rejected = AppError::Gateway(GatewayError::Rejected {
      status: 402,
      code: Some("card_declined".to_string()),
      message: "Your card was declined.".to_string(),
    });
    assert_eq!(rejected.status_code(), StatusCode::BAD_GATEWAY);
  }

  #[test]
  fn flow_errors_become_workflow_errors() {
    let err: AppError = FlowError::Internal("boom".to_string()).into();
    assert!(matches!(err, AppError::Workflow { .. }));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn not_found_and_validation_statuses() {
    assert_eq!(AppError::NotFound("order".into()).status_code(), StatusCode::NOT_FOUND);
    assert_eq!(AppError::Validation("empty id".into()).status_code(), StatusCode::BAD_REQUEST);
  }
}
