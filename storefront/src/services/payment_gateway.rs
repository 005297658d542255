// storefront/src/services/payment_gateway.rs

//! The payment gateway seam: request/response types, errors and the trait
//! implemented by the Stripe client and the in-process mock.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::models::Currency;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
  #[error("payment gateway unreachable: {0}")]
  Unavailable(String),

  #[error("payment gateway did not answer within {0:?}")]
  Timeout(Duration),

  #[error("invalid payment amount: {0}")]
  InvalidAmount(String),

  #[error("payment gateway rejected the request ({status}): {message}")]
  Rejected {
    status: u16,
    code: Option<String>,
    message: String,
  },

  #[error("payment intent {intent_id} came back without a client secret")]
  MissingClientSecret { intent_id: String },

  #[error("unreadable payment gateway response: {0}")]
  Decode(String),

  #[error("payment gateway misconfigured: {0}")]
  Configuration(String),
}

impl GatewayError {
  /// Whether the same request may succeed if sent again later.
  pub fn is_retryable(&self) -> bool {
    match self {
      GatewayError::Unavailable(_) => true,
      GatewayError::Rejected { status, .. } => *status == 429 || *status >= 500,
      _ => false,
    }
  }
}

/// Everything needed to create one payment intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntentRequest {
  /// Minor units of `currency`.
  pub amount: i64,
  pub currency: Currency,
  pub metadata: BTreeMap<String, String>,
  pub idempotency_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
  RequiresPaymentMethod,
  RequiresConfirmation,
  RequiresAction,
  Processing,
  RequiresCapture,
  Canceled,
  Succeeded,
  #[serde(other)]
  Unknown,
}

/// The gateway's view of a created intent.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
  pub id: String,
  pub amount: i64,
  pub currency: String,
  pub status: PaymentIntentStatus,
  pub client_secret: Option<String>,
  #[serde(default)]
  pub metadata: HashMap<String, String>,
}

/// Handed to the browser to confirm the payment; never logged.
pub struct ClientSecret(SecretString);

impl ClientSecret {
  pub fn new(secret: String) -> Self {
    ClientSecret(SecretString::from(secret))
  }

  pub fn expose(&self) -> &str {
    self.0.expose_secret()
  }
}

impl fmt::Debug for ClientSecret {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("ClientSecret([REDACTED])")
  }
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
  async fn create_payment_intent(&self, request: &PaymentIntentRequest) -> Result<PaymentIntent, GatewayError>;
}
