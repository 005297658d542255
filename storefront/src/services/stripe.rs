// storefront/src/services/stripe.rs

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::payment_gateway::{GatewayError, PaymentGateway, PaymentIntent, PaymentIntentRequest};

pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

const PAYMENT_INTENTS_PATH: &str = "/v1/payment_intents";

/// Stripe's error envelope: `{"error": {"type", "code", "message"}}`.
#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
  error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
  #[serde(rename = "type")]
  kind: Option<String>,
  code: Option<String>,
  message: Option<String>,
}

/// Creates payment intents through the Stripe REST API.
#[derive(Debug)]
pub struct StripeGateway {
  http: reqwest::Client,
  api_base: String,
  secret_key: SecretString,
}

impl StripeGateway {
  pub fn new(api_base: impl Into<String>, secret_key: SecretString) -> Result<Self, GatewayError> {
    if secret_key.expose_secret().trim().is_empty() {
      return Err(GatewayError::Configuration("Stripe secret key is empty".to_string()));
    }
    let http = reqwest::Client::builder()
      .build()
      .map_err(|e| GatewayError::Configuration(format!("failed to build HTTP client: {}", e)))?;
    let api_base = api_base.into().trim_end_matches('/').to_string();
    Ok(Self {
      http,
      api_base,
      secret_key,
    })
  }

  fn form_fields(request: &PaymentIntentRequest) -> Vec<(String, String)> {
    let mut fields = vec![
      ("amount".to_string(), request.amount.to_string()),
      ("currency".to_string(), request.currency.to_lowercase()),
    ];
    for (key, value) in &request.metadata {
      fields.push((format!("metadata[{}]", key), value.clone()));
    }
    fields
  }

  async fn rejection(response: reqwest::Response) -> GatewayError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<StripeErrorEnvelope>(&body) {
      Ok(envelope) => GatewayError::Rejected {
        status,
        code: envelope.error.code.or(envelope.error.kind),
        message: envelope
          .error
          .message
          .unwrap_or_else(|| "Stripe returned an error without a message".to_string()),
      },
      Err(_) => GatewayError::Rejected {
        status,
        code: None,
        message: body,
      },
    }
  }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
  #[instrument(
    name = "stripe::create_payment_intent",
    skip(self, request),
    fields(amount = request.amount, currency = %request.currency, idempotency_key = %request.idempotency_key)
  )]
  async fn create_payment_intent(&self, request: &PaymentIntentRequest) -> Result<PaymentIntent, GatewayError> {
    let url = format!("{}{}", self.api_base, PAYMENT_INTENTS_PATH);
    let response = self
      .http
      .post(&url)
      .header(AUTHORIZATION, format!("Bearer {}", self.secret_key.expose_secret()))
      .header("Idempotency-Key", request.idempotency_key.as_str())
      .form(&Self::form_fields(request))
      .send()
      .await
      .map_err(|e| GatewayError::Unavailable(e.to_string()))?;

    if !response.status().is_success() {
      let err = Self::rejection(response).await;
      warn!(error = %err, "Stripe rejected the payment intent request.");
      return Err(err);
    }

    let body = response
      .text()
      .await
      .map_err(|e| GatewayError::Unavailable(e.to_string()))?;
    let intent: PaymentIntent = serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))?;
    debug!(intent_id = %intent.id, status = ?intent.status, "Stripe payment intent created.");
    Ok(intent)
  }
}
