// storefront/src/services/payment_mock.rs

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, instrument};
use uuid::Uuid;

use super::payment_gateway::{GatewayError, PaymentGateway, PaymentIntent, PaymentIntentRequest, PaymentIntentStatus};

/// What the mock does with the next requests.
#[derive(Debug, Clone)]
pub enum MockBehavior {
  Succeed,
  /// Answers after the delay, to exercise timeouts.
  Delay(Duration),
  Fail(GatewayError),
  /// Returns an intent with no client secret.
  OmitClientSecret,
}

/// In-process gateway used when `PAYMENT_GATEWAY=mock` and in tests.
///
/// Records every request it sees and, like Stripe, answers a repeated
/// idempotency key with the intent created the first time.
#[derive(Debug)]
pub struct MockPaymentGateway {
  behavior: Mutex<MockBehavior>,
  requests: Mutex<Vec<PaymentIntentRequest>>,
  intents_by_key: Mutex<HashMap<String, PaymentIntent>>,
}

impl MockPaymentGateway {
  pub fn new() -> Self {
    Self::with_behavior(MockBehavior::Succeed)
  }

  pub fn with_behavior(behavior: MockBehavior) -> Self {
    Self {
      behavior: Mutex::new(behavior),
      requests: Mutex::new(Vec::new()),
      intents_by_key: Mutex::new(HashMap::new()),
    }
  }

  pub fn set_behavior(&self, behavior: MockBehavior) {
    *self.behavior.lock() = behavior;
  }

  pub fn requests(&self) -> Vec<PaymentIntentRequest> {
    self.requests.lock().clone()
  }

  pub fn call_count(&self) -> usize {
    self.requests.lock().len()
  }

  /// Distinct intents created so far.
  pub fn intent_count(&self) -> usize {
    self.intents_by_key.lock().len()
  }

  fn new_intent(request: &PaymentIntentRequest, with_secret: bool) -> PaymentIntent {
    let intent_id = format!("pi_mock_{}", Uuid::new_v4().simple());
    let client_secret = with_secret.then(|| format!("{}_secret_{}", intent_id, Uuid::new_v4().simple()));
    PaymentIntent {
      id: intent_id,
      amount: request.amount,
      currency: request.currency.to_lowercase(),
      status: PaymentIntentStatus::RequiresPaymentMethod,
      client_secret,
      metadata: request.metadata.clone().into_iter().collect(),
    }
  }
}

impl Default for MockPaymentGateway {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
  #[instrument(
    name = "mock_gateway::create_payment_intent",
    skip(self, request),
    fields(amount = request.amount, currency = %request.currency)
  )]
  async fn create_payment_intent(&self, request: &PaymentIntentRequest) -> Result<PaymentIntent, GatewayError> {
    self.requests.lock().push(request.clone());
    let behavior = self.behavior.lock().clone();

    let with_secret = match behavior {
      MockBehavior::Fail(err) => return Err(err),
      MockBehavior::Delay(delay) => {
        tokio::time::sleep(delay).await;
        true
      }
      MockBehavior::OmitClientSecret => false,
      MockBehavior::Succeed => true,
    };

    let mut intents = self.intents_by_key.lock();
    let intent = intents
      .entry(request.idempotency_key.clone())
      .or_insert_with(|| Self::new_intent(request, with_secret))
      .clone();
    info!(intent_id = %intent.id, "Mock payment intent ready.");
    Ok(intent)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::Currency;
  use std::collections::BTreeMap;

  fn request(key: &str, amount: i64) -> PaymentIntentRequest {
    PaymentIntentRequest {
      amount,
      currency: Currency::usd(),
      metadata: BTreeMap::from([("orderId".to_string(), "ORD-1".to_string())]),
      idempotency_key: key.to_string(),
    }
  }

  #[tokio::test]
  async fn repeated_idempotency_key_returns_the_same_intent() {
    let gateway = MockPaymentGateway::new();
    let first = gateway.create_payment_intent(&request("k1", 500)).await.unwrap();
    let second = gateway.create_payment_intent(&request("k1", 500)).await.unwrap();
    let third = gateway.create_payment_intent(&request("k2", 700)).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_ne!(first.id, third.id);
    assert_eq!(gateway.call_count(), 3);
    assert_eq!(gateway.intent_count(), 2);
    assert_eq!(first.metadata.get("orderId").map(String::as_str), Some("ORD-1"));
    assert!(first.client_secret.unwrap().starts_with(&first.id));
  }

  #[tokio::test]
  async fn configured_failure_is_returned_and_recorded() {
    let gateway = MockPaymentGateway::with_behavior(MockBehavior::Fail(GatewayError::Unavailable("down".into())));
    let err = gateway.create_payment_intent(&request("k1", 500)).await.unwrap_err();
    assert_eq!(err, GatewayError::Unavailable("down".into()));
    assert_eq!(gateway.call_count(), 1);
    assert_eq!(gateway.intent_count(), 0);
  }
}
