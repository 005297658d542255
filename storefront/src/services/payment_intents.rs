// storefront/src/services/payment_intents.rs

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use super::payment_gateway::{ClientSecret, GatewayError, PaymentGateway, PaymentIntentRequest};
use crate::models::{Currency, Order, PaymentMethod};

pub const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(10);

/// Creates the gateway payment intent an unpaid card order needs before the
/// browser can collect payment.
pub struct PaymentIntentInitiator {
  gateway: Arc<dyn PaymentGateway>,
  currency: Currency,
  timeout: Duration,
}

impl PaymentIntentInitiator {
  pub fn new(gateway: Arc<dyn PaymentGateway>, currency: Currency, timeout: Duration) -> Self {
    Self {
      gateway,
      currency,
      timeout,
    }
  }

  pub fn currency(&self) -> &Currency {
    &self.currency
  }

  pub fn requires_payment_intent(&self, order: &Order) -> bool {
    order.payment_method == PaymentMethod::Stripe && !order.is_paid
  }

  /// Builds the gateway request for `order` in the configured currency.
  pub fn payment_intent_request(&self, order: &Order) -> Result<PaymentIntentRequest, GatewayError> {
    let amount = self.currency.to_minor_units(order.total_price).ok_or_else(|| {
      GatewayError::InvalidAmount(format!("total {} overflows {} minor units", order.total_price, self.currency))
    })?;
    if amount <= 0 {
      return Err(GatewayError::InvalidAmount(format!(
        "total {} {} is not a positive amount",
        order.total_price, self.currency
      )));
    }

    Ok(PaymentIntentRequest {
      amount,
      currency: self.currency.clone(),
      metadata: BTreeMap::from([("orderId".to_string(), order.id.clone())]),
      idempotency_key: idempotency_key(&order.id, amount, &self.currency),
    })
  }

  /// `Ok(None)` without touching the gateway when the order needs no intent.
  #[instrument(skip(self, order), fields(order_id = %order.id, payment_method = order.payment_method.as_str()))]
  pub async fn initiate(&self, order: &Order) -> Result<Option<ClientSecret>, GatewayError> {
    if !self.requires_payment_intent(order) {
      return Ok(None);
    }

    let request = self.payment_intent_request(order)?;
    let intent = match tokio::time::timeout(self.timeout, self.gateway.create_payment_intent(&request)).await {
      Ok(result) => result?,
      Err(_) => {
        warn!(timeout = ?self.timeout, "Payment intent creation timed out.");
        return Err(GatewayError::Timeout(self.timeout));
      }
    };

    let Some(secret) = intent.client_secret else {
      return Err(GatewayError::MissingClientSecret { intent_id: intent.id });
    };
    info!(intent_id = %intent.id, amount = request.amount, "Payment intent ready.");
    Ok(Some(ClientSecret::new(secret)))
  }
}

/// Same order, amount and currency map to the same key, so repeated views
/// reuse one gateway intent; a changed total yields a fresh one.
pub fn idempotency_key(order_id: &str, amount_minor: i64, currency: &Currency) -> String {
  format!("order-{}-pi-{}-{}", order_id, amount_minor, currency.code())
}
