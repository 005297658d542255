// storefront/src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::shipping_address::ShippingAddress;
use crate::errors::AppError;

/// How the customer chose to pay. Unknown names are preserved as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
  Stripe,
  PayPal,
  CashOnDelivery,
  Other(String),
}

impl PaymentMethod {
  pub fn as_str(&self) -> &str {
    match self {
      PaymentMethod::Stripe => "Stripe",
      PaymentMethod::PayPal => "PayPal",
      PaymentMethod::CashOnDelivery => "CashOnDelivery",
      PaymentMethod::Other(name) => name,
    }
  }
}

impl From<String> for PaymentMethod {
  fn from(name: String) -> Self {
    match name.as_str() {
      "Stripe" => PaymentMethod::Stripe,
      "PayPal" => PaymentMethod::PayPal,
      "CashOnDelivery" => PaymentMethod::CashOnDelivery,
      _ => PaymentMethod::Other(name),
    }
  }
}

impl From<PaymentMethod> for String {
  fn from(method: PaymentMethod) -> Self {
    match method {
      PaymentMethod::Other(name) => name,
      known => known.as_str().to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUser {
  pub name: String,
  pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
  pub product_id: String,
  pub name: String,
  pub slug: String,
  pub image: String,
  pub qty: i32,
  pub price: Decimal,
}

/// Gateway confirmation recorded once an order is paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
  pub id: String,
  pub status: String,
  #[serde(alias = "email_address")]
  pub email_address: String,
  pub price_paid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: String,
  pub user_id: String,
  pub user: OrderUser,
  pub order_items: Vec<OrderItem>,
  pub shipping_address: ShippingAddress,
  pub payment_method: PaymentMethod,
  pub payment_result: Option<PaymentResult>,
  pub items_price: Decimal,
  pub shipping_price: Decimal,
  pub tax_price: Decimal,
  pub total_price: Decimal,
  pub is_paid: bool,
  pub paid_at: Option<DateTime<Utc>>,
  pub is_shipped: bool,
  pub shipped_at: Option<DateTime<Utc>>,
  pub is_delivered: bool,
  pub delivered_at: Option<DateTime<Utc>>,
  pub created_at: DateTime<Utc>,
}

impl Order {
  /// A paid order must carry `paid_at`. Fulfillment flags are not checked.
  pub fn ensure_consistent(&self) -> Result<(), AppError> {
    if self.is_paid && self.paid_at.is_none() {
      return Err(AppError::Integrity(format!(
        "order {} is marked paid without a paid timestamp",
        self.id
      )));
    }
    Ok(())
  }
}
