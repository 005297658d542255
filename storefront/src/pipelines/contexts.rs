// storefront/src/pipelines/contexts.rs

//! Data carried through the pipelines, wrapped in `prostore_flow::ContextData`.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::i18n::dictionary::OrderText;
use crate::i18n::Locale;
use crate::models::{Order, Session};
use crate::pages::PageMeta;
use crate::services::ClientSecret;
use crate::state::AppState;

/// Everything the order page needs, serialized for the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPagePayload {
  pub order: Order,
  pub stripe_client_secret: Option<String>,
  pub paypal_client_id: String,
  pub is_admin: bool,
  pub lang: Locale,
  pub dict: OrderText,
  pub meta: PageMeta,
  /// Fixed fee of the order's delivery method.
  pub delivery_price: Decimal,
}

/// How an order page request ended.
#[derive(Debug, Clone)]
pub enum OrderViewOutcome {
  NotFound,
  Unauthorized { redirect_to: String },
  Ready(Box<OrderPagePayload>),
}

pub struct OrderViewCtxData {
  pub app_state: AppState,
  pub order_id: String,
  pub caller: Option<Session>,
  pub locale: Locale,
  /// Set once the caller is known to be allowed to see it.
  pub order: Option<Order>,
  pub stripe_client_secret: Option<ClientSecret>,
  pub outcome: Option<OrderViewOutcome>,
}

impl OrderViewCtxData {
  pub fn new(app_state: AppState, order_id: impl Into<String>, caller: Option<Session>, locale: Locale) -> Self {
    Self {
      app_state,
      order_id: order_id.into(),
      caller,
      locale,
      order: None,
      stripe_client_secret: None,
      outcome: None,
    }
  }
}
