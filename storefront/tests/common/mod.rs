// storefront/tests/common/mod.rs
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use storefront::config::AppConfig;
use storefront::i18n::Dictionaries;
use storefront::models::{Order, OrderItem, OrderUser, PaymentMethod, Role, Session, ShippingAddress};
use storefront::services::{InMemoryOrderStore, InMemorySessionStore, MockBehavior, MockPaymentGateway};
use storefront::state::AppState;

pub const OWNER_ID: &str = "U1";
pub const OWNER_TOKEN: &str = "owner-token";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const STRANGER_TOKEN: &str = "stranger-token";

static TRACING: Lazy<()> = Lazy::new(|| {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING);
}

/// Mock gateway config; `overrides` win over the defaults.
pub fn test_config(overrides: &[(&str, &str)]) -> AppConfig {
  let mut vars: HashMap<String, String> = [
    ("DATABASE_URL", "postgres://localhost/prostore_test"),
    ("PAYMENT_GATEWAY", "mock"),
    ("APP_BASE_URL", "https://shop.example"),
    ("PAYPAL_CLIENT_ID", "paypal-test-client"),
    ("PAYMENT_GATEWAY_TIMEOUT_SECS", "1"),
  ]
  .iter()
  .map(|(k, v)| (k.to_string(), v.to_string()))
  .collect();
  for (k, v) in overrides {
    vars.insert(k.to_string(), v.to_string());
  }
  AppConfig::from_lookup(|key| vars.get(key).cloned()).expect("test config should be valid")
}

pub fn session(user_id: &str, role: Role) -> Session {
  Session {
    user_id: user_id.to_string(),
    role,
    name: Some(format!("User {}", user_id)),
  }
}

pub fn owner() -> Session {
  session(OWNER_ID, Role::User)
}

pub fn admin() -> Session {
  session("ADMIN-1", Role::Admin)
}

pub fn stranger() -> Session {
  session("U2", Role::User)
}

/// Unpaid Stripe order of `OWNER_ID` with the given total.
pub fn stripe_order(id: &str, total: Decimal) -> Order {
  Order {
    id: id.to_string(),
    user_id: OWNER_ID.to_string(),
    user: OrderUser {
      name: "Mari Maasikas".to_string(),
      email: "mari@example.com".to_string(),
    },
    order_items: vec![OrderItem {
      product_id: "P1".to_string(),
      name: "Linden honey".to_string(),
      slug: "linden-honey".to_string(),
      image: "/images/honey.jpg".to_string(),
      qty: 1,
      price: total,
    }],
    shipping_address: ShippingAddress {
      full_name: "Mari Maasikas".to_string(),
      street_address: "Mere pst 1".to_string(),
      city: "Tallinn".to_string(),
      postal_code: "10111".to_string(),
      country: "Estonia".to_string(),
      phone_number: "+3725550000".to_string(),
      ..ShippingAddress::default()
    },
    payment_method: PaymentMethod::Stripe,
    payment_result: None,
    items_price: total,
    shipping_price: Decimal::ZERO,
    tax_price: Decimal::ZERO,
    total_price: total,
    is_paid: false,
    paid_at: None,
    is_shipped: false,
    shipped_at: None,
    is_delivered: false,
    delivered_at: None,
    created_at: Utc.with_ymd_and_hms(2026, 10, 1, 9, 30, 0).unwrap(),
  }
}

pub struct TestApp {
  pub state: AppState,
  pub gateway: Arc<MockPaymentGateway>,
  pub orders: Arc<InMemoryOrderStore>,
  pub sessions: Arc<InMemorySessionStore>,
}

pub fn test_app(orders: Vec<Order>) -> TestApp {
  test_app_with(orders, MockBehavior::Succeed, &[])
}

pub fn test_app_with(orders: Vec<Order>, behavior: MockBehavior, config_overrides: &[(&str, &str)]) -> TestApp {
  setup_tracing();
  let gateway = Arc::new(MockPaymentGateway::with_behavior(behavior));
  let orders = Arc::new(InMemoryOrderStore::with_orders(orders));
  let sessions = Arc::new(InMemorySessionStore::new());
  sessions.insert(OWNER_TOKEN, owner());
  sessions.insert(ADMIN_TOKEN, admin());
  sessions.insert(STRANGER_TOKEN, stranger());

  let state = AppState::new(
    Arc::new(test_config(config_overrides)),
    orders.clone(),
    sessions.clone(),
    gateway.clone(),
    Arc::new(Dictionaries::embedded().expect("embedded dictionaries parse")),
  );
  TestApp {
    state,
    gateway,
    orders,
    sessions,
  }
}
