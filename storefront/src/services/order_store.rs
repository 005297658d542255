// storefront/src/services/order_store.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use tracing::{debug, error, instrument};
use uuid::Uuid;

use crate::errors::{AppError, Result as AppResult};
use crate::models::{Order, OrderItem, OrderUser, PaymentMethod, PaymentResult, ShippingAddress};

/// Read access to persisted orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
  /// `Ok(None)` when no order has this id.
  async fn get_order_by_id(&self, order_id: &str) -> AppResult<Option<Order>>;
}

#[derive(Debug, FromRow)]
struct OrderRow {
  id: Uuid,
  user_id: Uuid,
  user_name: String,
  user_email: String,
  shipping_address: Json<serde_json::Value>,
  payment_method: String,
  payment_result: Option<Json<PaymentResult>>,
  items_price: Decimal,
  shipping_price: Decimal,
  tax_price: Decimal,
  total_price: Decimal,
  is_paid: bool,
  paid_at: Option<DateTime<Utc>>,
  is_shipped: bool,
  shipped_at: Option<DateTime<Utc>>,
  is_delivered: bool,
  delivered_at: Option<DateTime<Utc>>,
  created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct OrderItemRow {
  product_id: Uuid,
  name: String,
  slug: String,
  image: String,
  qty: i32,
  price: Decimal,
}

impl OrderRow {
  fn into_order(self, items: Vec<OrderItemRow>) -> Order {
    Order {
      id: self.id.to_string(),
      user_id: self.user_id.to_string(),
      user: OrderUser {
        name: self.user_name,
        email: self.user_email,
      },
      order_items: items
        .into_iter()
        .map(|item| OrderItem {
          product_id: item.product_id.to_string(),
          name: item.name,
          slug: item.slug,
          image: item.image,
          qty: item.qty,
          price: item.price,
        })
        .collect(),
      shipping_address: ShippingAddress::normalize(&self.shipping_address.0),
      payment_method: PaymentMethod::from(self.payment_method),
      payment_result: self.payment_result.map(|json| json.0),
      items_price: self.items_price,
      shipping_price: self.shipping_price,
      tax_price: self.tax_price,
      total_price: self.total_price,
      is_paid: self.is_paid,
      paid_at: self.paid_at,
      is_shipped: self.is_shipped,
      shipped_at: self.shipped_at,
      is_delivered: self.is_delivered,
      delivered_at: self.delivered_at,
      created_at: self.created_at,
    }
  }
}

/// Orders in Postgres, see `schema.sql`.
#[derive(Clone)]
pub struct PgOrderStore {
  db_pool: PgPool,
}

impl PgOrderStore {
  pub fn new(db_pool: PgPool) -> Self {
    Self { db_pool }
  }
}

#[async_trait]
impl OrderStore for PgOrderStore {
  #[instrument(name = "PgOrderStore::get_order_by_id", skip(self))]
  async fn get_order_by_id(&self, order_id: &str) -> AppResult<Option<Order>> {
    // Ids are UUIDs in the database, so anything else cannot match a row.
    let Ok(order_uuid) = Uuid::parse_str(order_id) else {
      debug!("Order id is not a UUID, treating as not found.");
      return Ok(None);
    };

    let row: Option<OrderRow> = sqlx::query_as(
      "SELECT o.id, o.user_id, u.name AS user_name, u.email AS user_email, o.shipping_address, \
       o.payment_method, o.payment_result, o.items_price, o.shipping_price, o.tax_price, o.total_price, \
       o.is_paid, o.paid_at, o.is_shipped, o.shipped_at, o.is_delivered, o.delivered_at, o.created_at \
       FROM orders o JOIN users u ON u.id = o.user_id WHERE o.id = $1",
    )
    .bind(order_uuid)
    .fetch_optional(&self.db_pool)
    .await
    .map_err(|e| {
      error!("Failed to fetch order {}: {}", order_id, e);
      AppError::Sqlx(e)
    })?;

    let Some(row) = row else {
      return Ok(None);
    };

    let items: Vec<OrderItemRow> = sqlx::query_as(
      "SELECT product_id, name, slug, image, qty, price FROM order_items WHERE order_id = $1 ORDER BY name ASC",
    )
    .bind(order_uuid)
    .fetch_all(&self.db_pool)
    .await
    .map_err(|e| {
      error!("Failed to fetch items of order {}: {}", order_id, e);
      AppError::Sqlx(e)
    })?;

    let order = row.into_order(items);
    order.ensure_consistent()?;
    Ok(Some(order))
  }
}

/// Orders held in memory, keyed by id. Used by the tests and local demos.
#[derive(Default)]
pub struct InMemoryOrderStore {
  orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
    let store = Self::new();
    for order in orders {
      store.insert(order);
    }
    store
  }

  pub fn insert(&self, order: Order) {
    self.orders.write().insert(order.id.clone(), order);
  }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
  async fn get_order_by_id(&self, order_id: &str) -> AppResult<Option<Order>> {
    let order = self.orders.read().get(order_id).cloned();
    match order {
      Some(order) => {
        order.ensure_consistent()?;
        Ok(Some(order))
      }
      None => Ok(None),
    }
  }
}
