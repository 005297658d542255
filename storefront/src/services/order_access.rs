// storefront/src/services/order_access.rs

//! Who may look at an order.

use tracing::{info, instrument};

use super::order_store::OrderStore;
use crate::errors::{AppError, Result as AppResult};
use crate::models::{Order, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
  Owner,
  Admin,
  Denied,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAccess {
  Found(Order),
  NotFound,
  /// The order exists but the caller may not see it. Carries no order data.
  Unauthorized,
}

/// Owners see their own orders, admins see every order.
pub fn authorize(order: &Order, caller: Option<&Session>) -> AccessDecision {
  match caller {
    Some(session) if session.user_id == order.user_id => AccessDecision::Owner,
    Some(session) if session.is_admin() => AccessDecision::Admin,
    _ => AccessDecision::Denied,
  }
}

/// Looks the order up, then decides whether `caller` may view it.
#[instrument(skip(store, caller), fields(caller_id = caller.map(|s| s.user_id.as_str())))]
pub async fn resolve_order_access(
  store: &dyn OrderStore,
  order_id: &str,
  caller: Option<&Session>,
) -> AppResult<OrderAccess> {
  if order_id.trim().is_empty() {
    return Err(AppError::Validation("Order id must not be empty.".to_string()));
  }

  let Some(order) = store.get_order_by_id(order_id).await? else {
    info!("Order not found.");
    return Ok(OrderAccess::NotFound);
  };

  match authorize(&order, caller) {
    AccessDecision::Denied => {
      info!("Caller is neither the owner nor an admin.");
      Ok(OrderAccess::Unauthorized)
    }
    decision => {
      info!(?decision, "Order access granted.");
      Ok(OrderAccess::Found(order))
    }
  }
}
