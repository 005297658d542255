// storefront/src/services/session.rs

use async_trait::async_trait;
use parking_lot::RwLock;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use tracing::{error, instrument};
use uuid::Uuid;

use crate::errors::{AppError, Result as AppResult};
use crate::models::{Role, Session};

/// Resolves a session token to the caller behind it.
#[async_trait]
pub trait SessionProvider: Send + Sync {
  /// `Ok(None)` for unknown or expired tokens.
  async fn current_session(&self, token: &str) -> AppResult<Option<Session>>;
}

#[derive(Debug, FromRow)]
struct SessionRow {
  user_id: Uuid,
  role: String,
  name: Option<String>,
}

#[derive(Clone)]
pub struct PgSessionStore {
  db_pool: PgPool,
}

impl PgSessionStore {
  pub fn new(db_pool: PgPool) -> Self {
    Self { db_pool }
  }
}

#[async_trait]
impl SessionProvider for PgSessionStore {
  #[instrument(name = "PgSessionStore::current_session", skip_all)]
  async fn current_session(&self, token: &str) -> AppResult<Option<Session>> {
    let row: Option<SessionRow> = sqlx::query_as(
      "SELECT u.id AS user_id, u.role, u.name FROM sessions s JOIN users u ON u.id = s.user_id \
       WHERE s.session_token = $1 AND s.expires > now()",
    )
    .bind(token)
    .fetch_optional(&self.db_pool)
    .await
    .map_err(|e| {
      error!("Failed to look up session: {}", e);
      AppError::Sqlx(e)
    })?;

    Ok(row.map(|row| Session {
      user_id: row.user_id.to_string(),
      role: Role::parse(&row.role),
      name: row.name,
    }))
  }
}

/// Token to session map for tests and local demos.
#[derive(Default)]
pub struct InMemorySessionStore {
  sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&self, token: impl Into<String>, session: Session) {
    self.sessions.write().insert(token.into(), session);
  }
}

#[async_trait]
impl SessionProvider for InMemorySessionStore {
  async fn current_session(&self, token: &str) -> AppResult<Option<Session>> {
    Ok(self.sessions.read().get(token).cloned())
  }
}
