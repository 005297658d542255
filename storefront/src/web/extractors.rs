// storefront/src/web/extractors.rs

use actix_web::http::header::AUTHORIZATION;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::Session;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session_token";

/// The caller behind the request, if any.
///
/// The token comes from the `session_token` cookie, else from an
/// `Authorization: Bearer` header. Unknown or expired tokens yield an
/// anonymous caller rather than an error.
#[derive(Debug, Clone)]
pub struct CallerSession(pub Option<Session>);

impl CallerSession {
  pub fn into_inner(self) -> Option<Session> {
    self.0
  }
}

fn session_token(req: &HttpRequest) -> Option<String> {
  if let Some(cookie) = req.cookie(SESSION_COOKIE) {
    let value = cookie.value().trim();
    if !value.is_empty() {
      return Some(value.to_string());
    }
  }
  req
    .headers()
    .get(AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .map(str::to_string)
}

impl FromRequest for CallerSession {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let token = session_token(req);
    let app_state = req.app_data::<web::Data<AppState>>().cloned();

    Box::pin(async move {
      let Some(token) = token else {
        return Ok(CallerSession(None));
      };
      let Some(app_state) = app_state else {
        warn!("CallerSession extractor: AppState is not registered as app data.");
        return Err(AppError::Internal("Application state unavailable.".to_string()));
      };

      let session = app_state.sessions.current_session(&token).await?;
      if session.is_none() {
        debug!("Session token did not match an active session; treating caller as anonymous.");
      }
      Ok(CallerSession(session))
    })
  }
}
