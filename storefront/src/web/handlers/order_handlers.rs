// storefront/src/web/handlers/order_handlers.rs

use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::i18n::Locale;
use crate::pipelines::contexts::OrderViewOutcome;
use crate::pipelines::view_order;
use crate::state::AppState;
use crate::web::extractors::CallerSession;

#[instrument(
    name = "handler::view_order",
    skip(app_state, path, caller),
    fields(lang = %path.0, order_id = %path.1)
)]
pub async fn view_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(String, String)>,
  caller: CallerSession,
) -> Result<HttpResponse, AppError> {
  let (lang, order_id) = path.into_inner();
  let locale: Locale = lang.parse()?;

  match view_order(app_state.get_ref(), &order_id, caller.into_inner(), locale).await? {
    OrderViewOutcome::Ready(payload) => {
      info!(
        "Serving order {} (payment intent attached: {}).",
        order_id,
        payload.stripe_client_secret.is_some()
      );
      Ok(HttpResponse::Ok().json(payload))
    }
    OrderViewOutcome::Unauthorized { redirect_to } => {
      warn!("Caller may not view order {}; redirecting.", order_id);
      Ok(HttpResponse::SeeOther().insert_header((LOCATION, redirect_to)).finish())
    }
    OrderViewOutcome::NotFound => Err(AppError::NotFound(format!("Order {} not found.", order_id))),
  }
}
