// storefront/src/web/handlers/page_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::Local;
use tracing::instrument;

use crate::catalog::home_categories;
use crate::errors::AppError;
use crate::i18n::Locale;
use crate::pages::{DistanceContractPage, UnauthorizedPage};
use crate::state::AppState;

#[instrument(name = "handler::categories", skip(app_state))]
pub async fn categories_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let locale: Locale = path.into_inner().parse()?;
  let dict = app_state.dictionaries.get(locale);
  Ok(HttpResponse::Ok().json(home_categories(locale, &dict)))
}

#[instrument(name = "handler::distance_contract", skip(app_state))]
pub async fn distance_contract_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let locale: Locale = path.into_inner().parse()?;
  let dict = app_state.dictionaries.get(locale);
  let today = Local::now().date_naive();
  Ok(HttpResponse::Ok().json(DistanceContractPage::build(locale, &dict, &app_state.config, today)))
}

/// Target of the order page redirect. Answers 403 with the localized page.
#[instrument(name = "handler::unauthorized", skip(app_state))]
pub async fn unauthorized_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let locale: Locale = path.into_inner().parse()?;
  let dict = app_state.dictionaries.get(locale);
  Ok(HttpResponse::Forbidden().json(UnauthorizedPage::build(locale, &dict)))
}
