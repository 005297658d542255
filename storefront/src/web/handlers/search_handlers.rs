// storefront/src/web/handlers/search_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{debug, instrument};

use crate::catalog::{SearchPagePayload, SearchParams, SearchQuery};
use crate::errors::AppError;
use crate::i18n::Locale;
use crate::state::AppState;

#[instrument(name = "handler::search_page", skip(app_state, query), fields(lang = %path.as_str()))]
pub async fn search_page_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
  let locale: Locale = path.into_inner().parse()?;
  let params = SearchParams::from(query.into_inner());
  debug!(?params, "Building search page.");

  let dict = app_state.dictionaries.get(locale);
  let payload = SearchPagePayload::build(params, locale, &dict, &app_state.config);
  Ok(HttpResponse::Ok().json(payload))
}
