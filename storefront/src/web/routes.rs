// storefront/src/web/routes.rs

use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse};

use crate::state::AppState;
use crate::web::handlers::{order_handlers, page_handlers, search_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// `/` sends visitors to the home categories of the default locale.
async fn root_redirect_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Found()
    .insert_header((LOCATION, format!("/{}/categories", app_state.config.default_locale)))
    .finish()
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .route("/", web::get().to(root_redirect_handler))
    .service(
      web::scope("/{lang}")
        .route("/order/{id}", web::get().to(order_handlers::view_order_handler))
        .route("/search", web::get().to(search_handlers::search_page_handler))
        .route("/categories", web::get().to(page_handlers::categories_handler))
        .route("/distance-contract", web::get().to(page_handlers::distance_contract_handler))
        .route("/unauthorized", web::get().to(page_handlers::unauthorized_handler)),
    );
}
