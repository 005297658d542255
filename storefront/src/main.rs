// storefront/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use storefront::config::{AppConfig, GatewayKind};
use storefront::i18n::Dictionaries;
use storefront::services::{MockPaymentGateway, PaymentGateway, PgOrderStore, PgSessionStore, StripeGateway};
use storefront::state::AppState;
use storefront::web::configure_app_routes;

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let json = std::env::var("LOG_FORMAT").map(|v| v.eq_ignore_ascii_case("json")).unwrap_or(false);

  if json {
    tracing_subscriber::fmt()
      .json()
      .with_env_filter(filter)
      .with_span_events(FmtSpan::CLOSE)
      .init();
  } else {
    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
      .init();
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  init_tracing();
  tracing::info!("Starting Prostore storefront server...");

  let app_config = AppConfig::from_env()
    .map(Arc::new)
    .inspect_err(|e| tracing::error!(error = %e, "Failed to load application configuration."))?;

  let db_pool = PgPool::connect(&app_config.database_url)
    .await
    .inspect_err(|e| tracing::error!(error = %e, "Failed to connect to the database."))
    .context("database connection")?;
  tracing::info!("Successfully connected to the database.");

  let gateway: Arc<dyn PaymentGateway> = match app_config.payment_gateway {
    GatewayKind::Stripe => {
      let key = app_config
        .stripe_secret_key
        .as_ref()
        .context("STRIPE_SECRET_KEY is required for the Stripe gateway")?;
      let key = SecretString::from(key.expose_secret().to_owned());
      Arc::new(StripeGateway::new(&app_config.stripe_api_base, key)?)
    }
    GatewayKind::Mock => {
      tracing::warn!("Using the in-process mock payment gateway.");
      Arc::new(MockPaymentGateway::new())
    }
  };

  let app_state = AppState::new(
    app_config.clone(),
    Arc::new(PgOrderStore::new(db_pool.clone())),
    Arc::new(PgSessionStore::new(db_pool)),
    gateway,
    Arc::new(Dictionaries::embedded()?),
  );
  tracing::info!("Pipelines registered.");

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await?;

  Ok(())
}
