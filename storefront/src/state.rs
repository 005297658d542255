// storefront/src/state.rs
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::i18n::Dictionaries;
use crate::pipelines;
use crate::services::{OrderStore, PaymentGateway, PaymentIntentInitiator, SessionProvider};
use prostore_flow::FlowRegistry;
use std::sync::Arc;

/// Read-mostly state shared by every request.
#[derive(Clone)]
pub struct AppState {
  pub orders: Arc<dyn OrderStore>,
  pub sessions: Arc<dyn SessionProvider>,
  pub payment_intents: Arc<PaymentIntentInitiator>,
  pub dictionaries: Arc<Dictionaries>,
  pub flow_registry: Arc<FlowRegistry<AppError>>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  /// Wires the collaborators together and registers every pipeline.
  pub fn new(
    config: Arc<AppConfig>,
    orders: Arc<dyn OrderStore>,
    sessions: Arc<dyn SessionProvider>,
    gateway: Arc<dyn PaymentGateway>,
    dictionaries: Arc<Dictionaries>,
  ) -> Self {
    let payment_intents = Arc::new(PaymentIntentInitiator::new(
      gateway,
      config.store_currency.clone(),
      config.payment_gateway_timeout,
    ));
    let app_state = AppState {
      orders,
      sessions,
      payment_intents,
      dictionaries,
      flow_registry: Arc::new(FlowRegistry::new()),
      config,
    };
    pipelines::register_all_pipelines(&app_state.flow_registry, &app_state);
    app_state
  }
}
