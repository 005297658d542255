// storefront/src/pipelines/mod.rs

//! Defines and registers the pipelines used by the storefront.

use crate::errors::AppError;
use crate::state::AppState;
use prostore_flow::FlowRegistry;

pub mod contexts;
pub mod order_view_pipeline;

pub use order_view_pipeline::view_order;

/// Registers every pipeline with `flow_registry`. Called once while the
/// `AppState` is built.
pub fn register_all_pipelines(flow_registry: &FlowRegistry<AppError>, app_state: &AppState) {
  tracing::info!("Registering pipelines...");
  order_view_pipeline::register_order_view_pipeline(flow_registry, app_state);
  tracing::info!("All storefront pipelines registered.");
}
