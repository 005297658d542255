// storefront/src/pipelines/order_view_pipeline.rs

//! Order page: resolve access, create a payment intent when one is needed,
//! then hand the page payload to the web layer.

use crate::errors::AppError;
use crate::i18n::Locale;
use crate::models::Session;
use crate::pages::PageMeta;
use crate::pipelines::contexts::{OrderPagePayload, OrderViewCtxData, OrderViewOutcome};
use crate::services::{resolve_order_access, OrderAccess};
use crate::state::AppState;
use prostore_flow::{ContextData, FlowRegistry, Pipeline, PipelineControl, PipelineResult};
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub const RESOLVE_ORDER_ACCESS: &str = "resolve_order_access";
pub const INITIATE_PAYMENT_INTENT: &str = "initiate_payment_intent";
pub const PREPARE_ORDER_PAGE: &str = "prepare_order_page";

pub fn register_order_view_pipeline(flow_registry: &FlowRegistry<AppError>, _app_state: &AppState) {
  let mut p = Pipeline::<OrderViewCtxData, AppError>::new(&[
    (RESOLVE_ORDER_ACCESS, false, None),
    (
      INITIATE_PAYMENT_INTENT,
      false,
      Some(Arc::new(|ctx_data: ContextData<OrderViewCtxData>| {
        let guard = ctx_data.read();
        let needs_intent = guard
          .order
          .as_ref()
          .is_some_and(|order| guard.app_state.payment_intents.requires_payment_intent(order));
        !needs_intent
      })),
    ),
    (PREPARE_ORDER_PAGE, false, None),
  ]);

  // Step 1: lookup, then authorization. Both terminal outcomes stop the run.
  p.on_step(RESOLVE_ORDER_ACCESS, |ctx_data: ContextData<OrderViewCtxData>| {
    Box::pin(async move {
      let (store, order_id, caller, locale) = {
        let guard = ctx_data.read();
        (
          Arc::clone(&guard.app_state.orders),
          guard.order_id.clone(),
          guard.caller.clone(),
          guard.locale,
        )
      };

      let access = resolve_order_access(store.as_ref(), &order_id, caller.as_ref()).await?;

      let mut guard = ctx_data.write();
      match access {
        OrderAccess::Found(order) => {
          guard.order = Some(order);
          Ok::<_, AppError>(PipelineControl::Continue)
        }
        OrderAccess::NotFound => {
          guard.outcome = Some(OrderViewOutcome::NotFound);
          Ok(PipelineControl::Stop)
        }
        OrderAccess::Unauthorized => {
          guard.outcome = Some(OrderViewOutcome::Unauthorized {
            redirect_to: format!("/{}/unauthorized", locale),
          });
          Ok(PipelineControl::Stop)
        }
      }
    })
  });

  // Step 2: runs only for unpaid Stripe orders (see the skip condition above).
  p.on_step(INITIATE_PAYMENT_INTENT, |ctx_data: ContextData<OrderViewCtxData>| {
    Box::pin(async move {
      let (initiator, order) = {
        let guard = ctx_data.read();
        (Arc::clone(&guard.app_state.payment_intents), guard.order.clone())
      };
      let Some(order) = order else {
        return Err(AppError::Internal("Order missing before payment intent creation.".to_string()));
      };

      let secret = initiator.initiate(&order).await?;
      debug!(order_id = %order.id, has_secret = secret.is_some(), "Payment intent step finished.");
      ctx_data.write().stripe_client_secret = secret;
      Ok(PipelineControl::Continue)
    })
  });

  // Step 3: presentation handoff.
  p.on_step(PREPARE_ORDER_PAGE, |ctx_data: ContextData<OrderViewCtxData>| {
    Box::pin(async move {
      let mut guard = ctx_data.write();
      let Some(order) = guard.order.take() else {
        return Err(AppError::Internal("Order missing when preparing the order page.".to_string()));
      };

      let config = Arc::clone(&guard.app_state.config);
      let dict = guard.app_state.dictionaries.get(guard.locale);
      let locale = guard.locale;
      let payload = OrderPagePayload {
        stripe_client_secret: guard.stripe_client_secret.as_ref().map(|s| s.expose().to_string()),
        paypal_client_id: config.paypal_client_id.clone(),
        is_admin: guard.caller.as_ref().is_some_and(Session::is_admin),
        lang: locale,
        dict: dict.order.clone(),
        meta: PageMeta::new(
          dict.order.meta.title.clone(),
          Some(dict.order.meta.description.clone()),
          &config,
          &format!("/{}/order/{}", locale, order.id),
        ),
        delivery_price: order.shipping_address.delivery_method.price(),
        order,
      };
      guard.outcome = Some(OrderViewOutcome::Ready(Box::new(payload)));
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  flow_registry.register_pipeline(p);
}

/// Runs the order page pipeline and returns how it ended.
#[instrument(name = "pipeline::view_order", skip(app_state, caller), fields(caller_id = caller.as_ref().map(|s| s.user_id.as_str())))]
pub async fn view_order(
  app_state: &AppState,
  order_id: &str,
  caller: Option<Session>,
  locale: Locale,
) -> Result<OrderViewOutcome, AppError> {
  let ctx_data = ContextData::new(OrderViewCtxData::new(app_state.clone(), order_id, caller, locale));

  let result = app_state.flow_registry.run(ctx_data.clone()).await?;
  let outcome = ctx_data.write().outcome.take();
  match (result, outcome) {
    (PipelineResult::Completed, Some(outcome @ OrderViewOutcome::Ready(_))) => {
      info!("Order page ready.");
      Ok(outcome)
    }
    (PipelineResult::Stopped, Some(outcome)) => {
      info!(?outcome, "Order page flow stopped early.");
      Ok(outcome)
    }
    (result, outcome) => Err(AppError::Internal(format!(
      "Order page flow ended as {:?} with outcome {:?}.",
      result, outcome
    ))),
  }
}
