// core/tests/common/mod.rs
#![allow(dead_code)]

use once_cell::sync::Lazy;
use prostore_flow::{ContextData, FlowError, Handler, PipelineControl};
use tracing::Level;

/// Trace of a simulated page request moving through the steps.
#[derive(Clone, Debug, Default)]
pub struct RequestTrace {
  pub hits: i32,
  pub trail: String,
  pub steps_executed: Vec<String>,
  pub stop_at: Option<String>,
  pub order_paid: bool,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Flow error: {0}")]
  Flow(String),

  #[error("Step failed: {0}")]
  Step(String),
}

impl From<FlowError> for TestError {
  fn from(fe: FlowError) -> Self {
    TestError::Flow(format!("{:?}", fe))
  }
}

pub fn recording_handler(step_name: &'static str, mark: &'static str) -> Handler<RequestTrace, TestError> {
  Box::new(move |ctx: ContextData<RequestTrace>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.hits += 1;
      guard.trail.push_str(mark);
      guard.steps_executed.push(step_name.to_string());
      tracing::debug!(target: "test_handlers", step = step_name, hits = guard.hits, "recorded");
      if guard.stop_at.as_deref() == Some(step_name) {
        return Ok(PipelineControl::Stop);
      }
      Ok(PipelineControl::Continue)
    })
  })
}

pub fn failing_handler(step_name: &'static str, message: &'static str) -> Handler<RequestTrace, TestError> {
  Box::new(move |ctx: ContextData<RequestTrace>| {
    Box::pin(async move {
      ctx.write().steps_executed.push(step_name.to_string());
      tracing::warn!(target: "test_handlers", step = step_name, "failing with '{}'", message);
      Err(TestError::Step(message.to_string()))
    })
  })
}

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
