// core/tests/context_management_tests.rs
mod common;

use common::*;
use prostore_flow::{ContextData, Pipeline, PipelineControl};
use serial_test::serial;
use std::time::Duration;

#[tokio::test]
#[serial]
async fn later_steps_see_earlier_writes() {
  setup_tracing();
  let mut pipeline = Pipeline::<RequestTrace, TestError>::new(&[("load", false, None), ("use", false, None)]);

  pipeline.on_step("load", |ctx: ContextData<RequestTrace>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.hits = 10;
      guard.trail = "loaded".to_string();
      Ok::<_, TestError>(PipelineControl::Continue)
    })
  });
  pipeline.on_step("use", |ctx: ContextData<RequestTrace>| {
    Box::pin(async move {
      let hits = ctx.read().hits;
      // Guard released before suspending.
      tokio::time::sleep(Duration::from_millis(5)).await;
      let mut guard = ctx.write();
      guard.hits = hits * 2;
      guard.trail.push_str("+used");
      Ok::<_, TestError>(PipelineControl::Continue)
    })
  });

  let ctx = ContextData::new(RequestTrace::default());
  pipeline.run(ctx.clone()).await.unwrap();

  let guard = ctx.read();
  assert_eq!(guard.hits, 20);
  assert_eq!(guard.trail, "loaded+used");
}

#[tokio::test]
#[serial]
async fn data_can_be_taken_back_after_run() {
  setup_tracing();
  let mut pipeline = Pipeline::<RequestTrace, TestError>::new(&[("load", false, None)]);
  pipeline.on_step("load", recording_handler("load", "L"));

  let ctx = ContextData::new(RequestTrace::default());
  pipeline.run(ctx.clone()).await.unwrap();

  let extra = ctx.clone();
  let ctx = ctx.try_into_inner().expect_err("a clone is still alive");
  drop(extra);
  let trace = ctx.try_into_inner().expect("sole owner");
  assert_eq!(trace.trail, "L");
}
