// core/src/pipeline/execution.rs

//! `Pipeline::run`: walks the steps in order and drives their handlers.

use crate::core::context_data::ContextData;
use crate::core::control::{PipelineControl, PipelineResult};
use crate::core::handler::Handler;
use crate::core::step::StepDef;
use crate::error::FlowError;
use crate::pipeline::definition::Pipeline;
use std::collections::HashMap;
use tracing::{event, instrument, span, Instrument, Level};

#[derive(Debug, Clone, Copy)]
enum Phase {
  Before,
  On,
  After,
}

impl Phase {
  fn as_str(self) -> &'static str {
    match self {
      Phase::Before => "before",
      Phase::On => "on",
      Phase::After => "after",
    }
  }
}

enum StepOutcome {
  Ran,
  Skipped,
  Stopped,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Executes every step against `ctx_data`.
  ///
  /// Stops early with `Ok(PipelineResult::Stopped)` when a handler returns
  /// `PipelineControl::Stop`, and with `Err` on the first handler failure.
  /// A required step without any handler fails with
  /// `FlowError::HandlerMissing` converted into `Err`.
  #[instrument(
    name = "Pipeline::run",
    skip_all,
    fields(
      context_type = %std::any::type_name::<TData>(),
      num_steps = self.steps.len(),
    ),
    err(Display)
  )]
  pub async fn run(&self, ctx_data: ContextData<TData>) -> Result<PipelineResult, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    for (step_index, step_def) in self.steps.iter().enumerate() {
      let step_span = span!(
        Level::INFO,
        "pipeline_step",
        step_name = step_def.name.as_str(),
        step_index,
        optional = step_def.optional
      );

      match self.run_step(step_def, &ctx_data).instrument(step_span).await? {
        StepOutcome::Ran | StepOutcome::Skipped => {}
        StepOutcome::Stopped => return Ok(PipelineResult::Stopped),
      }
    }

    event!(Level::DEBUG, "Pipeline execution completed.");
    Ok(PipelineResult::Completed)
  }

  async fn run_step(&self, step_def: &StepDef<TData>, ctx_data: &ContextData<TData>) -> Result<StepOutcome, Err> {
    let step_name = step_def.name.as_str();

    if let Some(skip_if) = &step_def.skip_if {
      if skip_if(ctx_data.clone()) {
        event!(Level::INFO, "Step skipped by its skip condition.");
        return Ok(StepOutcome::Skipped);
      }
    }

    let has_handlers = [&self.before, &self.on, &self.after]
      .iter()
      .any(|phase_map| phase_map.get(step_name).is_some_and(|v| !v.is_empty()));

    if !has_handlers {
      if step_def.optional {
        event!(Level::DEBUG, "Optional step has no handlers, skipping.");
        return Ok(StepOutcome::Skipped);
      }
      event!(Level::ERROR, "Required step has no handlers.");
      return Err(Err::from(FlowError::HandlerMissing {
        step_name: step_def.name.clone(),
      }));
    }

    for phase in [Phase::Before, Phase::On, Phase::After] {
      if Self::run_phase(self.handlers_for(phase), phase, step_name, ctx_data).await? == PipelineControl::Stop {
        return Ok(StepOutcome::Stopped);
      }
    }

    event!(Level::DEBUG, "Step finished.");
    Ok(StepOutcome::Ran)
  }

  fn handlers_for(&self, phase: Phase) -> &HashMap<String, Vec<Handler<TData, Err>>> {
    match phase {
      Phase::Before => &self.before,
      Phase::On => &self.on,
      Phase::After => &self.after,
    }
  }

  async fn run_phase(
    phase_map: &HashMap<String, Vec<Handler<TData, Err>>>,
    phase: Phase,
    step_name: &str,
    ctx_data: &ContextData<TData>,
  ) -> Result<PipelineControl, Err> {
    let Some(handlers) = phase_map.get(step_name) else {
      return Ok(PipelineControl::Continue);
    };

    for (handler_index, handler_fn) in handlers.iter().enumerate() {
      let handler_span = span!(Level::DEBUG, "step_handler", phase = phase.as_str(), handler_index);
      match handler_fn(ctx_data.clone()).instrument(handler_span).await {
        Ok(PipelineControl::Continue) => {}
        Ok(PipelineControl::Stop) => {
          event!(Level::INFO, phase = phase.as_str(), "Pipeline stopped by a handler.");
          return Ok(PipelineControl::Stop);
        }
        Err(e) => {
          event!(Level::ERROR, phase = phase.as_str(), error = %e, "Handler failed.");
          return Err(e);
        }
      }
    }

    Ok(PipelineControl::Continue)
  }
}
