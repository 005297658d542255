// core/src/lib.rs

//! Step pipelines for the Prostore storefront.
//!
//! A request flow (look up an order, check who is asking, talk to the payment
//! gateway, hand a payload to the web layer) is declared as a [`Pipeline`]:
//!  - an ordered list of named steps, each optionally skippable or optional;
//!  - async `before` / `on` / `after` handlers per step, all sharing one
//!    [`ContextData`] value;
//!  - handlers return [`PipelineControl::Stop`] to end the flow early, which the
//!    caller observes as [`PipelineResult::Stopped`];
//!  - a [`FlowRegistry`] keyed by context type, so the web layer can run
//!    "the pipeline for this context" without naming it.

pub mod core;
pub mod error;
pub mod pipeline;
pub mod registry;

pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::handler::Handler;
pub use crate::core::step::{SkipCondition, StepDef};

pub use crate::pipeline::definition::Pipeline;

pub use crate::error::{FlowError, FlowResult};

pub use crate::registry::FlowRegistry;
