// core/src/core/handler.rs
use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use std::future::Future;
use std::pin::Pin;

/// A boxed async step handler.
///
/// It owns a clone of the run's [`ContextData`], locks it as needed (dropping
/// guards before awaiting) and resolves to a [`PipelineControl`] or the
/// pipeline's error type `Err`.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;
