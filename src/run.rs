//! Async boundary wrapper.
//!
//! [`run_classified`] executes a unit of work, emits one observability
//! record describing the outcome, classifies any failure, and hands the
//! caller an [`OperationResult`]. Nothing is re-raised past this boundary:
//! even a panic inside the work unit comes back as a `Failure`.
//!
//! The wrapper returns a plain future; the executor the caller awaits it on
//! is the worker context. Dropping the future before completion cancels the
//! work with it, and no record is emitted for cancelled work.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::debug;

use crate::error::{BoxError, ErrorMessage};
use crate::registry::classify_with_registry;
use crate::result::{AppResult, OperationResult};

/// Tag attached to success records.
pub const SUCCESS_TAG: &str = "work.success";

/// Tag attached to failure records.
pub const FAILURE_TAG: &str = "work.failure";

/// Fire-and-forget sink for outcome records.
///
/// Exactly one record is emitted per completed work unit. Implementations
/// must not block or panic.
pub trait RecordSink {
    /// Records one outcome line.
    fn record(&self, tag: &str, message: &str);
}

/// The default sink, backed by `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RecordSink for TracingSink {
    fn record(&self, tag: &str, message: &str) {
        debug!(target: "opresult", "{tag}: {message}");
    }
}

/// Runs a unit of work with an explicit classification handler and record
/// sink.
///
/// Awaits the future produced by `work`, emits exactly one record (the
/// debug form of the value on success, the cause's message on failure), and
/// returns the outcome. Failures, including panics inside the work unit,
/// are converted through `handler`; the caller always receives an
/// [`OperationResult`].
pub async fn run_observed<V, E, F, Fut, H, S>(
    work: F,
    handler: H,
    sink: &S,
) -> OperationResult<E, V>
where
    V: fmt::Debug,
    E: ErrorMessage,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, BoxError>>,
    H: FnOnce(BoxError) -> E,
    S: RecordSink + ?Sized,
{
    let guarded = AssertUnwindSafe(async move { work().await }).catch_unwind();
    match guarded.await {
        Ok(Ok(value)) => {
            sink.record(SUCCESS_TAG, &format!("{value:?}"));
            OperationResult::Success(value)
        }
        Ok(Err(cause)) => {
            sink.record(FAILURE_TAG, &cause.to_string());
            OperationResult::Failure(handler(cause))
        }
        Err(payload) => {
            let cause: BoxError = Box::new(WorkPanicked::from_payload(payload));
            sink.record(FAILURE_TAG, &cause.to_string());
            OperationResult::Failure(handler(cause))
        }
    }
}

/// Runs a unit of work with a custom classification handler and the default
/// tracing sink.
pub async fn run_classified_with<V, E, F, Fut, H>(work: F, handler: H) -> OperationResult<E, V>
where
    V: fmt::Debug,
    E: ErrorMessage,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, BoxError>>,
    H: FnOnce(BoxError) -> E,
{
    run_observed(work, handler, &TracingSink).await
}

/// Runs a unit of work, classifying failures through the global registry.
///
/// The registry's override applies when one is installed; otherwise the
/// default rules do. An explicit handler passed to [`run_classified_with`]
/// takes precedence over both.
pub async fn run_classified<V, F, Fut>(work: F) -> AppResult<V>
where
    V: fmt::Debug,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, BoxError>>,
{
    run_observed(work, classify_with_registry, &TracingSink).await
}

/// Failure cause standing in for a panic inside the work unit.
#[derive(Debug)]
struct WorkPanicked {
    message: String,
}

impl WorkPanicked {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "opaque panic payload".to_string()
        };
        Self { message }
    }
}

impl fmt::Display for WorkPanicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "work unit panicked: {}", self.message)
    }
}

impl std::error::Error for WorkPanicked {}
