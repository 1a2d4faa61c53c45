//! opresult - explicit, classified operation results for fallible work.
//!
//! This crate replaces implicit error propagation at async boundaries with
//! an explicit, inspectable value. A unit of work either produces a value or
//! a classified [`error::AppError`], and callers compose further fallible
//! steps with the combinators on [`result::OperationResult`] instead of
//! matching at every call site.
//!
//! - [`result`] - the two-variant [`result::OperationResult`] container and
//!   its combinator algebra (map, and_then, recover, combine, async chaining)
//! - [`error`] - the closed [`error::AppError`] taxonomy and the
//!   [`error::classify`] function that maps raw failure causes onto it
//! - [`registry`] - process-wide, one-time-configurable classification
//!   override
//! - [`run`] - the async boundary wrapper that executes a unit of work,
//!   records the outcome, and always returns an `OperationResult`
//!
//! ```
//! use opresult::result::{combine, OperationResult};
//!
//! let total: OperationResult<&str, Vec<u32>> =
//!     combine([OperationResult::Success(1), OperationResult::Success(2)]);
//! assert_eq!(total, OperationResult::Success(vec![1, 2]));
//! ```

pub mod error;
pub mod registry;
pub mod result;
pub mod run;
