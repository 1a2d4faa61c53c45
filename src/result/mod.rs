//! Explicit success/failure results and their combinator algebra.
//!
//! [`OperationResult`] holds either a computed value or a classified error.
//! Where its surface overlaps with [`std::result::Result`] the method names
//! match (`ok`, `err`, `map`, `map_err`, `and_then`, `unwrap_or`), so the
//! type reads like the std type it shadows; the rest of the algebra
//! (`fold`, `recover`, `filter_or_else`, [`combine`], async chaining) is
//! specific to classified results.

pub mod combinators;
pub mod convert;
pub mod operation_result;

// Re-export main types for convenient access
pub use combinators::combine;
pub use convert::IntoOperationResult;
pub use operation_result::OperationResult;

use crate::error::AppError;

/// An operation result specialized to the application error taxonomy.
pub type AppResult<V> = OperationResult<AppError, V>;
