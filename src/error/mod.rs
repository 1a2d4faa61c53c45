//! Error taxonomy and classification.
//!
//! This module defines the closed set of application error categories and
//! the rules that map arbitrary failure causes onto it. Classification is
//! pure and total: every cause lands in exactly one category, with
//! [`AppError::Generic`] as the universal fallback.

pub mod app_error;
pub mod classify;

// Re-export main types for convenient access
pub use app_error::{AppError, BoxError, ErrorMessage};
pub use classify::{classify, classify_with};
