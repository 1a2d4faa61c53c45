//! Conversions between `std::result::Result` and [`OperationResult`].

use crate::error::{classify, BoxError};
use crate::result::{AppResult, OperationResult};

impl<E, V> From<Result<V, E>> for OperationResult<E, V> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

/// Extension trait converting a `std::result::Result` into an
/// [`OperationResult`] with a classified error side.
pub trait IntoOperationResult<V> {
    /// Converts the error side through the default classification rules.
    fn into_classified(self) -> AppResult<V>;

    /// Converts the error side through a caller-supplied handler, which
    /// fully shadows the default rules.
    fn into_classified_with<E, H>(self, handler: H) -> OperationResult<E, V>
    where
        H: FnOnce(BoxError) -> E;
}

impl<V, C> IntoOperationResult<V> for Result<V, C>
where
    C: Into<BoxError>,
{
    fn into_classified(self) -> AppResult<V> {
        match self {
            Ok(value) => OperationResult::Success(value),
            Err(cause) => OperationResult::Failure(classify(cause.into())),
        }
    }

    fn into_classified_with<E, H>(self, handler: H) -> OperationResult<E, V>
    where
        H: FnOnce(BoxError) -> E,
    {
        match self {
            Ok(value) => OperationResult::Success(value),
            Err(cause) => OperationResult::Failure(handler(cause.into())),
        }
    }
}
