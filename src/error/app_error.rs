//! The application error taxonomy.
//!
//! `AppError` is a closed set of error categories, each carrying a
//! human-readable message. The category names returned by
//! [`AppError::category`] are stable and may be relied on by other layers;
//! everything else about a variant is free to evolve.

use thiserror::Error;

/// Boxed failure cause accepted by the classifier.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Capability trait for error types that expose a human-readable message.
///
/// [`OperationResult`](crate::result::OperationResult) is generic over any
/// error type implementing this trait, so applications can plug in their own
/// taxonomy without going through `AppError`.
pub trait ErrorMessage {
    /// Returns the human-readable message for this error.
    fn message(&self) -> &str;
}

/// A classified application error.
///
/// Construct variants through the associated functions ([`AppError::timeout`]
/// and friends) rather than the variant literals: the constructors substitute
/// the per-category default message when handed an empty one, so every value
/// carries a non-empty message.
#[derive(Debug, Error)]
pub enum AppError {
    /// The operation exceeded its time budget.
    #[error("{0}")]
    Timeout(String),

    /// The remote host could not be resolved or reached.
    #[error("{0}")]
    NoConnectivity(String),

    /// The server reported a failure on its side.
    #[error("{0}")]
    Server(String),

    /// A network-level I/O failure not covered by a more specific category.
    #[error("{0}")]
    Network(String),

    /// The peer delivered data that violates the expected shape.
    #[error("{0}")]
    InvalidData(String),

    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The caller could not be authenticated.
    #[error("{0}")]
    Authentication(String),

    /// The caller is authenticated but not allowed to do this.
    #[error("{0}")]
    PermissionDenied(String),

    /// Structured data could not be parsed.
    #[error("{0}")]
    Parsing(String),

    /// Any failure not covered by the other categories. Retains the original
    /// cause for diagnostics; the cause is exclusively owned by this value.
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        cause: BoxError,
    },
}

mod defaults {
    pub const TIMEOUT: &str = "Request timed out";
    pub const NO_CONNECTIVITY: &str = "No network connectivity";
    pub const SERVER: &str = "Server error";
    pub const NETWORK: &str = "Network error";
    pub const INVALID_DATA: &str = "Received invalid data";
    pub const NOT_FOUND: &str = "Resource not found";
    pub const AUTHENTICATION: &str = "Authentication failed";
    pub const PERMISSION_DENIED: &str = "Permission denied";
    pub const PARSING: &str = "Failed to parse structured data";
    pub const GENERIC: &str = "An unknown error occurred";
}

impl AppError {
    /// Creates a [`AppError::Timeout`] error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(non_empty(message.into(), defaults::TIMEOUT))
    }

    /// Creates a [`AppError::NoConnectivity`] error.
    pub fn no_connectivity(message: impl Into<String>) -> Self {
        Self::NoConnectivity(non_empty(message.into(), defaults::NO_CONNECTIVITY))
    }

    /// Creates a [`AppError::Server`] error.
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(non_empty(message.into(), defaults::SERVER))
    }

    /// Creates a [`AppError::Network`] error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(non_empty(message.into(), defaults::NETWORK))
    }

    /// Creates a [`AppError::InvalidData`] error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(non_empty(message.into(), defaults::INVALID_DATA))
    }

    /// Creates a [`AppError::NotFound`] error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(non_empty(message.into(), defaults::NOT_FOUND))
    }

    /// Creates a [`AppError::Authentication`] error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(non_empty(message.into(), defaults::AUTHENTICATION))
    }

    /// Creates a [`AppError::PermissionDenied`] error.
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied(non_empty(message.into(), defaults::PERMISSION_DENIED))
    }

    /// Creates a [`AppError::Parsing`] error.
    pub fn parsing(message: impl Into<String>) -> Self {
        Self::Parsing(non_empty(message.into(), defaults::PARSING))
    }

    /// Creates a [`AppError::Generic`] error, taking ownership of the cause.
    ///
    /// The message is the cause's display output, or the generic default
    /// when the cause renders to nothing.
    pub fn generic(cause: BoxError) -> Self {
        let message = non_empty(cause.to_string(), defaults::GENERIC);
        Self::Generic { message, cause }
    }

    /// Returns the stable category name for this error.
    ///
    /// These names are the wire contract other layers may depend on.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Timeout(_) => "Timeout",
            Self::NoConnectivity(_) => "NoConnectivity",
            Self::Server(_) => "Server",
            Self::Network(_) => "Network",
            Self::InvalidData(_) => "InvalidData",
            Self::NotFound(_) => "NotFound",
            Self::Authentication(_) => "Authentication",
            Self::PermissionDenied(_) => "PermissionDenied",
            Self::Parsing(_) => "Parsing",
            Self::Generic { .. } => "Generic",
        }
    }
}

impl ErrorMessage for AppError {
    fn message(&self) -> &str {
        match self {
            Self::Timeout(message)
            | Self::NoConnectivity(message)
            | Self::Server(message)
            | Self::Network(message)
            | Self::InvalidData(message)
            | Self::NotFound(message)
            | Self::Authentication(message)
            | Self::PermissionDenied(message)
            | Self::Parsing(message) => message,
            Self::Generic { message, .. } => message,
        }
    }
}

fn non_empty(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Silent;

    impl std::fmt::Display for Silent {
        fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Ok(())
        }
    }

    impl std::error::Error for Silent {}

    #[test]
    fn test_constructor_keeps_message() {
        let error = AppError::timeout("deadline of 5s exceeded");
        assert_eq!(error.message(), "deadline of 5s exceeded");
    }

    #[test]
    fn test_constructor_falls_back_on_empty_message() {
        let error = AppError::timeout("");
        assert_eq!(error.message(), "Request timed out");

        let error = AppError::not_found("   ");
        assert_eq!(error.message(), "Resource not found");
    }

    #[test]
    fn test_generic_retains_cause_and_defaults_message() {
        let error = AppError::generic(Box::new(Silent));
        assert_eq!(error.message(), "An unknown error occurred");

        let AppError::Generic { cause, .. } = error else {
            panic!("expected a generic error");
        };
        assert!(cause.is::<Silent>());
    }

    #[test]
    fn test_display_matches_message() {
        let error = AppError::server("503 from upstream");
        assert_eq!(error.to_string(), "503 from upstream");
    }

    #[test]
    fn test_generic_exposes_cause_as_source() {
        let io_error = std::io::Error::other("backing store gone");
        let error = AppError::generic(Box::new(io_error));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_category_names_are_stable() {
        assert_eq!(AppError::timeout("t").category(), "Timeout");
        assert_eq!(AppError::no_connectivity("n").category(), "NoConnectivity");
        assert_eq!(AppError::server("s").category(), "Server");
        assert_eq!(AppError::network("n").category(), "Network");
        assert_eq!(AppError::invalid_data("i").category(), "InvalidData");
        assert_eq!(AppError::not_found("n").category(), "NotFound");
        assert_eq!(AppError::authentication("a").category(), "Authentication");
        assert_eq!(
            AppError::permission_denied("p").category(),
            "PermissionDenied"
        );
        assert_eq!(AppError::parsing("p").category(), "Parsing");
        assert_eq!(
            AppError::generic(Box::new(Silent)).category(),
            "Generic"
        );
    }
}
