//! Default classification rules.
//!
//! [`classify`] maps an arbitrary boxed failure cause onto the [`AppError`]
//! taxonomy by testing the cause's runtime type against a fixed list of
//! rules. The first matching rule wins; anything unrecognized lands in
//! [`AppError::Generic`], which keeps the function total.

use std::io;

use tokio::time::error::Elapsed;

use super::app_error::{AppError, BoxError};

/// Classifies a failure cause into the [`AppError`] taxonomy.
///
/// Rules, in priority order (first match wins):
///
/// 1. `tokio` deadline expiry -> [`AppError::Timeout`]
/// 2. [`std::io::Error`], by kind: timeouts, unreachable hosts and networks,
///    invalid data, missing resources, denied permissions, and any other
///    I/O failure as [`AppError::Network`]
/// 3. [`serde_json::Error`] -> [`AppError::Parsing`]
/// 4. [`reqwest::Error`], by failure kind and response status
/// 5. anything else -> [`AppError::Generic`], retaining the cause
///
/// Each produced error carries the cause's display output as its message,
/// falling back to the category default when the cause renders to nothing.
pub fn classify(cause: BoxError) -> AppError {
    if cause.is::<Elapsed>() {
        return AppError::timeout(cause.to_string());
    }
    if let Some(io_error) = cause.downcast_ref::<io::Error>() {
        return classify_io(io_error);
    }
    if let Some(json_error) = cause.downcast_ref::<serde_json::Error>() {
        return AppError::parsing(json_error.to_string());
    }
    if let Some(http_error) = cause.downcast_ref::<reqwest::Error>() {
        return classify_http(http_error);
    }
    AppError::generic(cause)
}

/// Classifies a failure cause with a caller-supplied handler.
///
/// The handler fully shadows the default rules and its result is returned
/// verbatim, so it can target any error type, not just [`AppError`].
pub fn classify_with<E, H>(cause: BoxError, handler: H) -> E
where
    H: FnOnce(BoxError) -> E,
{
    handler(cause)
}

fn classify_io(error: &io::Error) -> AppError {
    let message = error.to_string();
    match error.kind() {
        io::ErrorKind::TimedOut => AppError::timeout(message),
        io::ErrorKind::HostUnreachable
        | io::ErrorKind::NetworkUnreachable
        | io::ErrorKind::NetworkDown
        | io::ErrorKind::NotConnected => AppError::no_connectivity(message),
        io::ErrorKind::InvalidData => AppError::invalid_data(message),
        io::ErrorKind::NotFound => AppError::not_found(message),
        io::ErrorKind::PermissionDenied => AppError::permission_denied(message),
        _ => AppError::network(message),
    }
}

fn classify_http(error: &reqwest::Error) -> AppError {
    let message = error.to_string();
    if error.is_timeout() {
        return AppError::timeout(message);
    }
    if error.is_connect() {
        return AppError::no_connectivity(message);
    }
    if let Some(status) = error.status() {
        if status.is_server_error() {
            return AppError::server(message);
        }
        return match status {
            reqwest::StatusCode::UNAUTHORIZED => AppError::authentication(message),
            reqwest::StatusCode::FORBIDDEN => AppError::permission_denied(message),
            reqwest::StatusCode::NOT_FOUND => AppError::not_found(message),
            _ => AppError::network(message),
        };
    }
    if error.is_decode() {
        return AppError::invalid_data(message);
    }
    AppError::network(message)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[derive(Debug)]
    struct Unrecognized(&'static str);

    impl std::fmt::Display for Unrecognized {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl std::error::Error for Unrecognized {}

    fn io_cause(kind: io::ErrorKind, message: &str) -> BoxError {
        Box::new(io::Error::new(kind, message.to_string()))
    }

    fn http_status_error(status: u16) -> reqwest::Error {
        let response = http::Response::builder()
            .status(status)
            .body(Vec::<u8>::new())
            .expect("valid response");
        reqwest::Response::from(response)
            .error_for_status()
            .expect_err("status should be an error")
    }

    #[tokio::test]
    async fn test_tokio_deadline_maps_to_timeout() {
        let elapsed = tokio::time::timeout(Duration::ZERO, std::future::pending::<()>())
            .await
            .expect_err("deadline should expire");
        let error = classify(Box::new(elapsed));
        assert!(matches!(error, AppError::Timeout(_)));
    }

    #[test]
    fn test_io_kinds_map_to_expected_categories() {
        let cases = [
            (io::ErrorKind::TimedOut, "Timeout"),
            (io::ErrorKind::HostUnreachable, "NoConnectivity"),
            (io::ErrorKind::NetworkUnreachable, "NoConnectivity"),
            (io::ErrorKind::NetworkDown, "NoConnectivity"),
            (io::ErrorKind::NotConnected, "NoConnectivity"),
            (io::ErrorKind::InvalidData, "InvalidData"),
            (io::ErrorKind::NotFound, "NotFound"),
            (io::ErrorKind::PermissionDenied, "PermissionDenied"),
            (io::ErrorKind::BrokenPipe, "Network"),
            (io::ErrorKind::ConnectionReset, "Network"),
        ];
        for (kind, category) in cases {
            let error = classify(io_cause(kind, "io failure"));
            assert_eq!(error.category(), category, "kind {kind:?}");
        }
    }

    #[test]
    fn test_json_error_maps_to_parsing() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ not json")
            .expect_err("input is malformed");
        let error = classify(Box::new(json_error));
        assert!(matches!(error, AppError::Parsing(_)));
    }

    #[test]
    fn test_http_statuses_map_to_expected_categories() {
        let cases = [
            (500, "Server"),
            (502, "Server"),
            (503, "Server"),
            (401, "Authentication"),
            (403, "PermissionDenied"),
            (404, "NotFound"),
            (429, "Network"),
        ];
        for (status, category) in cases {
            let error = classify(Box::new(http_status_error(status)));
            assert_eq!(error.category(), category, "status {status}");
        }
    }

    #[test]
    fn test_unrecognized_cause_lands_in_generic_with_cause() {
        let error = classify(Box::new(Unrecognized("strange failure")));
        let AppError::Generic { message, cause } = error else {
            panic!("expected a generic error");
        };
        assert_eq!(message, "strange failure");
        assert!(cause.is::<Unrecognized>());
    }

    #[test]
    fn test_classify_with_shadows_default_rules() {
        // An io NotFound would map to NotFound under the default rules; the
        // handler's verdict must win regardless.
        let error = classify_with(io_cause(io::ErrorKind::NotFound, "missing"), |cause| {
            AppError::server(cause.to_string())
        });
        assert!(matches!(error, AppError::Server(_)));
    }

    #[test]
    fn test_messages_carry_the_cause_text() {
        let error = classify(io_cause(io::ErrorKind::NotFound, "no such profile"));
        assert_eq!(error.to_string(), "no such profile");
    }
}
