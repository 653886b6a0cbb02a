//! Map curl errors onto fetch failure reasons.

use crate::error::FetchFailure;

/// Classify a curl error into `Timeout`, `ConnectionError` or `TransportError`.
pub fn classify_curl_error(e: &curl::Error) -> FetchFailure {
    if e.is_operation_timedout() {
        return FetchFailure::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_ssl_connect_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FetchFailure::ConnectionError {
            message: e.to_string(),
        };
    }
    FetchFailure::TransportError {
        message: e.to_string(),
    }
}

impl From<curl::Error> for FetchFailure {
    fn from(e: curl::Error) -> Self {
        classify_curl_error(&e)
    }
}
