use thiserror::Error;

pub mod openuv;

pub use openuv::OpenUvProvider;

/// Tagged failure result of one fetch cycle.
///
/// Every way a request can go wrong collapses into one of these variants so
/// callers pattern-match success against failure instead of unwinding; the
/// `Display` text is what ends up in front of the user.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-success HTTP status. The message is the server-supplied `error`
    /// field, or "Unknown error" when the body carries none.
    #[error("request failed with status {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// DNS, connect, timeout or any other transport-level failure.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success-status body that could not be decoded, including one
    /// missing the required numeric fields.
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_carries_server_text() {
        let err = FetchError::Api {
            status: reqwest::StatusCode::FORBIDDEN,
            message: "invalid api key".to_string(),
        };

        let text = err.to_string();
        assert!(text.contains("403"));
        assert!(text.contains("invalid api key"));
    }

    #[test]
    fn malformed_error_keeps_description() {
        let err = FetchError::Malformed("missing field `uv_max`".to_string());
        assert!(err.to_string().contains("missing field `uv_max`"));
    }
}
