use serde::Deserialize;

/// Machine-readable error codes issued by the server inside its
/// `{"error": {"message", "details", "code"}}` envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidInput,
    BadRequest,
    NotFound,
    WrongPassword,
    TokenError,
    DbFailure,
    ServerFailure,
    /// A code this client doesn't know about, preserved verbatim
    Other(String),
}

impl ErrorCode {
    pub fn parse(code: &str) -> ErrorCode {
        match code {
            "INVALID_INPUT" => ErrorCode::InvalidInput,
            "BAD_REQUEST" => ErrorCode::BadRequest,
            "NOT_FOUND" => ErrorCode::NotFound,
            "WRONG_PASSWORD" => ErrorCode::WrongPassword,
            "TOKEN_ERROR" => ErrorCode::TokenError,
            "DB_FAILURE" => ErrorCode::DbFailure,
            "SERVER_FAILURE" => ErrorCode::ServerFailure,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

/// Uniform failure surface of the request gateway
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, refused connection, timeout
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("{message}")]
    Api {
        status: u16,
        code: ErrorCode,
        message: String,
    },
    /// A 2xx response whose body didn't match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Server error envelope. Both the nested and the flat form occur
/// (the backend emits `{"message", "code"}` at top level for 500s).
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
    message: Option<String>,
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

impl ApiError {
    /// Build an `Api` error from a non-2xx status and its raw body.
    pub fn from_response(status: u16, body: &str) -> ApiError {
        let envelope: Option<ErrorEnvelope> = serde_json::from_str(body).ok();
        let (message, code) = match envelope {
            Some(env) => {
                let nested = env.error;
                let message = nested
                    .as_ref()
                    .and_then(|b| b.message.clone())
                    .or(env.message);
                let code = nested.and_then(|b| b.code).or(env.code);
                (message, code)
            }
            None => (None, None),
        };
        ApiError::Api {
            status,
            code: code
                .as_deref()
                .map(ErrorCode::parse)
                .unwrap_or(ErrorCode::Other(String::new())),
            message: message.unwrap_or_else(|| format!("request failed with status {status}")),
        }
    }

    /// True for 401/403 — "not signed in", as opposed to a real failure.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, ApiError::Api { status: 401 | 403, .. })
    }
}
