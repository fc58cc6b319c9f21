//! Failures raised by the HTTP dispatcher
//!
//! Operations return `anyhow::Result`; callers that care about the HTTP status
//! or backend code downcast to [`ApiError`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS, timeout or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// 2xx response whose envelope carries a non-zero code
    #[error("backend error {code}: {message}")]
    Backend { code: i64, message: String },

    /// Response body is not the expected JSON envelope
    #[error("malformed response: {0}")]
    Decode(String),

    /// A path parameter is required but absent on the request
    #[error("{0} requires an id")]
    MissingId(&'static str),
}

impl ApiError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        let err = ApiError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert!(err.is_not_found());
        assert!(!err.is_unauthorized());

        let err = ApiError::Backend {
            code: 1,
            message: "表单不存在".to_string(),
        };
        assert_eq!(err.status_code(), None);
        assert_eq!(err.to_string(), "backend error 1: 表单不存在");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = ApiError::Status {
            status: 401,
            body: String::new(),
        }
        .into();

        let api_err = err.downcast_ref::<ApiError>().expect("should downcast");
        assert!(api_err.is_unauthorized());
    }
}
