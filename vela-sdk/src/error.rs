//! SDK error taxonomy
//!
//! Two classes reach callers: transport failures and API errors carrying
//! the HTTP status. The only classification callers rely on is
//! [`Error::is_not_found`]; everything else is wrapped and propagated.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: status {status} - {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("authentication failed: {message}")]
    Auth { message: String },
}

impl Error {
    /// Whether the remote reported the resource absent. This is the one
    /// error condition handlers treat as expected.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_classification() {
        let err = Error::Api {
            status: 404,
            message: "Route server not found".to_string(),
        };
        assert!(err.is_not_found());

        let err = Error::Api {
            status: 500,
            message: "internal".to_string(),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.status(), Some(500));
    }
}
