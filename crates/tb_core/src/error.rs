use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalanceError {
    #[error("Invalid position: {0}. Valid positions are 1, 2, 3, 4, or 5")]
    InvalidPosition(String),

    #[error("Invalid limit: {0}. Must be at least 1")]
    InvalidLimit(usize),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BalanceError {
    /// Whether the caller can fix the request and retry.
    pub fn is_request_error(&self) -> bool {
        match self {
            BalanceError::InvalidPosition(_) => true,
            BalanceError::InvalidLimit(_) => true,
            BalanceError::UnsupportedSchema { .. } => true,
            BalanceError::Json(err) => err.is_data() || err.is_syntax() || err.is_eof(),
            BalanceError::Config(_) => false,
            BalanceError::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, BalanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BalanceError::UnsupportedSchema { found: 2, expected: 1 };
        assert_eq!(err.to_string(), "Unsupported schema version: found 2, expected 1");

        let err = BalanceError::InvalidPosition("7".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid position: 7. Valid positions are 1, 2, 3, 4, or 5"
        );
    }

    #[test]
    fn test_request_error_classification() {
        assert!(BalanceError::InvalidLimit(0).is_request_error());
        assert!(!BalanceError::Config("bad".to_string()).is_request_error());

        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        assert!(BalanceError::from(json_err).is_request_error());
    }
}
