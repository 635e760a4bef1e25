use thiserror::Error;

/// Failures raised while building, encoding or decoding assets and memos.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid asset code '{code}': {reason}")]
    Validation { code: String, reason: String },

    #[error("Malformed asset: {0}")]
    MalformedAsset(String),

    #[error("Invalid account id '{0}'")]
    InvalidAccountId(String),

    #[error("Unknown memo type: {0}")]
    UnknownMemoType(String),

    #[error("Malformed memo: {0}")]
    MalformedMemo(String),

    #[error("Memo too long: {0}")]
    MemoTooLong(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Malformed transaction record: {0}")]
    MalformedRecord(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::Validation {
            code: "US-D".to_string(),
            reason: "must be alphanumeric".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid asset code 'US-D': must be alphanumeric");

        let err = CodecError::UnknownMemoType("bogus".to_string());
        assert_eq!(err.to_string(), "Unknown memo type: bogus");

        let err = CodecError::MissingField("memo_type");
        assert_eq!(err.to_string(), "Missing field: memo_type");
    }
}
