//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for matching operations.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors that can occur while building or running a matcher.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Duplicate or malformed diacritic entry, or an unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input bytes are not valid UTF-8
    #[error("Invalid UTF-8 input: valid up to byte {valid_up_to}")]
    InvalidEncoding {
        /// Length of the longest valid UTF-8 prefix
        valid_up_to: usize,
    },

    /// Strategy name not recognised
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Config file could not be read
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for the matcher schema
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<std::str::Utf8Error> for MatchError {
    fn from(err: std::str::Utf8Error) -> Self {
        MatchError::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
        }
    }
}

/// Error code for integration with the workspace error handling.
/// Range: 11xxx for matcher errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchErrorCode {
    /// Duplicate or malformed configuration
    Config = 11001,
    /// Invalid UTF-8 input
    InvalidEncoding = 11002,
    /// Unknown strategy name
    UnknownStrategy = 11003,
    /// Config file read failure
    Io = 11004,
    /// Config file parse failure
    TomlParsing = 11005,
}

impl MatchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> MatchErrorCode {
        match self {
            MatchError::Config(_) => MatchErrorCode::Config,
            MatchError::InvalidEncoding { .. } => MatchErrorCode::InvalidEncoding,
            MatchError::UnknownStrategy(_) => MatchErrorCode::UnknownStrategy,
            MatchError::Io(_) => MatchErrorCode::Io,
            MatchError::Toml(_) => MatchErrorCode::TomlParsing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_conversion() {
        let bytes = [b'j', b'o', 0xFF, b'e'];
        let err: MatchError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, MatchError::InvalidEncoding { valid_up_to: 2 }));
        assert_eq!(err.code(), MatchErrorCode::InvalidEncoding);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(MatchError::Config("dup".into()).code() as u32, 11001);
        assert_eq!(MatchError::UnknownStrategy("x".into()).code() as u32, 11003);
    }
}
