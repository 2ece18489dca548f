//! Fireworks - New Year terminal show
//!
//! Draws a run of randomly placed ANSI firework bursts, shows a centered
//! greeting and finally asks the user for a wish and echoes it back.

use std::fmt;

// Public re-exports
pub mod config;
pub mod show;

// Common error types
#[derive(Debug)]
pub enum FireworksError {
    /// Terminal write, flush or stdin read failed
    IoError(std::io::Error),
    /// Screen clear command missing or unsuccessful
    EnvironmentFailure(String),
    /// Standard input closed before a line was read
    EndOfInput,
    /// Show configuration rejected by validation
    ConfigError(String),
}

impl fmt::Display for FireworksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireworksError::IoError(err) => write!(f, "I/O error: {}", err),
            FireworksError::EnvironmentFailure(msg) => write!(f, "Environment failure: {}", msg),
            FireworksError::EndOfInput => write!(f, "End of input reached before a wish was entered"),
            FireworksError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for FireworksError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FireworksError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FireworksError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => FireworksError::EndOfInput,
            _ => FireworksError::IoError(err),
        }
    }
}

/// Result type alias for show operations
pub type Result<T> = std::result::Result<T, FireworksError>;

// Common types and constants
pub const APP_NAME: &str = "fireworks";
pub const WISH_PROMPT: &str = "Enter your wish: ";
pub const WISH_PREFIX: &str = "your wish is: ";

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let err: FireworksError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, FireworksError::IoError(_)));
        assert!(err.source().is_some());

        let err: FireworksError = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(matches!(err, FireworksError::EndOfInput));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_display_messages() {
        let err = FireworksError::EnvironmentFailure("clear exited with 1".into());
        assert_eq!(err.to_string(), "Environment failure: clear exited with 1");
        assert!(FireworksError::EndOfInput.to_string().contains("End of input"));
    }
}
