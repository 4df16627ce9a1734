//! Error handling for Haze Engine
//!
//! One crate-wide error type. Module-local errors (e.g. color parsing) are
//! converted into it at the module boundary.

use std::error::Error as StdError;
use std::fmt;

/// Main error type for Haze Engine
#[derive(Debug)]
pub enum EngineError {
    // Surface Errors
    ContextUnavailable {
        width: u32,
        height: u32,
    },

    // Configuration Errors
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
    ParseError {
        value: String,
        expected_type: String,
    },
    DeserializationError {
        context: String,
        error: String,
    },
    IoError {
        path: String,
        error: String,
    },

    // Frame Errors
    FrameFailed {
        frame: u64,
        reason: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::ContextUnavailable { width, height } => write!(
                f,
                "Drawing surface {}x{} cannot provide a 2D context",
                width, height
            ),

            EngineError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),
            EngineError::ParseError {
                value,
                expected_type,
            } => write!(
                f,
                "Parse error: '{}' is not a valid {}",
                value, expected_type
            ),
            EngineError::DeserializationError { context, error } => {
                write!(f, "Deserialization error in {}: {}", context, error)
            }
            EngineError::IoError { path, error } => write!(f, "IO error for {}: {}", path, error),

            EngineError::FrameFailed { frame, reason } => {
                write!(f, "Frame {} failed: {}", frame, reason)
            }
        }
    }
}

impl StdError for EngineError {}

/// Type alias for Results in Haze Engine
pub type EngineResult<T> = Result<T, EngineError>;

// Conversion traits for common error types

impl From<serde_json::Error> for EngineError {
    fn from(error: serde_json::Error) -> Self {
        EngineError::DeserializationError {
            context: "particle config".to_string(),
            error: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(error: toml::de::Error) -> Self {
        EngineError::DeserializationError {
            context: "engine config".to_string(),
            error: error.to_string(),
        }
    }
}

impl From<crate::color::ColorError> for EngineError {
    fn from(error: crate::color::ColorError) -> Self {
        EngineError::ParseError {
            value: error.input().to_string(),
            expected_type: "color".to_string(),
        }
    }
}

// Helper functions for common error patterns

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_engine<F>(self, f: F) -> EngineResult<T>
    where
        F: FnOnce() -> EngineError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_engine<F>(self, f: F) -> EngineResult<T>
    where
        F: FnOnce() -> EngineError,
    {
        self.ok_or_else(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::ContextUnavailable {
            width: 0,
            height: 600,
        };
        assert_eq!(
            err.to_string(),
            "Drawing surface 0x600 cannot provide a 2D context"
        );
    }

    #[test]
    fn test_frame_failed_display() {
        let err = EngineError::FrameFailed {
            frame: 12,
            reason: "3 particles non-finite".to_string(),
        };
        assert_eq!(err.to_string(), "Frame 12 failed: 3 particles non-finite");
    }

    #[test]
    fn test_option_ext() {
        let opt: Option<i32> = None;
        let result = opt.ok_or_engine(|| EngineError::ContextUnavailable {
            width: 0,
            height: 0,
        });
        assert!(matches!(
            result,
            Err(EngineError::ContextUnavailable { width: 0, height: 0 })
        ));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: EngineError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, EngineError::DeserializationError { .. }));
    }
}
