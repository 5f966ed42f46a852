//! Error types for detector configuration.

use thiserror::Error;

/// Primary error type for building and parsing detector configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GestureError {
    /// Threshold was not a finite, strictly positive pixel distance.
    #[error("invalid swipe threshold")]
    InvalidThreshold {
        /// Offending threshold value.
        value: f64,
    },
    /// No swipe direction was configured.
    #[error("swipe directions must not be empty")]
    EmptyDirections,
    /// Direction name did not match any known direction.
    #[error("unknown swipe direction")]
    UnknownDirection {
        /// Direction payload provided by the caller.
        value: String,
    },
    /// Scope name did not match any known scope.
    #[error("unknown swipe scope")]
    UnknownScope {
        /// Scope payload provided by the caller.
        value: String,
    },
    /// Click trigger name did not match any known trigger.
    #[error("unknown click trigger")]
    UnknownTrigger {
        /// Trigger payload provided by the caller.
        value: String,
    },
    /// Serialized configuration could not be decoded.
    #[error("invalid gesture configuration")]
    InvalidConfig {
        /// Decoder error detail.
        detail: String,
    },
}

/// Convenience alias for detector configuration results.
pub type GestureResult<T> = Result<T, GestureError>;
