//! Error types for GemSlot

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum GsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Insufficient balance: bet {bet:.2} exceeds balance {balance:.2}")]
    InsufficientFunds { bet: f64, balance: f64 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type GsResult<T> = Result<T, GsError>;
