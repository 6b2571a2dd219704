use thiserror::Error;

/// Rejected auction parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Total quantity must be even, got {0}")]
    OddQuantity(i64),

    #[error("Total quantity must be greater than zero, got {0}")]
    NonPositiveQuantity(i64),

    #[error("Initial cash must be greater than zero, got {0}")]
    NonPositiveCash(i64),

    #[error("Total quantity must be at most {max}, got {value}")]
    QuantityTooLarge { value: i64, max: i64 },

    #[error("Initial cash must be at most {max}, got {value}")]
    CashTooLarge { value: i64, max: i64 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
