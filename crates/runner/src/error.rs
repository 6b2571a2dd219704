use auction_core::ConfigError;
use auction_engine::AuctionError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid auction parameters: {0}")]
    Config(#[from] ConfigError),

    #[error("At least two bidders are required, got {0}")]
    TooFewBidders(usize),

    #[error("Repeat count must be positive")]
    InvalidRepeats,

    #[error("No bidder at index {index} (line-up has {len})")]
    UnknownBidder { index: usize, len: usize },

    #[error("{first} vs {second}: {source}")]
    Pairing {
        first: String,
        second: String,
        #[source]
        source: AuctionError,
    },
}

pub type Result<T> = std::result::Result<T, ArenaError>;
