use auction_core::{Cash, ConfigError, Seat};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuctionError {
    #[error("Invalid auction configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{seat} ({bidder}) placed a negative bid in round {round}: {bid}")]
    NegativeBid {
        seat: Seat,
        bidder: String,
        round: usize,
        bid: Cash,
    },

    #[error("{seat} ({bidder}) bid {bid} in round {round} with only {cash} remaining")]
    Overdraft {
        seat: Seat,
        bidder: String,
        round: usize,
        bid: Cash,
        cash: Cash,
    },

    #[error("Auction already finished after {rounds} rounds")]
    AlreadyFinished { rounds: usize },
}

impl AuctionError {
    /// Whether the error comes from a bidder breaking its contract
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            AuctionError::NegativeBid { .. } | AuctionError::Overdraft { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuctionError>;
