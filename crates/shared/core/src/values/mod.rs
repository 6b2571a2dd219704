mod config;
mod thresholds;

pub use config::{AuctionConfig, MAX_INITIAL_CASH, MAX_TOTAL_QUANTITY};
pub use thresholds::{BidThresholds, BidTier};

/// Monetary units. Signed so that a misbehaving bidder's negative bid is
/// representable and can be rejected by the engine.
pub type Cash = i64;

/// Quantity units of the auctioned good.
pub type Units = i64;
