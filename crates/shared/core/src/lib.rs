//! Auction Core Domain
//!
//! Pure domain types for the two-bidder sealed-bid auction.
//! This crate contains no I/O, no randomness, and is 100% unit testable.

pub mod bidder;
pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use bidder::Bidder;
pub use entities::{
    Allocation, AuctionOutcome, BidHistory, BidRecord, BidderLedger, Seat, Standing,
};
pub use error::ConfigError;
pub use values::{
    AuctionConfig, BidThresholds, BidTier, Cash, MAX_INITIAL_CASH, MAX_TOTAL_QUANTITY, Units,
};
