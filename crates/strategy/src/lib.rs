//! Auction Strategy Library
//!
//! Bidders that plug into the auction engine through [`auction_core::Bidder`]:
//!
//! - **AdaptiveBidder**: classifies the opponent and counter-bids
//! - **ConstantRatioBidder**: fixed bid every round
//! - **RandomBidder** / **AdaptiveRandomBidder**: Gaussian bids
//! - **ReactiveBidder**: tit-for-tat, previous opponent bid plus one
//!
//! ## Architecture
//!
//! ```text
//!                 place_bid()
//!                      │
//!                      ▼
//!          ┌───────────────────────┐  met   ┌──────────────┐
//!          │  Win Condition Check  │───────►│ Closing Bid  │
//!          └───────────┬───────────┘        └──────────────┘
//!                      │ not met
//!                      ▼
//!          ┌───────────────────────┐
//!          │  Opponent Classifier  │◄──── BidHistory
//!          └───────────┬───────────┘
//!                      │ OpponentStrategy
//!                      ▼
//!          ┌───────────────────────┐
//!          │    Counter-Bidder     │──► clamp [0, min(own, opp + 1)]
//!          └───────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use auction_strategy::{AdaptiveBidder, AdaptiveBidderConfig};
//!
//! let bidder = AdaptiveBidder::new("adaptive", AdaptiveBidderConfig::default().with_seed(42));
//! ```

pub mod adaptive;
pub mod catalog;
pub mod constant_ratio;
pub mod error;
pub mod random;
pub mod reactive;
pub mod rng;
pub mod win_condition;

// Re-export main types
pub use adaptive::{
    AdaptiveBidder, AdaptiveBidderConfig, CounterBidder, OpponentClassifier, OpponentStrategy,
    StrategyScores,
};
pub use catalog::BidderKind;
pub use constant_ratio::ConstantRatioBidder;
pub use error::StrategyError;
pub use random::{AdaptiveRandomBidder, RandomBidder, RandomBidderConfig};
pub use reactive::ReactiveBidder;
pub use rng::BidderRng;
pub use win_condition::WinRule;
