//! Constant Ratio Bidder
//!
//! Bids the same multiple of the mean unit bid (`cash / quantity`) every
//! round, capped at its remaining cash. A ratio of 2 spends the budget evenly
//! across all rounds; anything higher runs out early.

use auction_core::{AuctionConfig, Bidder, Cash, Standing};

/// Ratio of the plain simple bidder (even split of the budget)
pub const EVEN_SPLIT_RATIO: i64 = 2;

/// Ratio of the high simple bidder
pub const HIGH_RATIO: i64 = 3;

pub struct ConstantRatioBidder {
    name: String,
    ratio: i64,
    bid: Cash,
    standing: Standing,
}

impl ConstantRatioBidder {
    pub fn new(name: impl Into<String>, ratio: i64) -> Self {
        let config = AuctionConfig::default();
        Self {
            name: name.into(),
            ratio,
            bid: Self::bid_for(&config, ratio),
            standing: Standing::new(config),
        }
    }

    /// Plain simple bidder
    pub fn even_split(name: impl Into<String>) -> Self {
        Self::new(name, EVEN_SPLIT_RATIO)
    }

    /// High simple bidder
    pub fn high(name: impl Into<String>) -> Self {
        Self::new(name, HIGH_RATIO)
    }

    fn bid_for(config: &AuctionConfig, ratio: i64) -> Cash {
        (config.initial_cash() / config.total_quantity()).saturating_mul(ratio)
    }
}

impl Bidder for ConstantRatioBidder {
    fn name(&self) -> &str {
        &self.name
    }

    fn init(&mut self, config: &AuctionConfig) {
        self.bid = Self::bid_for(config, self.ratio);
        self.standing = Standing::new(*config);
    }

    fn place_bid(&mut self) -> Cash {
        self.standing.affordable(self.bid)
    }

    fn notify(&mut self, own_bid: Cash, opponent_bid: Cash) {
        self.standing.record(own_bid, opponent_bid);
    }
}
