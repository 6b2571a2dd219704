//! Random Bidders
//!
//! - [`RandomBidder`]: Gaussian bids around the even-split bid, whatever the
//!   state of the auction. It never spends its last cash to close out a win.
//! - [`AdaptiveRandomBidder`]: recomputes the mean from what is left each
//!   round, plays the win condition shortcut when it holds and goes all-in in
//!   the last round.

use crate::rng::BidderRng;
use crate::win_condition;
use auction_core::{AuctionConfig, Bidder, Cash, Standing};

/// Configuration for the random bidders
#[derive(Debug, Clone)]
pub struct RandomBidderConfig {
    /// Mean bid as a multiple of `cash / quantity`
    pub mean_ratio: i64,
    /// Standard deviation as a fraction of the mean
    pub deviation: f64,
    /// Random seed (for reproducibility)
    pub seed: Option<u64>,
}

impl Default for RandomBidderConfig {
    fn default() -> Self {
        Self {
            mean_ratio: 2,
            deviation: 0.5, // 50% of the mean
            seed: None,
        }
    }
}

impl RandomBidderConfig {
    /// Set seed (builder pattern)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

pub struct RandomBidder {
    name: String,
    config: RandomBidderConfig,
    rng: BidderRng,
    mean: Cash,
    standing: Standing,
}

impl RandomBidder {
    pub fn new(name: impl Into<String>, config: RandomBidderConfig) -> Self {
        let auction = AuctionConfig::default();
        Self {
            name: name.into(),
            rng: BidderRng::new(config.seed),
            mean: (auction.initial_cash() / auction.total_quantity()) * config.mean_ratio,
            config,
            standing: Standing::new(auction),
        }
    }
}

impl Bidder for RandomBidder {
    fn name(&self) -> &str {
        &self.name
    }

    fn init(&mut self, config: &AuctionConfig) {
        self.rng.reseed();
        self.mean = (config.initial_cash() / config.total_quantity()) * self.config.mean_ratio;
        self.standing = Standing::new(*config);
    }

    fn place_bid(&mut self) -> Cash {
        let mean = self.mean as f64;
        let bid = self.rng.gaussian(mean, mean * self.config.deviation) as Cash;
        self.standing.affordable(bid)
    }

    fn notify(&mut self, own_bid: Cash, opponent_bid: Cash) {
        self.standing.record(own_bid, opponent_bid);
    }
}

pub struct AdaptiveRandomBidder {
    name: String,
    config: RandomBidderConfig,
    rng: BidderRng,
    standing: Standing,
}

impl AdaptiveRandomBidder {
    pub fn new(name: impl Into<String>, config: RandomBidderConfig) -> Self {
        Self {
            name: name.into(),
            rng: BidderRng::new(config.seed),
            config,
            standing: Standing::new(AuctionConfig::default()),
        }
    }

    /// Mean bid spreading the remaining cash over the remaining units
    fn current_mean(&self) -> Cash {
        let remaining = self.standing.remaining_quantity();
        if remaining <= 0 {
            return 0;
        }
        (self.standing.own_cash() / remaining) * self.config.mean_ratio
    }
}

impl Bidder for AdaptiveRandomBidder {
    fn name(&self) -> &str {
        &self.name
    }

    fn init(&mut self, config: &AuctionConfig) {
        self.rng.reseed();
        self.standing = Standing::new(*config);
    }

    fn place_bid(&mut self) -> Cash {
        let standing = &self.standing;
        if let Some(rule) = win_condition::check(
            standing.config.total_quantity(),
            &standing.own,
            &standing.opponent,
        ) {
            return standing.affordable(rule.closing_bid(&standing.opponent));
        }

        if standing.is_last_round() {
            return standing.own_cash();
        }

        let mean = self.current_mean() as f64;
        let bid = self.rng.gaussian(mean, mean * self.config.deviation) as Cash;
        self.standing.affordable(bid)
    }

    fn notify(&mut self, own_bid: Cash, opponent_bid: Cash) {
        self.standing.record(own_bid, opponent_bid);
    }
}
