//! Adaptive Bidder
//!
//! Models the opponent from the bids it has revealed and answers with a
//! counter-strategy. Each round it:
//!
//! 1. Checks the win condition shortcut and plays the closing move if victory
//!    is already guaranteed
//! 2. Otherwise labels the opponent from the full history
//! 3. Asks the counter-bidder for a bid against that label

pub mod classifier;
pub mod counter_bid;

pub use classifier::{OpponentClassifier, OpponentStrategy, StrategyScores};
pub use counter_bid::CounterBidder;

use crate::rng::BidderRng;
use crate::win_condition;
use auction_core::{AuctionConfig, BidHistory, Bidder, Cash, Standing};
use log::debug;

/// Configuration for the adaptive bidder
#[derive(Debug, Clone, Default)]
pub struct AdaptiveBidderConfig {
    /// Random seed (for reproducibility)
    pub seed: Option<u64>,
}

impl AdaptiveBidderConfig {
    /// Set seed (builder pattern)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

pub struct AdaptiveBidder {
    name: String,
    rng: BidderRng,
    standing: Standing,
    history: BidHistory,
    classifier: OpponentClassifier,
    counter: CounterBidder,
}

impl AdaptiveBidder {
    pub fn new(name: impl Into<String>, config: AdaptiveBidderConfig) -> Self {
        let auction = AuctionConfig::default();
        Self {
            name: name.into(),
            rng: BidderRng::new(config.seed),
            standing: Standing::new(auction),
            history: BidHistory::with_capacity(auction.rounds()),
            classifier: OpponentClassifier::new(&auction),
            counter: CounterBidder::new(&auction),
        }
    }

    /// Current label for the opponent
    pub fn opponent_strategy(&self) -> OpponentStrategy {
        self.classifier.classify(&self.history)
    }

    pub fn history(&self) -> &BidHistory {
        &self.history
    }

    pub fn standing(&self) -> &Standing {
        &self.standing
    }
}

impl Bidder for AdaptiveBidder {
    fn name(&self) -> &str {
        &self.name
    }

    fn init(&mut self, config: &AuctionConfig) {
        self.rng.reseed();
        self.standing = Standing::new(*config);
        self.history = BidHistory::with_capacity(config.rounds());
        self.classifier = OpponentClassifier::new(config);
        self.counter = CounterBidder::new(config);
    }

    fn place_bid(&mut self) -> Cash {
        let total_quantity = self.standing.config.total_quantity();
        if let Some(rule) =
            win_condition::check(total_quantity, &self.standing.own, &self.standing.opponent)
        {
            let bid = rule.closing_bid(&self.standing.opponent);
            debug!("[{}] win condition {:?}, bidding {}", self.name, rule, bid);
            return bid;
        }

        let (strategy, scores) = self.classifier.assess(&self.history);
        let bid = self
            .counter
            .next_bid(strategy, &self.history, &self.standing, &mut self.rng);

        debug!(
            "[{}] round {}: opponent={} (tft={:.2}, aggressive={:.2}, conservative={:.2}), bidding {}",
            self.name,
            self.history.len() + 1,
            strategy,
            scores.tit_for_tat,
            scores.simple_aggressive,
            scores.simple_conservative,
            bid
        );
        bid
    }

    fn notify(&mut self, own_bid: Cash, opponent_bid: Cash) {
        self.standing.record(own_bid, opponent_bid);
        self.history.push(own_bid, opponent_bid);
    }
}
