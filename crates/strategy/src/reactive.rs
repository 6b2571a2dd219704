//! Reactive Bidder
//!
//! Tit-for-tat: bids one more than the opponent bid in the previous round
//! (nothing in the first round), capped at its remaining cash.

use auction_core::{AuctionConfig, Bidder, Cash, Standing};

pub struct ReactiveBidder {
    name: String,
    last_opponent_bid: Option<Cash>,
    standing: Standing,
}

impl ReactiveBidder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_opponent_bid: None,
            standing: Standing::new(AuctionConfig::default()),
        }
    }
}

impl Bidder for ReactiveBidder {
    fn name(&self) -> &str {
        &self.name
    }

    fn init(&mut self, config: &AuctionConfig) {
        self.last_opponent_bid = None;
        self.standing = Standing::new(*config);
    }

    fn place_bid(&mut self) -> Cash {
        let bid = self.last_opponent_bid.map_or(0, |bid| bid.saturating_add(1));
        self.standing.affordable(bid)
    }

    fn notify(&mut self, own_bid: Cash, opponent_bid: Cash) {
        self.standing.record(own_bid, opponent_bid);
        self.last_opponent_bid = Some(opponent_bid);
    }
}
