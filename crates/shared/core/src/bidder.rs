//! Bidder Trait
//!
//! Contract every bidding strategy implements to take part in an auction.

use crate::values::{AuctionConfig, Cash};

/// Core trait for all bidders
///
/// The engine calls the methods in a fixed order:
///
/// 1. `init` once before the first round of every auction
/// 2. per round, `place_bid` on both bidders (bidder 1 first), then `notify`
///    on both bidders (bidder 1 first) once the round has been applied
///
/// A bid must be non-negative and must not exceed the bidder's own remaining
/// cash. The engine re-validates every bid and aborts the auction on a
/// violation instead of clamping it.
pub trait Bidder: Send {
    /// Bidder name (for reporting)
    fn name(&self) -> &str;

    /// Reset all state for a new auction. Nothing from a previous auction
    /// may survive this call.
    fn init(&mut self, config: &AuctionConfig);

    /// Produce the sealed bid for the current round
    fn place_bid(&mut self) -> Cash;

    /// Called once per round with both revealed bids, own bid first
    fn notify(&mut self, own_bid: Cash, opponent_bid: Cash);
}

impl<B: Bidder + ?Sized> Bidder for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn init(&mut self, config: &AuctionConfig) {
        (**self).init(config)
    }

    fn place_bid(&mut self) -> Cash {
        (**self).place_bid()
    }

    fn notify(&mut self, own_bid: Cash, opponent_bid: Cash) {
        (**self).notify(own_bid, opponent_bid)
    }
}
