use super::BidderLedger;
use crate::values::{AuctionConfig, Cash, Units};

/// A bidder's private view of the auction: both ledgers as it reconstructs
/// them from the bids it is notified of.
///
/// Bidders never touch the engine's ledgers. Each one keeps a `Standing` and
/// feeds it through [`record`](Self::record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub config: AuctionConfig,
    pub own: BidderLedger,
    pub opponent: BidderLedger,
}

impl Standing {
    pub fn new(config: AuctionConfig) -> Self {
        Self {
            config,
            own: BidderLedger::new(config.initial_cash()),
            opponent: BidderLedger::new(config.initial_cash()),
        }
    }

    /// Record a completed round
    pub fn record(&mut self, own_bid: Cash, opponent_bid: Cash) {
        self.own.apply_round(own_bid, opponent_bid);
        self.opponent.apply_round(opponent_bid, own_bid);
    }

    /// Units not yet allocated
    pub fn remaining_quantity(&self) -> Units {
        self.config.total_quantity() - self.own.quantity_won - self.opponent.quantity_won
    }

    pub fn rounds_played(&self) -> usize {
        ((self.own.quantity_won + self.opponent.quantity_won) / 2) as usize
    }

    pub fn is_last_round(&self) -> bool {
        self.remaining_quantity() == 2
    }

    pub fn own_cash(&self) -> Cash {
        self.own.cash_remaining
    }

    pub fn opponent_cash(&self) -> Cash {
        self.opponent.cash_remaining
    }

    /// Cap a proposed bid to what this bidder can pay
    pub fn affordable(&self, bid: Cash) -> Cash {
        bid.clamp(0, self.own.cash_remaining.max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tracks_both_sides() {
        let mut standing = Standing::new(AuctionConfig::new(10, 100).unwrap());
        standing.record(30, 20);
        standing.record(10, 10);

        assert_eq!(standing.own.quantity_won, 3);
        assert_eq!(standing.opponent.quantity_won, 1);
        assert_eq!(standing.own_cash(), 60);
        assert_eq!(standing.opponent_cash(), 70);
        assert_eq!(standing.remaining_quantity(), 6);
        assert_eq!(standing.rounds_played(), 2);
        assert!(!standing.is_last_round());
    }

    #[test]
    fn test_last_round() {
        let mut standing = Standing::new(AuctionConfig::new(4, 100).unwrap());
        assert!(!standing.is_last_round());
        standing.record(1, 0);
        assert!(standing.is_last_round());
    }

    #[test]
    fn test_affordable() {
        let mut standing = Standing::new(AuctionConfig::new(4, 100).unwrap());
        standing.record(90, 0);
        assert_eq!(standing.affordable(50), 10);
        assert_eq!(standing.affordable(-3), 0);
        assert_eq!(standing.affordable(7), 7);
    }
}
