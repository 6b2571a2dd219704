use crate::values::{Cash, Units};

/// How the two units of a round are split between the bidders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    /// Own bid was strictly higher
    Both,
    /// Bids were equal
    Split,
    /// Opponent bid was strictly higher
    None,
}

impl Allocation {
    /// Resolve a round from one bidder's perspective
    pub fn resolve(own_bid: Cash, opponent_bid: Cash) -> Self {
        match own_bid.cmp(&opponent_bid) {
            std::cmp::Ordering::Greater => Allocation::Both,
            std::cmp::Ordering::Equal => Allocation::Split,
            std::cmp::Ordering::Less => Allocation::None,
        }
    }

    /// Units won by this side
    pub fn units(&self) -> Units {
        match self {
            Allocation::Both => 2,
            Allocation::Split => 1,
            Allocation::None => 0,
        }
    }
}

/// Quantity and cash held by one bidder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidderLedger {
    /// Units won so far
    pub quantity_won: Units,
    /// Money left to bid with
    pub cash_remaining: Cash,
}

impl BidderLedger {
    pub fn new(initial_cash: Cash) -> Self {
        Self {
            quantity_won: 0,
            cash_remaining: initial_cash,
        }
    }

    /// Whether `bid` is a legal bid against this ledger
    pub fn can_afford(&self, bid: Cash) -> bool {
        bid >= 0 && bid <= self.cash_remaining
    }

    /// Apply one round: pay the own bid and take the allocated units.
    ///
    /// The own bid is paid whether or not the round is won. Callers validate
    /// the bid with [`can_afford`](Self::can_afford) first.
    pub fn apply_round(&mut self, own_bid: Cash, opponent_bid: Cash) -> Allocation {
        debug_assert!(self.can_afford(own_bid), "bid exceeds remaining cash");

        let allocation = Allocation::resolve(own_bid, opponent_bid);
        self.cash_remaining -= own_bid;
        self.quantity_won += allocation.units();
        allocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_bid_takes_both_units() {
        let mut ledger = BidderLedger::new(100);
        let allocation = ledger.apply_round(30, 20);

        assert_eq!(allocation, Allocation::Both);
        assert_eq!(ledger.quantity_won, 2);
        assert_eq!(ledger.cash_remaining, 70);
    }

    #[test]
    fn test_equal_bids_split() {
        let mut ledger = BidderLedger::new(100);
        assert_eq!(ledger.apply_round(10, 10), Allocation::Split);
        assert_eq!(ledger.quantity_won, 1);
        assert_eq!(ledger.cash_remaining, 90);
    }

    #[test]
    fn test_losing_bid_is_still_paid() {
        let mut ledger = BidderLedger::new(100);
        assert_eq!(ledger.apply_round(10, 50), Allocation::None);
        assert_eq!(ledger.quantity_won, 0);
        assert_eq!(ledger.cash_remaining, 90);
    }

    #[test]
    fn test_can_afford() {
        let ledger = BidderLedger::new(50);
        assert!(ledger.can_afford(0));
        assert!(ledger.can_afford(50));
        assert!(!ledger.can_afford(51));
        assert!(!ledger.can_afford(-1));
    }

    #[test]
    fn test_both_sides_share_two_units() {
        for (own, other) in [(5, 3), (3, 3), (1, 9)] {
            let mine = Allocation::resolve(own, other);
            let theirs = Allocation::resolve(other, own);
            assert_eq!(mine.units() + theirs.units(), 2);
        }
    }
}
