use super::BidderLedger;
use std::cmp::Ordering;

/// Position of a bidder in an auction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => write!(f, "bidder 1"),
            Seat::Second => write!(f, "bidder 2"),
        }
    }
}

/// Final result of an auction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuctionOutcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl AuctionOutcome {
    /// Decide the winner: more quantity wins, then more cash, else tie.
    pub fn from_ledgers(first: &BidderLedger, second: &BidderLedger) -> Self {
        let ordering = first
            .quantity_won
            .cmp(&second.quantity_won)
            .then(first.cash_remaining.cmp(&second.cash_remaining));

        match ordering {
            Ordering::Greater => AuctionOutcome::FirstWins,
            Ordering::Less => AuctionOutcome::SecondWins,
            Ordering::Equal => AuctionOutcome::Tie,
        }
    }

    /// Winning seat, if any
    pub fn winner(&self) -> Option<Seat> {
        match self {
            AuctionOutcome::FirstWins => Some(Seat::First),
            AuctionOutcome::SecondWins => Some(Seat::Second),
            AuctionOutcome::Tie => None,
        }
    }

    /// Tournament points for a seat: 2 per win, 1 per tie
    pub fn points_for(&self, seat: Seat) -> u64 {
        match self.winner() {
            Some(winner) if winner == seat => 2,
            Some(_) => 0,
            None => 1,
        }
    }
}

impl std::fmt::Display for AuctionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuctionOutcome::FirstWins => write!(f, "Bidder 1 wins"),
            AuctionOutcome::SecondWins => write!(f, "Bidder 2 wins"),
            AuctionOutcome::Tie => write!(f, "Tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(quantity_won: i64, cash_remaining: i64) -> BidderLedger {
        BidderLedger {
            quantity_won,
            cash_remaining,
        }
    }

    #[test]
    fn test_quantity_decides_first() {
        assert_eq!(
            AuctionOutcome::from_ledgers(&ledger(16, 50), &ledger(14, 80)),
            AuctionOutcome::FirstWins
        );
        assert_eq!(
            AuctionOutcome::from_ledgers(&ledger(14, 80), &ledger(16, 50)),
            AuctionOutcome::SecondWins
        );
    }

    #[test]
    fn test_cash_breaks_quantity_tie() {
        assert_eq!(
            AuctionOutcome::from_ledgers(&ledger(15, 10), &ledger(15, 20)),
            AuctionOutcome::SecondWins
        );
    }

    #[test]
    fn test_full_tie() {
        let outcome = AuctionOutcome::from_ledgers(&ledger(15, 0), &ledger(15, 0));
        assert_eq!(outcome, AuctionOutcome::Tie);
        assert_eq!(outcome.points_for(Seat::First), 1);
        assert_eq!(outcome.points_for(Seat::Second), 1);
    }

    #[test]
    fn test_points() {
        let outcome = AuctionOutcome::FirstWins;
        assert_eq!(outcome.points_for(Seat::First), 2);
        assert_eq!(outcome.points_for(Seat::Second), 0);
    }
}
