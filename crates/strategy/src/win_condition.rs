//! Win Condition Shortcut
//!
//! Detects positions where victory is already guaranteed by arithmetic alone,
//! so a bidder can stop modelling its opponent and play a closing move.
//!
//! Three rules, checked in order:
//! - **Majority held**: own quantity is above half the total.
//! - **Tie-break held**: own quantity is exactly half and own cash is higher.
//!   The opponent can at best equal the quantity, and cash only decreases.
//! - **Outbid to victory**: outbidding the opponent's whole remaining cash by
//!   one in every round still needed is affordable.

use crate::error::{Result, StrategyError};
use auction_core::{BidderLedger, Cash, Units};

/// Which rule guarantees the win
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinRule {
    MajorityHeld,
    TieBreakHeld,
    OutbidToVictory { rounds_needed: Units },
}

impl WinRule {
    /// Closing bid for this rule. Already-won positions bid nothing.
    pub fn closing_bid(&self, opponent: &BidderLedger) -> Cash {
        match self {
            WinRule::MajorityHeld | WinRule::TieBreakHeld => 0,
            WinRule::OutbidToVictory { .. } => opponent.cash_remaining.saturating_add(1),
        }
    }
}

/// Check the win rules for `own` against `opponent`
pub fn check(total_quantity: Units, own: &BidderLedger, opponent: &BidderLedger) -> Option<WinRule> {
    let half = total_quantity / 2;

    if own.quantity_won > half {
        return Some(WinRule::MajorityHeld);
    }
    if own.quantity_won == half && own.cash_remaining > opponent.cash_remaining {
        return Some(WinRule::TieBreakHeld);
    }

    let quantity_needed = half - own.quantity_won + 1;
    let quantity_remaining = total_quantity - own.quantity_won - opponent.quantity_won;
    if quantity_needed > quantity_remaining {
        return None;
    }

    // Each won round brings two units
    let rounds_needed = (quantity_needed + 1) / 2;
    let cost = opponent
        .cash_remaining
        .saturating_add(1)
        .saturating_mul(rounds_needed);
    if own.cash_remaining > cost {
        return Some(WinRule::OutbidToVictory { rounds_needed });
    }

    None
}

/// Whether any win rule holds
pub fn is_met(total_quantity: Units, own: &BidderLedger, opponent: &BidderLedger) -> bool {
    check(total_quantity, own, opponent).is_some()
}

/// Closing bid for a guaranteed win.
///
/// Asking for a closing bid when no rule holds is a logic error of the
/// caller and is reported as [`StrategyError::WinConditionNotMet`].
pub fn next_bid(total_quantity: Units, own: &BidderLedger, opponent: &BidderLedger) -> Result<Cash> {
    check(total_quantity, own, opponent)
        .map(|rule| rule.closing_bid(opponent))
        .ok_or(StrategyError::WinConditionNotMet {
            own_quantity: own.quantity_won,
            own_cash: own.cash_remaining,
            opponent_cash: opponent.cash_remaining,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(quantity_won: Units, cash_remaining: Cash) -> BidderLedger {
        BidderLedger {
            quantity_won,
            cash_remaining,
        }
    }

    #[test]
    fn test_majority_held_regardless_of_cash() {
        for own_cash in [0, 1, 50] {
            let own = ledger(6, own_cash);
            let opponent = ledger(0, 1000);
            assert_eq!(check(10, &own, &opponent), Some(WinRule::MajorityHeld));
            assert_eq!(next_bid(10, &own, &opponent), Ok(0));
        }
    }

    #[test]
    fn test_tie_break_held() {
        let own = ledger(5, 40);
        let opponent = ledger(3, 39);
        assert_eq!(check(10, &own, &opponent), Some(WinRule::TieBreakHeld));
        assert_eq!(next_bid(10, &own, &opponent), Ok(0));
    }

    #[test]
    fn test_half_without_cash_lead_is_not_won() {
        let own = ledger(5, 40);
        let opponent = ledger(3, 40);
        assert!(!is_met(10, &own, &opponent));
    }

    #[test]
    fn test_outbid_to_victory() {
        // needed = 5 - 0 + 1 = 6 units, ceil(6 / 2) = 3 rounds, (1 + 1) * 3 = 6 < 1000
        let own = ledger(0, 1000);
        let opponent = ledger(0, 1);
        assert_eq!(
            check(10, &own, &opponent),
            Some(WinRule::OutbidToVictory { rounds_needed: 3 })
        );
        assert_eq!(next_bid(10, &own, &opponent), Ok(2));
    }

    #[test]
    fn test_extreme_cash_does_not_overflow() {
        let own = ledger(0, Cash::MAX);
        let opponent = ledger(0, Cash::MAX);
        assert!(!is_met(10, &own, &opponent));
        assert_eq!(
            WinRule::OutbidToVictory { rounds_needed: 1 }.closing_bid(&opponent),
            Cash::MAX
        );
    }

    #[test]
    fn test_outbid_requires_strictly_more_cash() {
        let own = ledger(0, 6);
        let opponent = ledger(0, 1);
        assert!(!is_met(10, &own, &opponent));

        let own = ledger(0, 7);
        assert!(is_met(10, &own, &opponent));
    }

    #[test]
    fn test_unreachable_quantity_is_not_won() {
        // Only 2 units left but 4 needed
        let own = ledger(2, 1000);
        let opponent = ledger(6, 0);
        assert!(!is_met(10, &own, &opponent));
    }

    #[test]
    fn test_misuse_is_an_error() {
        let own = ledger(0, 100);
        let opponent = ledger(0, 100);
        assert_eq!(
            next_bid(10, &own, &opponent),
            Err(StrategyError::WinConditionNotMet {
                own_quantity: 0,
                own_cash: 100,
                opponent_cash: 100,
            })
        );
    }

    #[test]
    fn test_closing_bid_is_affordable() {
        for opponent_cash in 0..50 {
            for own_cash in 0..200 {
                let own = ledger(4, own_cash);
                let opponent = ledger(4, opponent_cash);
                if let Ok(bid) = next_bid(30, &own, &opponent) {
                    assert!(bid >= 0 && bid <= own_cash);
                }
            }
        }
    }
}
