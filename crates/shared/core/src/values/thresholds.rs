//! Bid Magnitude Thresholds
//!
//! Fixed tier boundaries derived from the auction parameters. A bid above
//! `very_high` can only be sustained for about a quarter of the rounds; a bid
//! above `high` exceeds the per-round budget of an even split.

use super::{AuctionConfig, Cash};

/// Magnitude tier of a single bid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidTier {
    VeryHigh,
    High,
    Medium,
    Low,
    Zero,
}

/// Tier boundaries for one auction configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidThresholds {
    /// `cash / ceil((quantity + 1) / 4)`
    pub very_high: Cash,
    /// `2 * cash / quantity`, the even-split bid per round
    pub high: Cash,
    /// `cash / quantity`, the mean bid per quantity unit
    pub medium: Cash,
}

impl BidThresholds {
    pub fn new(config: &AuctionConfig) -> Self {
        let quantity = config.total_quantity();
        let cash = config.initial_cash();
        // ceil((quantity + 1) / 4) in integer arithmetic
        let quarter_rounds = (quantity + 4) / 4;

        Self {
            very_high: cash / quarter_rounds,
            high: 2 * cash / quantity,
            medium: cash / quantity,
        }
    }

    /// Classify a bid. Boundaries are exclusive: a bid equal to `high` is medium.
    pub fn tier_of(&self, bid: Cash) -> BidTier {
        if bid > self.very_high {
            BidTier::VeryHigh
        } else if bid > self.high {
            BidTier::High
        } else if bid > self.medium {
            BidTier::Medium
        } else if bid > 0 {
            BidTier::Low
        } else {
            BidTier::Zero
        }
    }

    /// Average bid per round if the whole budget were split evenly
    pub fn even_split_bid(&self) -> Cash {
        self.high
    }

    /// Average bid per quantity unit
    pub fn mean_unit_bid(&self) -> Cash {
        self.medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_for_default_auction() {
        let thresholds = BidThresholds::new(&AuctionConfig::default());
        // 300 / ceil(31 / 4) = 300 / 8
        assert_eq!(thresholds.very_high, 37);
        assert_eq!(thresholds.high, 20);
        assert_eq!(thresholds.medium, 10);
    }

    #[test]
    fn test_tier_boundaries_are_exclusive() {
        let thresholds = BidThresholds::new(&AuctionConfig::default());
        assert_eq!(thresholds.tier_of(38), BidTier::VeryHigh);
        assert_eq!(thresholds.tier_of(37), BidTier::High);
        assert_eq!(thresholds.tier_of(21), BidTier::High);
        assert_eq!(thresholds.tier_of(20), BidTier::Medium);
        assert_eq!(thresholds.tier_of(11), BidTier::Medium);
        assert_eq!(thresholds.tier_of(10), BidTier::Low);
        assert_eq!(thresholds.tier_of(1), BidTier::Low);
        assert_eq!(thresholds.tier_of(0), BidTier::Zero);
    }

    #[test]
    fn test_small_quantity() {
        let config = AuctionConfig::new(2, 100).unwrap();
        let thresholds = BidThresholds::new(&config);
        assert_eq!(thresholds.very_high, 100);
        assert_eq!(thresholds.high, 100);
        assert_eq!(thresholds.medium, 50);
    }

    #[test]
    fn test_largest_config_stays_in_range() {
        let config = AuctionConfig::new(2, crate::MAX_INITIAL_CASH).unwrap();
        let thresholds = BidThresholds::new(&config);
        assert_eq!(thresholds.high, crate::MAX_INITIAL_CASH);
        assert_eq!(thresholds.medium, crate::MAX_INITIAL_CASH / 2);
    }
}
