use super::{Cash, Units};
use crate::error::{ConfigError, Result};

/// Largest accepted total quantity
pub const MAX_TOTAL_QUANTITY: Units = 1_000_000;

/// Largest accepted initial cash. Keeps threshold and cost arithmetic in range.
pub const MAX_INITIAL_CASH: Cash = 1_000_000_000_000;

/// Parameters of a single auction.
///
/// Immutable once built. The quantity is always positive and even, so the
/// auction runs for exactly `total_quantity / 2` rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionConfig {
    total_quantity: Units,
    initial_cash: Cash,
}

impl AuctionConfig {
    /// Build a validated config.
    pub fn new(total_quantity: Units, initial_cash: Cash) -> Result<Self> {
        if total_quantity <= 0 {
            return Err(ConfigError::NonPositiveQuantity(total_quantity));
        }
        if total_quantity % 2 != 0 {
            return Err(ConfigError::OddQuantity(total_quantity));
        }
        if total_quantity > MAX_TOTAL_QUANTITY {
            return Err(ConfigError::QuantityTooLarge {
                value: total_quantity,
                max: MAX_TOTAL_QUANTITY,
            });
        }
        if initial_cash <= 0 {
            return Err(ConfigError::NonPositiveCash(initial_cash));
        }
        if initial_cash > MAX_INITIAL_CASH {
            return Err(ConfigError::CashTooLarge {
                value: initial_cash,
                max: MAX_INITIAL_CASH,
            });
        }

        Ok(Self {
            total_quantity,
            initial_cash,
        })
    }

    pub fn total_quantity(&self) -> Units {
        self.total_quantity
    }

    pub fn initial_cash(&self) -> Cash {
        self.initial_cash
    }

    /// Number of rounds in the auction (two units change hands per round)
    pub fn rounds(&self) -> usize {
        (self.total_quantity / 2) as usize
    }

    /// Quantity strictly above which a bidder has won outright
    pub fn half_quantity(&self) -> Units {
        self.total_quantity / 2
    }

    /// Set total quantity (builder pattern)
    pub fn with_total_quantity(self, total_quantity: Units) -> Result<Self> {
        Self::new(total_quantity, self.initial_cash)
    }

    /// Set initial cash (builder pattern)
    pub fn with_initial_cash(self, initial_cash: Cash) -> Result<Self> {
        Self::new(self.total_quantity, initial_cash)
    }
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            total_quantity: 30,
            initial_cash: 300,
        }
    }
}
