//! Arena configuration
//!
//! Loadable from JSON. Every field is optional:
//!
//! ```json
//! {
//!   "total_quantity": 30,
//!   "initial_cash": 300,
//!   "repeats": 5000,
//!   "seed": 42,
//!   "parallel": true,
//!   "bidders": [
//!     { "type": "constant_ratio", "ratio": 2 },
//!     { "type": "reactive" },
//!     { "type": "adaptive" }
//!   ]
//! }
//! ```

use crate::error::{ArenaError, Result};
use auction_core::{AuctionConfig, Cash, Units};
use auction_strategy::BidderKind;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArenaConfig {
    /// Units sold in each auction
    #[serde(default = "default_total_quantity")]
    pub total_quantity: Units,

    /// Cash each bidder starts an auction with
    #[serde(default = "default_initial_cash")]
    pub initial_cash: Cash,

    /// Auctions played per pairing
    #[serde(default = "default_repeats")]
    pub repeats: usize,

    /// Root seed for the random bidders; `None` seeds from entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Run pairings on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Line-up, in matrix order
    #[serde(default = "BidderKind::lineup")]
    pub bidders: Vec<BidderKind>,
}

fn default_total_quantity() -> Units {
    30
}

fn default_initial_cash() -> Cash {
    300
}

fn default_repeats() -> usize {
    5000
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            total_quantity: default_total_quantity(),
            initial_cash: default_initial_cash(),
            repeats: default_repeats(),
            seed: None,
            parallel: false,
            bidders: BidderKind::lineup(),
        }
    }
}

impl ArenaConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ArenaError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ArenaError::Parse(e.to_string()))
    }

    pub fn with_auction(mut self, total_quantity: Units, initial_cash: Cash) -> Self {
        self.total_quantity = total_quantity;
        self.initial_cash = initial_cash;
        self
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_bidders(mut self, bidders: Vec<BidderKind>) -> Self {
        self.bidders = bidders;
        self
    }

    /// Validated parameters for each auction
    pub fn auction_config(&self) -> Result<AuctionConfig> {
        Ok(AuctionConfig::new(self.total_quantity, self.initial_cash)?)
    }
}
