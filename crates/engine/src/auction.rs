//! Auction Engine
//!
//! Round-based state machine for a two-bidder sealed-bid auction.
//!
//! ```text
//! NotStarted ──start──► InProgress{0} ──► ... ──► InProgress{N/2 - 1} ──► Finished
//!                             │
//!                             └── contract violation ──► Aborted
//! ```
//!
//! Each round both bidders commit a bid without seeing the other's. The
//! strictly higher bid takes both units, equal bids take one unit each, and
//! both bidders pay their own bid whatever the allocation.

use crate::error::{AuctionError, Result};
use auction_core::{
    Allocation, AuctionConfig, AuctionOutcome, BidHistory, Bidder, BidderLedger, Cash, Seat,
    Units,
};
use log::{debug, info};

/// Lifecycle of an auction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionState {
    NotStarted,
    /// Waiting for round `round` (0-based)
    InProgress {
        round: usize,
    },
    Finished,
    /// Stopped by a bidder contract violation
    Aborted,
}

/// Result of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number (0-based)
    pub round: usize,
    pub first_bid: Cash,
    pub second_bid: Cash,
    /// Allocation from the first bidder's perspective
    pub allocation: Allocation,
    /// First bidder's ledger after the round
    pub first: BidderLedger,
    /// Second bidder's ledger after the round
    pub second: BidderLedger,
}

/// Two-bidder sealed-bid auction
pub struct Auction {
    config: AuctionConfig,
    first: Box<dyn Bidder>,
    second: Box<dyn Bidder>,
    state: AuctionState,
    first_ledger: BidderLedger,
    second_ledger: BidderLedger,
    /// Bids from the first bidder's perspective
    history: BidHistory,
}

impl Auction {
    /// Create an auction, validating the parameters
    pub fn new(
        first: Box<dyn Bidder>,
        second: Box<dyn Bidder>,
        total_quantity: Units,
        initial_cash: Cash,
    ) -> Result<Self> {
        let config = AuctionConfig::new(total_quantity, initial_cash)?;
        Ok(Self::with_config(first, second, config))
    }

    /// Create an auction from an already validated config
    pub fn with_config(
        first: Box<dyn Bidder>,
        second: Box<dyn Bidder>,
        config: AuctionConfig,
    ) -> Self {
        Self {
            config,
            first,
            second,
            state: AuctionState::NotStarted,
            first_ledger: BidderLedger::new(config.initial_cash()),
            second_ledger: BidderLedger::new(config.initial_cash()),
            history: BidHistory::with_capacity(config.rounds()),
        }
    }

    pub fn config(&self) -> &AuctionConfig {
        &self.config
    }

    pub fn state(&self) -> AuctionState {
        self.state
    }

    /// Ledgers of the first and second bidder
    pub fn ledgers(&self) -> (&BidderLedger, &BidderLedger) {
        (&self.first_ledger, &self.second_ledger)
    }

    /// Completed rounds, from the first bidder's perspective
    pub fn history(&self) -> &BidHistory {
        &self.history
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    pub fn bidder_names(&self) -> (&str, &str) {
        (self.first.name(), self.second.name())
    }

    /// Give the bidders back
    pub fn into_bidders(self) -> (Box<dyn Bidder>, Box<dyn Bidder>) {
        (self.first, self.second)
    }

    /// Outcome, once every round has been played
    pub fn outcome(&self) -> Option<AuctionOutcome> {
        match self.state {
            AuctionState::Finished => Some(AuctionOutcome::from_ledgers(
                &self.first_ledger,
                &self.second_ledger,
            )),
            _ => None,
        }
    }

    /// Initialise both bidders and reset the ledgers. Restarts a finished or
    /// aborted auction.
    pub fn start(&mut self) {
        self.first.init(&self.config);
        self.second.init(&self.config);

        self.first_ledger = BidderLedger::new(self.config.initial_cash());
        self.second_ledger = BidderLedger::new(self.config.initial_cash());
        self.history = BidHistory::with_capacity(self.config.rounds());
        self.state = AuctionState::InProgress { round: 0 };
    }

    /// Play the next round. Starts the auction if needed.
    pub fn play_round(&mut self) -> Result<RoundReport> {
        let round = match self.state {
            AuctionState::NotStarted => {
                self.start();
                0
            }
            AuctionState::InProgress { round } => round,
            AuctionState::Finished | AuctionState::Aborted => {
                return Err(AuctionError::AlreadyFinished {
                    rounds: self.history.len(),
                });
            }
        };

        // Sealed bids: neither bidder sees the other's bid before committing
        let first_bid = self.first.place_bid();
        let second_bid = self.second.place_bid();

        if let Err(err) = self
            .validate(Seat::First, round, first_bid)
            .and_then(|_| self.validate(Seat::Second, round, second_bid))
        {
            self.state = AuctionState::Aborted;
            return Err(err);
        }

        let allocation = self.first_ledger.apply_round(first_bid, second_bid);
        self.second_ledger.apply_round(second_bid, first_bid);
        self.history.push(first_bid, second_bid);

        self.first.notify(first_bid, second_bid);
        self.second.notify(second_bid, first_bid);

        debug!(
            "Round {}: {}={} {}={} -> {:?}",
            round + 1,
            self.first.name(),
            first_bid,
            self.second.name(),
            second_bid,
            allocation
        );

        self.state = if round + 1 >= self.config.rounds() {
            AuctionState::Finished
        } else {
            AuctionState::InProgress { round: round + 1 }
        };

        Ok(RoundReport {
            round,
            first_bid,
            second_bid,
            allocation,
            first: self.first_ledger,
            second: self.second_ledger,
        })
    }

    /// Run a complete auction from a fresh start.
    ///
    /// With `verbose`, a per-round trace and the final summary are logged at
    /// info level.
    pub fn run(&mut self, verbose: bool) -> Result<AuctionOutcome> {
        self.start();
        let rounds = self.config.rounds();

        for _ in 0..rounds {
            let report = self.play_round()?;
            if verbose {
                info!(
                    "Round {}/{}: Bidder 1 bids {}, Bidder 2 bids {}",
                    report.round + 1,
                    rounds,
                    report.first_bid,
                    report.second_bid
                );
            }
        }

        let outcome = AuctionOutcome::from_ledgers(&self.first_ledger, &self.second_ledger);
        if verbose {
            self.log_summary(outcome);
        }
        Ok(outcome)
    }

    fn validate(&self, seat: Seat, round: usize, bid: Cash) -> Result<()> {
        let (bidder, ledger) = match seat {
            Seat::First => (&self.first, &self.first_ledger),
            Seat::Second => (&self.second, &self.second_ledger),
        };

        if bid < 0 {
            return Err(AuctionError::NegativeBid {
                seat,
                bidder: bidder.name().to_string(),
                round,
                bid,
            });
        }
        if !ledger.can_afford(bid) {
            return Err(AuctionError::Overdraft {
                seat,
                bidder: bidder.name().to_string(),
                round,
                bid,
                cash: ledger.cash_remaining,
            });
        }
        Ok(())
    }

    fn log_summary(&self, outcome: AuctionOutcome) {
        info!("-- Auction Results --");
        info!(
            "Bidder 1 ({}): {} QU, {} MU remaining",
            self.first.name(),
            self.first_ledger.quantity_won,
            self.first_ledger.cash_remaining
        );
        info!(
            "Bidder 2 ({}): {} QU, {} MU remaining",
            self.second.name(),
            self.second_ledger.quantity_won,
            self.second_ledger.cash_remaining
        );
        info!("{}!", outcome);
    }
}
