//! Bidder Arena
//!
//! Round-robin tournament: every bidder in the line-up meets every other
//! bidder for `repeats` auctions. A win is worth 2 points, a tie 1 point to
//! each side.

use crate::config::ArenaConfig;
use crate::error::{ArenaError, Result};
use auction_core::{AuctionConfig, AuctionOutcome, Seat};
use auction_engine::Auction;
use log::{debug, info};
use rayon::prelude::*;
use std::fmt;

const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Points scored by each side of one pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairScore {
    pub first: u64,
    pub second: u64,
}

impl PairScore {
    fn record(&mut self, outcome: AuctionOutcome) {
        self.first += outcome.points_for(Seat::First);
        self.second += outcome.points_for(Seat::Second);
    }
}

pub struct Arena {
    config: ArenaConfig,
    auction: AuctionConfig,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Result<Self> {
        let auction = config.auction_config()?;
        if config.repeats == 0 {
            return Err(ArenaError::InvalidRepeats);
        }
        if config.bidders.len() < 2 {
            return Err(ArenaError::TooFewBidders(config.bidders.len()));
        }

        Ok(Self { config, auction })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Display names of the line-up
    pub fn names(&self) -> Vec<String> {
        self.config.bidders.iter().map(|kind| kind.label()).collect()
    }

    /// Play every pairing and collect the points
    pub fn run(&self) -> Result<ScoreMatrix> {
        let n = self.config.bidders.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();

        info!(
            "Running {} pairings x {} auctions ({} QU, {} MU)",
            pairs.len(),
            self.config.repeats,
            self.auction.total_quantity(),
            self.auction.initial_cash()
        );

        // Collecting into a Result stops at the first failed pairing
        let scores: Vec<PairScore> = if self.config.parallel {
            pairs
                .par_iter()
                .map(|&(i, j)| self.run_pair(i, j))
                .collect::<Result<_>>()?
        } else {
            pairs
                .iter()
                .map(|&(i, j)| self.run_pair(i, j))
                .collect::<Result<_>>()?
        };

        let mut matrix = ScoreMatrix::new(self.names(), self.config.repeats);
        for (&(i, j), score) in pairs.iter().zip(scores) {
            matrix.points[i][j] += score.first;
            matrix.points[j][i] += score.second;
        }

        Ok(matrix)
    }

    /// Play `repeats` auctions between line-up entries `i` (first seat) and
    /// `j` (second seat) with freshly built bidders
    pub fn run_pair(&self, i: usize, j: usize) -> Result<PairScore> {
        let mut auction = self.build_auction(i, j)?;
        let (first, second) = {
            let (a, b) = auction.bidder_names();
            (a.to_string(), b.to_string())
        };

        let mut score = PairScore::default();
        for _ in 0..self.config.repeats {
            let outcome = auction.run(false).map_err(|source| ArenaError::Pairing {
                first: first.clone(),
                second: second.clone(),
                source,
            })?;
            score.record(outcome);
        }

        info!(
            "{} vs {}: {} - {} points",
            first, second, score.first, score.second
        );
        Ok(score)
    }

    /// Play a single verbose auction between line-up entries `i` and `j`
    pub fn run_single(&self, i: usize, j: usize) -> Result<AuctionOutcome> {
        let mut auction = self.build_auction(i, j)?;
        let (first, second) = {
            let (a, b) = auction.bidder_names();
            (a.to_string(), b.to_string())
        };

        info!("Single auction: {} vs {}", first, second);
        auction.run(true).map_err(|source| ArenaError::Pairing {
            first,
            second,
            source,
        })
    }

    fn build_auction(&self, i: usize, j: usize) -> Result<Auction> {
        let len = self.config.bidders.len();
        let first = self
            .config
            .bidders
            .get(i)
            .ok_or(ArenaError::UnknownBidder { index: i, len })?;
        let second = self
            .config
            .bidders
            .get(j)
            .ok_or(ArenaError::UnknownBidder { index: j, len })?;

        debug!("Building {} vs {}", first.label(), second.label());
        Ok(Auction::with_config(
            first.build(first.label(), self.bidder_seed(i, j, Seat::First)),
            second.build(second.label(), self.bidder_seed(i, j, Seat::Second)),
            self.auction,
        ))
    }

    /// Per-bidder seed derived from the arena seed, the pairing and the seat
    fn bidder_seed(&self, i: usize, j: usize, seat: Seat) -> Option<u64> {
        let n = self.config.bidders.len() as u64;
        let side = match seat {
            Seat::First => 0,
            Seat::Second => 1,
        };
        let slot = ((i as u64) * n + j as u64) * 2 + side;

        self.config
            .seed
            .map(|seed| seed.wrapping_add(slot.wrapping_add(1).wrapping_mul(SEED_MIX)))
    }
}

/// Points of every bidder against every other bidder.
///
/// `points(i, j)` is what bidder `i` scored against bidder `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    names: Vec<String>,
    repeats: usize,
    points: Vec<Vec<u64>>,
}

impl ScoreMatrix {
    fn new(names: Vec<String>, repeats: usize) -> Self {
        let n = names.len();
        Self {
            names,
            repeats,
            points: vec![vec![0; n]; n],
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn repeats(&self) -> usize {
        self.repeats
    }

    pub fn points(&self, i: usize, j: usize) -> u64 {
        self.points[i][j]
    }

    /// Share of the available points, out of 100
    pub fn percentage(&self, i: usize, j: usize) -> u64 {
        let available = (2 * self.repeats) as f64;
        (self.points[i][j] as f64 / available * 100.0).round() as u64
    }

    /// Points of bidder `i` against the whole field
    pub fn total(&self, i: usize) -> u64 {
        self.points[i].iter().sum()
    }
}

fn letter(index: usize) -> String {
    match u8::try_from(index) {
        Ok(offset) if offset < 26 => char::from(b'a' + offset).to_string(),
        _ => index.to_string(),
    }
}

impl fmt::Display for ScoreMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-- Auction Results --")?;
        writeln!(f)?;
        for (i, name) in self.names.iter().enumerate() {
            writeln!(f, "{} - {}", letter(i), name)?;
        }
        writeln!(f)?;

        write!(f, "  |")?;
        for i in 0..self.len() {
            write!(f, " {} |", letter(i))?;
        }
        writeln!(f)?;

        for i in 0..self.len() {
            write!(f, "{} |", letter(i))?;
            for j in 0..self.len() {
                write!(f, "{:>3}|", self.percentage(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
