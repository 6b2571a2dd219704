//! Opponent Strategy Classifier
//!
//! Labels the opponent's bidding pattern from the bid history seen so far.
//! The label is recomputed from the full history every round and carries no
//! hidden state, so identical histories always give identical labels.
//!
//! Scores are checked in priority order:
//! 1. tit-for-tat: own bids echoed by the opponent bids one round apart
//! 2. simple aggressive: most opponent bids in the high tiers
//! 3. simple conservative: most opponent bids in the low tiers
//! 4. anything else is random

use auction_core::{AuctionConfig, BidHistory, BidThresholds, BidTier};

/// Minimum number of completed rounds before classifying
pub const MIN_HISTORY: usize = 2;

/// Score at or above which a label is assigned
pub const TIT_FOR_TAT_THRESHOLD: f64 = 0.8;
pub const SIMPLE_AGGRESSIVE_THRESHOLD: f64 = 0.8;
pub const SIMPLE_CONSERVATIVE_THRESHOLD: f64 = 0.8;

/// A tier group below this share of all bids scores zero
const MAJORITY: f64 = 0.5;

/// Best guess at the opponent's bidding policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpponentStrategy {
    SimpleAggressive,
    SimpleConservative,
    TitForTat,
    Random,
    Unknown,
}

impl std::fmt::Display for OpponentStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OpponentStrategy::SimpleAggressive => "simple-aggressive",
            OpponentStrategy::SimpleConservative => "simple-conservative",
            OpponentStrategy::TitForTat => "tit-for-tat",
            OpponentStrategy::Random => "random",
            OpponentStrategy::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Per-label scores in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrategyScores {
    pub tit_for_tat: f64,
    pub simple_aggressive: f64,
    pub simple_conservative: f64,
}

impl StrategyScores {
    /// Pick the label by fixed priority
    pub fn label(&self) -> OpponentStrategy {
        if self.tit_for_tat >= TIT_FOR_TAT_THRESHOLD {
            OpponentStrategy::TitForTat
        } else if self.simple_aggressive >= SIMPLE_AGGRESSIVE_THRESHOLD {
            OpponentStrategy::SimpleAggressive
        } else if self.simple_conservative >= SIMPLE_CONSERVATIVE_THRESHOLD {
            OpponentStrategy::SimpleConservative
        } else {
            OpponentStrategy::Random
        }
    }
}

/// Opponent bid counts per magnitude tier. Zero bids are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TierCounts {
    very_high: usize,
    high: usize,
    medium: usize,
    low: usize,
}

#[derive(Debug, Clone)]
pub struct OpponentClassifier {
    thresholds: BidThresholds,
}

impl OpponentClassifier {
    pub fn new(config: &AuctionConfig) -> Self {
        Self {
            thresholds: BidThresholds::new(config),
        }
    }

    /// Label the opponent given the history so far
    pub fn classify(&self, history: &BidHistory) -> OpponentStrategy {
        self.assess(history).0
    }

    /// Label together with the scores it was derived from
    pub fn assess(&self, history: &BidHistory) -> (OpponentStrategy, StrategyScores) {
        if history.len() < MIN_HISTORY {
            return (OpponentStrategy::Unknown, StrategyScores::default());
        }
        let scores = self.scores(history);
        (scores.label(), scores)
    }

    pub fn scores(&self, history: &BidHistory) -> StrategyScores {
        if history.len() < MIN_HISTORY {
            return StrategyScores::default();
        }

        let counts = self.tier_counts(history);
        let total = history.len() as f64;

        StrategyScores {
            tit_for_tat: self.tit_for_tat_score(history),
            simple_aggressive: majority_share(counts.very_high + counts.high, total),
            simple_conservative: majority_share(counts.medium + counts.low, total),
        }
    }

    /// Average closeness between each own bid and the opponent bid one round
    /// earlier.
    ///
    /// Closeness is 1.0 for equal bids and falls linearly to 0.0 once the gap
    /// reaches half the even-split bid.
    pub fn tit_for_tat_score(&self, history: &BidHistory) -> f64 {
        let records = history.records();
        if records.len() < MIN_HISTORY {
            return 0.0;
        }

        let tolerance = self.thresholds.even_split_bid() as f64 / 2.0;
        let total: f64 = records
            .windows(2)
            .map(|pair| {
                let gap = (pair[1].own - pair[0].opponent).abs() as f64;
                closeness(gap, tolerance)
            })
            .sum();

        total / (records.len() - 1) as f64
    }

    fn tier_counts(&self, history: &BidHistory) -> TierCounts {
        let mut counts = TierCounts::default();
        for bid in history.opponent_bids() {
            match self.thresholds.tier_of(bid) {
                BidTier::VeryHigh => counts.very_high += 1,
                BidTier::High => counts.high += 1,
                BidTier::Medium => counts.medium += 1,
                BidTier::Low => counts.low += 1,
                BidTier::Zero => {}
            }
        }
        counts
    }
}

fn closeness(gap: f64, tolerance: f64) -> f64 {
    if tolerance <= 0.0 {
        return if gap == 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - gap / tolerance).max(0.0)
}

/// Share of `count` in `total`, or zero when it is not a majority
fn majority_share(count: usize, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    let share = count as f64 / total;
    if share < MAJORITY { 0.0 } else { share }
}
