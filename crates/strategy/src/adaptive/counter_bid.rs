//! Strategy-Conditioned Counter-Bidder
//!
//! Picks the next bid given the opponent label. Every policy outbids the
//! relevant opponent average by a fixed margin, or bids nothing when doing
//! so would leave us with less cash than the opponent.
//!
//! The raw bid is always clamped to `[0, min(own_cash, opponent_cash + 1)]`.
//! Outbidding the opponent's entire remaining cash by one is always enough.

use super::classifier::OpponentStrategy;
use crate::rng::BidderRng;
use auction_core::{AuctionConfig, BidHistory, BidThresholds, Cash, Standing};

/// Bid as a percentage of an observed opponent average
const OVERBID_PERCENT: f64 = 120.0;

#[derive(Debug, Clone)]
pub struct CounterBidder {
    config: AuctionConfig,
    thresholds: BidThresholds,
}

impl CounterBidder {
    pub fn new(config: &AuctionConfig) -> Self {
        Self {
            config: *config,
            thresholds: BidThresholds::new(config),
        }
    }

    /// Next bid against an opponent labelled `strategy`
    pub fn next_bid(
        &self,
        strategy: OpponentStrategy,
        history: &BidHistory,
        standing: &Standing,
        rng: &mut BidderRng,
    ) -> Cash {
        let raw = match strategy {
            OpponentStrategy::Unknown => self.unknown_bid(rng),
            OpponentStrategy::TitForTat => self.tit_for_tat_bid(history),
            OpponentStrategy::SimpleAggressive => self.simple_aggressive_bid(history, standing),
            OpponentStrategy::SimpleConservative => self.simple_conservative_bid(history),
            OpponentStrategy::Random => self.random_bid(history, standing),
        };

        clamp_bid(raw, standing)
    }

    /// No model yet: a Gaussian bid around the mean unit bid, capped at twice it
    fn unknown_bid(&self, rng: &mut BidderRng) -> Cash {
        let mean = self.thresholds.mean_unit_bid();
        let sample = rng.gaussian(mean as f64, mean as f64 / 3.0) as Cash;
        sample.min(2 * mean)
    }

    /// The opponent echoes our last bid, so step back to zero after a high bid
    /// and otherwise lead it by the usual reply gap.
    fn tit_for_tat_bid(&self, history: &BidHistory) -> Cash {
        let Some(last) = history.last() else {
            return 0;
        };
        if last.own > self.thresholds.high {
            return 0;
        }

        let records = history.records();
        let average_offset = if records.len() < 2 {
            0
        } else {
            let total: Cash = records
                .windows(2)
                .map(|pair| (pair[0].own - pair[1].opponent).abs())
                .sum();
            total / (records.len() - 1) as Cash
        };

        ((last.own + average_offset) as f64 * OVERBID_PERCENT / 100.0) as Cash
    }

    fn simple_aggressive_bid(&self, history: &BidHistory, standing: &Standing) -> Cash {
        let high = self.thresholds.high;
        let average_high = mean(history.opponent_bids().filter(|&bid| bid >= high));
        let average_low = mean(history.opponent_bids().filter(|&bid| bid < high));

        if average_high >= self.thresholds.very_high as f64 {
            if standing.opponent_cash() > self.config.initial_cash() / 2 {
                // Let them bleed out, only contest their occasional low bids
                return if average_low > 0.0 {
                    overbid(average_low)
                } else {
                    0
                };
            }

            // Nearly broke: their recent bids show what they can still afford
            let recent: Vec<Cash> = history.opponent_bids().rev().take(2).collect();
            if recent.len() < 2 {
                return 0;
            }
            return overbid((recent[0] + recent[1]) as f64 / 2.0);
        }

        if standing.own_cash() >= standing.opponent_cash() {
            overbid(average_high)
        } else {
            0
        }
    }

    fn simple_conservative_bid(&self, history: &BidHistory) -> Cash {
        let high = self.thresholds.high;
        overbid(mean(history.opponent_bids().filter(|&bid| bid <= high)))
    }

    fn random_bid(&self, history: &BidHistory, standing: &Standing) -> Cash {
        if standing.own_cash() < standing.opponent_cash() {
            return 0;
        }
        overbid(mean(history.opponent_bids()))
    }
}

/// Clamp to `[0, min(own_cash, opponent_cash + 1)]`
pub fn clamp_bid(bid: Cash, standing: &Standing) -> Cash {
    let ceiling = standing
        .own_cash()
        .min(standing.opponent_cash().saturating_add(1))
        .max(0);
    bid.clamp(0, ceiling)
}

/// Mean of the bids, zero when there are none
fn mean(bids: impl Iterator<Item = Cash>) -> f64 {
    let (sum, count) = bids.fold((0i64, 0usize), |(sum, count), bid| {
        (sum.saturating_add(bid), count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

fn overbid(average: f64) -> Cash {
    (average * OVERBID_PERCENT / 100.0).ceil() as Cash
}
