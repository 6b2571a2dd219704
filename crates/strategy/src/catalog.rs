//! Bidder Catalog
//!
//! Serializable description of every bidder this crate provides, so line-ups
//! can be declared in configuration and built fresh for each pairing.

use crate::adaptive::{AdaptiveBidder, AdaptiveBidderConfig};
use crate::constant_ratio::{ConstantRatioBidder, EVEN_SPLIT_RATIO, HIGH_RATIO};
use crate::random::{AdaptiveRandomBidder, RandomBidder, RandomBidderConfig};
use crate::reactive::ReactiveBidder;
use auction_core::Bidder;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BidderKind {
    /// Fixed multiple of `cash / quantity`
    ConstantRatio { ratio: i64 },
    /// Gaussian around the even-split bid
    Random,
    /// Previous opponent bid plus one
    Reactive,
    /// Gaussian around what is left, closes out wins
    AdaptiveRandom,
    /// Opponent-modelling bidder
    Adaptive,
}

impl BidderKind {
    /// Default display name
    pub fn label(&self) -> String {
        match self {
            BidderKind::ConstantRatio { ratio } if *ratio == EVEN_SPLIT_RATIO => {
                "SimpleBidder".to_string()
            }
            BidderKind::ConstantRatio { ratio } if *ratio == HIGH_RATIO => {
                "SimpleHighBidder".to_string()
            }
            BidderKind::ConstantRatio { ratio } => format!("ConstantRatioBidder(x{})", ratio),
            BidderKind::Random => "RandomBidder".to_string(),
            BidderKind::Reactive => "TitForTatBidder".to_string(),
            BidderKind::AdaptiveRandom => "AdaptiveRandomBidder".to_string(),
            BidderKind::Adaptive => "AdaptiveBidder".to_string(),
        }
    }

    /// Build a fresh bidder. Deterministic bidders ignore the seed.
    pub fn build(&self, name: impl Into<String>, seed: Option<u64>) -> Box<dyn Bidder> {
        let name = name.into();
        match self {
            BidderKind::ConstantRatio { ratio } => Box::new(ConstantRatioBidder::new(name, *ratio)),
            BidderKind::Random => Box::new(RandomBidder::new(
                name,
                RandomBidderConfig {
                    seed,
                    ..Default::default()
                },
            )),
            BidderKind::Reactive => Box::new(ReactiveBidder::new(name)),
            BidderKind::AdaptiveRandom => Box::new(AdaptiveRandomBidder::new(
                name,
                RandomBidderConfig {
                    seed,
                    ..Default::default()
                },
            )),
            BidderKind::Adaptive => {
                Box::new(AdaptiveBidder::new(name, AdaptiveBidderConfig { seed }))
            }
        }
    }

    /// Every bidder kind, in tournament order
    pub fn lineup() -> Vec<BidderKind> {
        vec![
            BidderKind::ConstantRatio {
                ratio: EVEN_SPLIT_RATIO,
            },
            BidderKind::Random,
            BidderKind::Reactive,
            BidderKind::AdaptiveRandom,
            BidderKind::ConstantRatio { ratio: HIGH_RATIO },
            BidderKind::Adaptive,
        ]
    }
}
