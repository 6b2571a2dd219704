//! Auction Runner - Bidder Arena
//!
//! Pits every bidder in a line-up against every other bidder over many
//! repeated auctions and reports the share of points each one takes:
//!
//! - **ArenaConfig**: auction parameters, repeat count, seed and line-up
//! - **Arena**: round-robin driver, sequential or on the rayon thread pool
//! - **ScoreMatrix**: points and percentages, printable as a lettered matrix
//!
//! ## Architecture
//!
//! ```text
//!   ArenaConfig ──► Arena ──► for each pair (i, j), i < j
//!                               │
//!                               │ BidderKind::build (fresh, seeded)
//!                               ▼
//!                     ┌───────────────────┐
//!                     │  Auction × repeats│──► AuctionOutcome
//!                     └─────────┬─────────┘
//!                               │ 2 per win, 1 per tie
//!                               ▼
//!                          ScoreMatrix
//! ```

pub mod arena;
pub mod config;
pub mod error;

// Re-export main types
pub use arena::{Arena, PairScore, ScoreMatrix};
pub use config::ArenaConfig;
pub use error::{ArenaError, Result};
