//! Auction Engine
//!
//! Runs a repeated sealed-bid auction between two [`auction_core::Bidder`]s:
//!
//! - **Auction**: round loop, allocation and ledger bookkeeping
//! - **AuctionError**: bidder contract violations and invalid parameters
//!
//! ## Usage
//!
//! ```rust,ignore
//! use auction_engine::Auction;
//!
//! let mut auction = Auction::new(first, second, 30, 300)?;
//! let outcome = auction.run(true)?;
//! ```

pub mod auction;
pub mod error;

// Re-export main types
pub use auction::{Auction, AuctionState, RoundReport};
pub use error::{AuctionError, Result};
