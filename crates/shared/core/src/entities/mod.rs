mod history;
mod ledger;
mod outcome;
mod standing;

pub use history::{BidHistory, BidRecord};
pub use ledger::{Allocation, BidderLedger};
pub use outcome::{AuctionOutcome, Seat};
pub use standing::Standing;
