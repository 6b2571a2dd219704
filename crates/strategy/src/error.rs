//! Strategy errors

use auction_core::{Cash, Units};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error(
        "Win condition not met: own_quantity={own_quantity}, own_cash={own_cash}, opponent_cash={opponent_cash}"
    )]
    WinConditionNotMet {
        own_quantity: Units,
        own_cash: Cash,
        opponent_cash: Cash,
    },
}

pub type Result<T> = std::result::Result<T, StrategyError>;
