use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Player name `{0}` is used more than once")]
    DuplicatePlayerName(String),
    #[error("Win goal must be at least 1, got {0}")]
    InvalidWinGoal(u32),
    #[error("Card number {0} is outside 0..=9")]
    InvalidCardNumber(u8),
    #[error("Deck composition has no colored cards")]
    NoColoredCards,
    #[error("Player `{0}` is not part of this match")]
    UnknownPlayer(String),
    #[error("Deck ran out before a starting card could be revealed")]
    NoStartingCard,
    #[error("The round is already over")]
    RoundOver,
    #[error("The match already has a winner")]
    MatchOver,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
