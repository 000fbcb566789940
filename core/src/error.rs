use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Slot index out of range")]
    InvalidSlot,
    #[error("Deck must contain every card value exactly twice")]
    UnbalancedDeck,
}

pub type Result<T> = core::result::Result<T, GameError>;
