#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use slot::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod layout;
mod slot;
mod types;

/// The fixed, shuffled-once sequence of card values a game is played against.
///
/// Indexed by [`SlotIndex`], the stable identity of a position; the deck never
/// changes for the lifetime of a game instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<CardId>,
}

impl Deck {
    /// Builds a deck from an explicit ordering, checking that every card
    /// value appears exactly twice.
    pub fn from_cards(cards: Vec<CardId>) -> Result<Self> {
        for &card in &cards {
            let copies = cards.iter().filter(|&&other| other == card).count();
            if copies != 2 {
                return Err(GameError::UnbalancedDeck);
            }
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> SlotCount {
        self.cards.len().try_into().unwrap()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pair_count(&self) -> SlotCount {
        self.len() / 2
    }

    pub fn validate_slot(&self, slot: SlotIndex) -> Result<SlotIndex> {
        if slot < self.len() {
            Ok(slot)
        } else {
            Err(GameError::InvalidSlot)
        }
    }

    pub fn card_at(&self, slot: SlotIndex) -> CardId {
        self[slot]
    }
}

impl Index<SlotIndex> for Deck {
    type Output = CardId;

    fn index(&self, slot: SlotIndex) -> &Self::Output {
        &self.cards[usize::from(slot)]
    }
}

/// Outcome of selecting a slot
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Revealed,
    Matched,
    Mismatched,
    Won,
}

impl SelectOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Matched => true,
            Mismatched => true,
            Won => true,
        }
    }
}

/// Outcome of resolving a pending mismatch or expiring the wrong-guess cue
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn deck_accepts_every_value_exactly_twice() {
        let deck = Deck::from_cards(vec![3, 7, 3, 9, 9, 7]).unwrap();

        assert_eq!(deck.len(), 6);
        assert_eq!(deck.pair_count(), 3);
        assert_eq!(deck[0], 3);
        assert_eq!(deck.card_at(5), 7);
    }

    #[test]
    fn deck_rejects_unpaired_values() {
        assert_eq!(
            Deck::from_cards(vec![0, 0, 1]),
            Err(GameError::UnbalancedDeck)
        );
        assert_eq!(
            Deck::from_cards(vec![5, 5, 5, 5]),
            Err(GameError::UnbalancedDeck)
        );
    }

    #[test]
    fn slot_validation_bounds() {
        let deck = Deck::from_cards(vec![1, 1]).unwrap();

        assert_eq!(deck.validate_slot(1), Ok(1));
        assert_eq!(deck.validate_slot(2), Err(GameError::InvalidSlot));
    }

    #[test]
    fn only_no_change_outcomes_skip_updates() {
        assert!(!SelectOutcome::NoChange.has_update());
        assert!(SelectOutcome::Won.has_update());
        assert!(!FlagOutcome::NoChange.has_update());
        assert!(FlagOutcome::Changed.has_update());
    }
}
