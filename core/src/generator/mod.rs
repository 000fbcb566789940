use crate::*;
pub use shuffle::*;

mod shuffle;

/// Produces the deck a game instance plays against; runs exactly once per
/// game, and the result is treated as immutable afterwards.
pub trait DeckGenerator {
    fn generate(self, values: &[CardId]) -> Deck;
}
