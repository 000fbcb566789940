use super::*;
use alloc::vec::Vec;

/// Fair-shuffle deck builder: doubles every card value, then runs an
/// in-place Fisher-Yates pass from the last index down to 1 so each ordering
/// of the doubled deck is equiprobable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShuffledDeckGenerator {
    seed: u64,
}

impl ShuffledDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(self, values: &[CardId]) -> Deck {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        for (i, &value) in values.iter().enumerate() {
            if values[..i].contains(&value) {
                log::warn!("duplicate card value {} in source list, generated anyway", value);
            }
        }

        let mut cards: Vec<CardId> = Vec::with_capacity(values.len() * 2);
        for &value in values {
            cards.push(value);
            cards.push(value);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for i in (1..cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            cards.swap(i, j);
        }

        Deck { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn every_value_appears_exactly_twice() {
        let values: Vec<CardId> = (0..18).collect();
        let deck = ShuffledDeckGenerator::new(99).generate(&values);

        assert_eq!(deck.len(), 36);
        for slot in 0..deck.len() {
            let card = deck[slot];
            let copies = (0..deck.len()).filter(|&other| deck[other] == card).count();
            assert_eq!(copies, 2, "card {} appears {} times", card, copies);
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_deck() {
        let values: Vec<CardId> = (0..8).collect();

        let a = ShuffledDeckGenerator::new(42).generate(&values);
        let b = ShuffledDeckGenerator::new(42).generate(&values);
        let c = ShuffledDeckGenerator::new(43).generate(&values);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn first_slot_is_approximately_uniform_over_seeds() {
        // P = 2 gives P(deck[0] == 0) = 1/2; over 4000 seeded trials the
        // count should land well inside 1800..=2200 (sigma ~ 32).
        let hits = (0..4000u64)
            .map(|seed| ShuffledDeckGenerator::new(seed).generate(&[0, 1]))
            .filter(|deck| deck[0] == 0)
            .count();

        assert!(
            (1800..=2200).contains(&hits),
            "first-slot distribution skewed: {} / 4000",
            hits
        );
    }

    #[test]
    fn generated_deck_passes_external_validation() {
        let values: Vec<CardId> = (0..5).collect();
        let deck = ShuffledDeckGenerator::new(7).generate(&values);

        assert!(Deck::from_cards((0..deck.len()).map(|slot| deck[slot]).collect()).is_ok());
    }
}
