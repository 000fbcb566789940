use alloc::vec;
use alloc::vec::Vec;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Complete,
}

impl GameState {
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// The face-up, unresolved slots. Capped at two by construction; `Pending`
/// is a mismatch waiting out its reveal delay.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
enum Selection {
    Empty,
    One(SlotIndex),
    Pending(SlotIndex, SlotIndex),
}

/// Selection/match state machine over a fixed deck.
///
/// Processes one click at a time via [`select_slot`](Self::select_slot); the
/// two delayed steps of a wrong guess are driven by the host calling
/// [`resolve_mismatch`](Self::resolve_mismatch) after the reveal delay and
/// [`expire_incorrect`](Self::expire_incorrect) after the cue delay. Both are
/// no-ops when nothing is pending, so a stale timer callback is harmless.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    deck: Deck,
    slots: Vec<SlotState>,
    selection: Selection,
    incorrect: Option<(SlotIndex, SlotIndex)>,
    matched_count: Saturating<SlotCount>,
    state: GameState,
}

impl MatchEngine {
    pub fn new(deck: Deck) -> Self {
        let slot_total = usize::from(deck.len());
        Self {
            deck,
            slots: vec![SlotState::Hidden; slot_total],
            selection: Selection::Empty,
            incorrect: None,
            matched_count: Saturating(0),
            state: Default::default(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn slot_total(&self) -> SlotCount {
        self.deck.len()
    }

    pub fn matched_count(&self) -> SlotCount {
        self.matched_count.0
    }

    pub fn slot_state(&self, slot: SlotIndex) -> SlotState {
        self.slots[usize::from(slot)]
    }

    pub fn card_at(&self, slot: SlotIndex) -> CardId {
        self.deck[slot]
    }

    /// Card value at `slot`, only while the slot is face-up.
    pub fn revealed_card_at(&self, slot: SlotIndex) -> Option<CardId> {
        self.slot_state(slot).is_face_up().then(|| self.deck[slot])
    }

    pub fn is_incorrect(&self, slot: SlotIndex) -> bool {
        matches!(self.incorrect, Some((a, b)) if a == slot || b == slot)
    }

    pub fn incorrect_pair(&self) -> Option<(SlotIndex, SlotIndex)> {
        self.incorrect
    }

    /// The mismatch currently waiting out its reveal delay, if any.
    pub fn pending_mismatch(&self) -> Option<(SlotIndex, SlotIndex)> {
        match self.selection {
            Selection::Pending(first, second) => Some((first, second)),
            _ => None,
        }
    }

    pub fn can_select_at(&self, slot: SlotIndex) -> bool {
        if self.state.is_complete() {
            return false;
        }
        if matches!(self.selection, Selection::Pending(_, _)) {
            return false;
        }
        self.deck.validate_slot(slot).is_ok()
            && matches!(self.slot_state(slot), SlotState::Hidden)
    }

    /// The only externally triggered transition: flips `slot` face-up and, on
    /// a second selection, decides match or mismatch.
    ///
    /// All precondition violations over in-range slots (selection already
    /// full, slot already matched, slot already selected) are silent no-ops
    /// returning [`SelectOutcome::NoChange`]; only an out-of-range index is
    /// an error.
    pub fn select_slot(&mut self, slot: SlotIndex) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        let slot = self.deck.validate_slot(slot)?;

        if self.state.is_complete() {
            return Ok(NoChange);
        }
        if matches!(self.slot_state(slot), SlotState::Matched) {
            return Ok(NoChange);
        }

        Ok(match self.selection {
            Selection::Pending(_, _) => NoChange,
            Selection::One(first) if first == slot => NoChange,
            Selection::Empty => {
                self.slots[usize::from(slot)] = SlotState::Selected;
                self.selection = Selection::One(slot);
                log::debug!("slot {} face-up, card {}", slot, self.deck[slot]);
                Revealed
            }
            Selection::One(first) => {
                self.slots[usize::from(slot)] = SlotState::Selected;

                if self.deck[first] == self.deck[slot] {
                    self.slots[usize::from(first)] = SlotState::Matched;
                    self.slots[usize::from(slot)] = SlotState::Matched;
                    self.selection = Selection::Empty;
                    self.matched_count += 2;
                    log::debug!(
                        "matched card {} at slots {} and {}",
                        self.deck[slot],
                        first,
                        slot
                    );

                    if self.matched_count == Saturating(self.deck.len()) {
                        self.complete_game();
                        Won
                    } else {
                        Matched
                    }
                } else {
                    self.selection = Selection::Pending(first, slot);
                    log::debug!("mismatch at slots {} and {}", first, slot);
                    Mismatched
                }
            }
        })
    }

    /// Flips a pending mismatch back face-down and raises the wrong-guess cue
    /// on exactly that pair, replacing any pair still flagged from an earlier
    /// miss. New selections are legal again as soon as this returns.
    pub fn resolve_mismatch(&mut self) -> FlagOutcome {
        use FlagOutcome::*;

        let Selection::Pending(first, second) = self.selection else {
            return NoChange;
        };

        self.slots[usize::from(first)] = SlotState::Hidden;
        self.slots[usize::from(second)] = SlotState::Hidden;
        self.selection = Selection::Empty;
        self.incorrect = Some((first, second));
        log::debug!("mismatch resolved, slots {} and {} face-down", first, second);
        Changed
    }

    /// Clears the wrong-guess cue; independent of any other event.
    pub fn expire_incorrect(&mut self) -> FlagOutcome {
        use FlagOutcome::*;

        if self.incorrect.take().is_some() {
            Changed
        } else {
            NoChange
        }
    }

    fn complete_game(&mut self) {
        if self.state.is_complete() {
            return;
        }
        self.state = GameState::Complete;
        log::debug!("all {} pairs matched, game complete", self.deck.pair_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(cards: &[CardId]) -> MatchEngine {
        MatchEngine::new(Deck::from_cards(cards.to_vec()).unwrap())
    }

    #[test]
    fn first_selection_flips_one_slot_face_up() {
        let mut engine = engine(&[0, 1, 0, 1]);

        assert_eq!(engine.select_slot(0), Ok(SelectOutcome::Revealed));
        assert_eq!(engine.slot_state(0), SlotState::Selected);
        assert_eq!(engine.revealed_card_at(0), Some(0));
        assert_eq!(engine.revealed_card_at(1), None);
    }

    #[test]
    fn equal_values_match_synchronously() {
        let mut engine = engine(&[0, 1, 0, 1]);

        engine.select_slot(0).unwrap();
        assert_eq!(engine.select_slot(2), Ok(SelectOutcome::Matched));

        assert_eq!(engine.slot_state(0), SlotState::Matched);
        assert_eq!(engine.slot_state(2), SlotState::Matched);
        assert_eq!(engine.matched_count(), 2);
        assert!(!engine.is_complete());
        // selection cleared immediately, no pending resolution
        assert_eq!(engine.pending_mismatch(), None);
        assert_eq!(engine.resolve_mismatch(), FlagOutcome::NoChange);
    }

    #[test]
    fn last_match_completes_the_game_exactly_once() {
        let mut engine = engine(&[0, 1, 0, 1]);

        engine.select_slot(0).unwrap();
        engine.select_slot(2).unwrap();
        engine.select_slot(1).unwrap();
        assert_eq!(engine.select_slot(3), Ok(SelectOutcome::Won));

        assert!(engine.is_complete());
        assert_eq!(engine.matched_count(), engine.slot_total());

        // monotonic: nothing after completion produces another outcome
        assert_eq!(engine.select_slot(0), Ok(SelectOutcome::NoChange));
        assert_eq!(engine.select_slot(3), Ok(SelectOutcome::NoChange));
        assert_eq!(engine.state(), GameState::Complete);
    }

    #[test]
    fn mismatch_stays_face_up_until_resolved() {
        let mut engine = engine(&[0, 1, 1, 0]);

        engine.select_slot(0).unwrap();
        assert_eq!(engine.select_slot(1), Ok(SelectOutcome::Mismatched));

        assert_eq!(engine.slot_state(0), SlotState::Selected);
        assert_eq!(engine.slot_state(1), SlotState::Selected);
        assert_eq!(engine.pending_mismatch(), Some((0, 1)));
        // a third click while two are up is a no-op
        assert_eq!(engine.select_slot(2), Ok(SelectOutcome::NoChange));
        assert_eq!(engine.slot_state(2), SlotState::Hidden);

        assert_eq!(engine.resolve_mismatch(), FlagOutcome::Changed);
        assert_eq!(engine.slot_state(0), SlotState::Hidden);
        assert_eq!(engine.slot_state(1), SlotState::Hidden);
        assert_eq!(engine.incorrect_pair(), Some((0, 1)));
        assert!(engine.is_incorrect(0));
        assert!(engine.is_incorrect(1));
        assert_eq!(engine.matched_count(), 0);

        // the cue does not block new selections
        assert!(engine.can_select_at(2));
        assert_eq!(engine.select_slot(2), Ok(SelectOutcome::Revealed));

        assert_eq!(engine.expire_incorrect(), FlagOutcome::Changed);
        assert!(!engine.is_incorrect(0));
        assert_eq!(engine.expire_incorrect(), FlagOutcome::NoChange);
    }

    #[test]
    fn repeat_and_matched_slot_clicks_are_no_ops() {
        let mut engine = engine(&[0, 1, 0, 1]);

        engine.select_slot(0).unwrap();
        assert_eq!(engine.select_slot(0), Ok(SelectOutcome::NoChange));

        engine.select_slot(2).unwrap();
        assert_eq!(engine.select_slot(0), Ok(SelectOutcome::NoChange));
        assert_eq!(engine.select_slot(2), Ok(SelectOutcome::NoChange));
        assert_eq!(engine.slot_state(0), SlotState::Matched);
    }

    #[test]
    fn out_of_range_slot_is_rejected() {
        let mut engine = engine(&[0, 0]);

        assert_eq!(engine.select_slot(2), Err(GameError::InvalidSlot));
        assert!(!engine.can_select_at(2));
    }

    #[test]
    fn stale_timer_calls_are_harmless() {
        let mut engine = engine(&[0, 1, 0, 1]);

        assert_eq!(engine.resolve_mismatch(), FlagOutcome::NoChange);
        assert_eq!(engine.expire_incorrect(), FlagOutcome::NoChange);
        assert_eq!(engine.slot_state(0), SlotState::Hidden);
    }

    #[test]
    fn later_mismatch_replaces_the_flagged_pair() {
        let mut engine = engine(&[0, 1, 1, 0]);

        engine.select_slot(0).unwrap();
        engine.select_slot(1).unwrap();
        engine.resolve_mismatch();
        assert_eq!(engine.incorrect_pair(), Some((0, 1)));

        // second miss before the first cue expires
        engine.select_slot(2).unwrap();
        engine.select_slot(3).unwrap();
        assert_eq!(engine.resolve_mismatch(), FlagOutcome::Changed);

        assert_eq!(engine.incorrect_pair(), Some((2, 3)));
        assert!(!engine.is_incorrect(0));
        assert!(engine.is_incorrect(2));
    }

    #[test]
    fn selection_is_blocked_while_a_mismatch_is_pending() {
        let mut engine = engine(&[0, 1, 1, 0]);

        engine.select_slot(0).unwrap();
        engine.select_slot(1).unwrap();

        assert!(!engine.can_select_at(2));
        engine.resolve_mismatch();
        assert!(engine.can_select_at(2));
    }

    #[test]
    fn mid_game_state_survives_a_serde_round_trip() {
        let mut engine = engine(&[0, 1, 0, 1]);

        engine.select_slot(0).unwrap();
        engine.select_slot(2).unwrap();
        engine.select_slot(1).unwrap();

        let json = serde_json::to_string(&engine).unwrap();
        let restored: MatchEngine = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, engine);
        assert_eq!(restored.matched_count(), 2);
        assert_eq!(restored.slot_state(1), SlotState::Selected);
    }
}
