use serde::{Deserialize, Serialize};

/// Canonical player-visible state stored for each card slot.
///
/// A slot is `Selected` while face-up and unresolved, and `Matched` once its
/// pair has been found; `Matched` is permanent.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SlotState {
    Hidden,
    Selected,
    Matched,
}

impl SlotState {
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Selected | Self::Matched)
    }
}

impl Default for SlotState {
    fn default() -> Self {
        Self::Hidden
    }
}
