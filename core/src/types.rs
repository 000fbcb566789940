/// Opaque identifier for one photo asset; equality is its only structure.
pub type CardId = u8;

/// Stable position identity for a card slot; never changes, unlike the card
/// value it reveals.
pub type SlotIndex = u8;

/// Count type used for slot totals and matched totals.
pub type SlotCount = u8;
