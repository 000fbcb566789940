use crate::SlotIndex;

/// Grid width of the heart layout.
pub const GRID_COLS: usize = 9;

/// Grid height of the heart layout.
pub const GRID_ROWS: usize = 7;

/// Static mapping from a grid position to the slot rendered there, if any.
///
/// Purely a rendering concern with no lifecycle; it only decides which grid
/// positions are clickable and which slot each one drives.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    cells: [[Option<SlotIndex>; GRID_COLS]; GRID_ROWS],
}

/// The heart shape the widget ships with: 36 slots (18 pairs) over a 9x7
/// grid, each slot index appearing exactly once.
pub const HEART: Layout = {
    const fn s(slot: SlotIndex) -> Option<SlotIndex> {
        Some(slot)
    }
    const E: Option<SlotIndex> = None;

    Layout {
        cells: [
            [E, E, s(0), s(1), E, s(2), s(3), E, E],
            [E, s(4), s(5), s(6), s(7), s(8), s(9), s(10), E],
            [s(11), s(12), s(13), s(14), s(15), s(16), s(17), s(18), s(19)],
            [E, s(20), s(21), s(22), s(23), s(24), s(25), s(26), E],
            [E, E, s(27), s(28), s(29), s(30), s(31), E, E],
            [E, E, E, s(32), s(33), s(34), E, E, E],
            [E, E, E, E, s(35), E, E, E, E],
        ],
    }
};

impl Layout {
    pub const fn rows(&self) -> usize {
        GRID_ROWS
    }

    pub const fn cols(&self) -> usize {
        GRID_COLS
    }

    pub const fn slot_at(&self, col: usize, row: usize) -> Option<SlotIndex> {
        self.cells[row][col]
    }

    pub fn slot_count(&self) -> usize {
        self.iter_slots().count()
    }

    /// All occupied positions as `((col, row), slot)`, row-major.
    pub fn iter_slots(&self) -> impl Iterator<Item = ((usize, usize), SlotIndex)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, &slot)| slot.map(|slot| ((col, row), slot)))
        })
    }
}
