use crate::game::GameDefinition;
use crate::shuffle::shuffle;
use rand::Rng;

/// The reorder surface as pure data: the current top-to-bottom order plus the
/// row being dragged, if any. Platform events (mouse, keys) bind to these
/// operations through the TUI adapter; nothing here touches the terminal.
///
/// The board's length is fixed at construction. Drags reorder in place; there
/// is no insert or remove.
#[derive(Debug, Clone)]
pub struct Board {
    items: Vec<String>,
    active: Option<usize>,
}

impl Board {
    pub fn new(items: Vec<String>) -> Self {
        Self { items, active: None }
    }

    /// A fresh board holding the definition's items in uniformly random order.
    pub fn shuffled<R: Rng>(def: &GameDefinition, rng: &mut R) -> Self {
        let mut items = def.labels();
        shuffle(&mut items, rng);
        Self::new(items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current top-to-bottom order. This is the ground truth read at submit.
    pub fn order(&self) -> &[String] {
        &self.items
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Mark the row at `index` as the one being dragged.
    pub fn begin_drag(&mut self, index: usize) {
        if index < self.items.len() {
            self.active = Some(index);
        }
    }

    /// Reinsert the active row for the current pointer position.
    ///
    /// `midpoints[k]` is the vertical midpoint of the k-th non-active row, in
    /// the order shown with the active row removed. The active row lands
    /// immediately before the row whose midpoint is nearest below the pointer
    /// (strictly greater y), or at the end when no midpoint is below. Called
    /// on every move event, so the order is always committed mid-drag.
    pub fn drag_to(&mut self, pointer_y: f32, midpoints: &[f32]) {
        let Some(active) = self.active else {
            return;
        };
        debug_assert_eq!(midpoints.len(), self.items.len().saturating_sub(1));

        let item = self.items.remove(active);
        let dest = insertion_index(pointer_y, midpoints).unwrap_or(self.items.len());
        self.items.insert(dest, item);
        self.active = Some(dest);
    }

    /// Clear the drag mark. The order was already committed by `drag_to`;
    /// there is no cancel.
    pub fn end_drag(&mut self) {
        self.active = None;
    }

    /// Keyboard path: swap the active row with the one above it.
    pub fn move_active_up(&mut self) {
        if let Some(i) = self.active {
            if i > 0 {
                self.items.swap(i, i - 1);
                self.active = Some(i - 1);
            }
        }
    }

    /// Keyboard path: swap the active row with the one below it.
    pub fn move_active_down(&mut self) {
        if let Some(i) = self.active {
            if i + 1 < self.items.len() {
                self.items.swap(i, i + 1);
                self.active = Some(i + 1);
            }
        }
    }
}

/// Index of the non-active row whose midpoint is the nearest one strictly
/// below `pointer_y` (screen y grows downward, so "below" means a greater y).
/// None when the pointer is below every row.
fn insertion_index(pointer_y: f32, midpoints: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (k, &mid) in midpoints.iter().enumerate() {
        let offset = pointer_y - mid;
        if offset < 0.0 {
            match best {
                Some((_, best_offset)) if offset <= best_offset => {}
                _ => best = Some((k, offset)),
            }
        }
    }
    best.map(|(k, _)| k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board(labels: &[&str]) -> Board {
        Board::new(labels.iter().map(|s| s.to_string()).collect())
    }

    fn labels(board: &Board) -> Vec<&str> {
        board.order().iter().map(|s| s.as_str()).collect()
    }

    // Rows one unit tall: the k-th non-active row has midpoint k + 0.5.
    fn unit_midpoints(n: usize) -> Vec<f32> {
        (0..n).map(|k| k as f32 + 0.5).collect()
    }

    #[test]
    fn test_shuffled_board_reads_back_unchanged() {
        let def = GameDefinition::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::shuffled(&def, &mut rng);

        assert_eq!(board.len(), 8);
        let mut sorted: Vec<String> = board.order().to_vec();
        sorted.sort();
        let mut expected = def.labels();
        expected.sort();
        assert_eq!(sorted, expected);
        assert_eq!(board.active(), None);
    }

    #[test]
    fn test_pointer_above_all_midpoints_moves_row_first() {
        let mut b = board(&["A", "B", "C", "D"]);
        b.begin_drag(2); // C
        b.drag_to(-1.0, &unit_midpoints(3));
        assert_eq!(labels(&b), vec!["C", "A", "B", "D"]);
        assert_eq!(b.active(), Some(0));
    }

    #[test]
    fn test_pointer_below_all_midpoints_moves_row_last() {
        let mut b = board(&["A", "B", "C", "D"]);
        b.begin_drag(0); // A
        b.drag_to(10.0, &unit_midpoints(3));
        assert_eq!(labels(&b), vec!["B", "C", "D", "A"]);
        assert_eq!(b.active(), Some(3));
    }

    #[test]
    fn test_pointer_between_rows_k_and_k_plus_1_lands_at_k_plus_1() {
        // Non-active rows are B, C, D with midpoints 0.5, 1.5, 2.5. A pointer
        // at 1.0 sits between rows 0 and 1; the nearest midpoint below is C's,
        // so A is inserted before C: position 1.
        let mut b = board(&["A", "B", "C", "D"]);
        b.begin_drag(0);
        b.drag_to(1.0, &unit_midpoints(3));
        assert_eq!(labels(&b), vec!["B", "A", "C", "D"]);
        assert_eq!(b.active(), Some(1));
    }

    #[test]
    fn test_pointer_exactly_on_a_midpoint_goes_below_it() {
        // Offset must be strictly negative; a pointer exactly on B's midpoint
        // does not treat B as below itself.
        let mut b = board(&["A", "B", "C", "D"]);
        b.begin_drag(0);
        b.drag_to(0.5, &unit_midpoints(3));
        assert_eq!(labels(&b), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_order_commits_during_move_not_at_end() {
        let mut b = board(&["A", "B", "C"]);
        b.begin_drag(0);
        b.drag_to(10.0, &unit_midpoints(2));
        // End of drag only clears the mark.
        b.end_drag();
        assert_eq!(labels(&b), vec!["B", "C", "A"]);
        assert_eq!(b.active(), None);
    }

    #[test]
    fn test_continuous_moves_track_the_pointer() {
        let mut b = board(&["A", "B", "C", "D"]);
        b.begin_drag(3); // D
        b.drag_to(-1.0, &unit_midpoints(3));
        assert_eq!(labels(&b), vec!["D", "A", "B", "C"]);
        b.drag_to(1.0, &unit_midpoints(3));
        assert_eq!(labels(&b), vec!["A", "D", "B", "C"]);
        b.drag_to(10.0, &unit_midpoints(3));
        assert_eq!(labels(&b), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_begin_drag_out_of_bounds_is_ignored() {
        let mut b = board(&["A", "B"]);
        b.begin_drag(5);
        assert_eq!(b.active(), None);
        b.drag_to(0.0, &unit_midpoints(1));
        assert_eq!(labels(&b), vec!["A", "B"]);
    }

    #[test]
    fn test_keyboard_moves_saturate_at_ends() {
        let mut b = board(&["A", "B", "C"]);
        b.begin_drag(1);
        b.move_active_up();
        assert_eq!(labels(&b), vec!["B", "A", "C"]);
        b.move_active_up();
        assert_eq!(labels(&b), vec!["B", "A", "C"]);
        b.move_active_down();
        b.move_active_down();
        b.move_active_down();
        assert_eq!(labels(&b), vec!["A", "C", "B"]);
        assert_eq!(b.active(), Some(2));
    }
}
