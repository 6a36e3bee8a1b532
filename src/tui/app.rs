use crate::board::Board;
use crate::game::GameDefinition;
use crate::scoring::{self, ScoreReport};
use crate::session::SessionStats;
use crate::share;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Playing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
    ScoringInfo,
}

pub struct App {
    pub def: GameDefinition,
    pub board: Board,
    pub phase: Phase,
    pub stats: SessionStats,
    pub input_mode: InputMode,
    /// Keyboard cursor over the rows; independent of the drag mark.
    pub cursor: usize,
    /// Breakdown of the most recent submission. Survives a new round so the
    /// shell can print it after the terminal is restored.
    pub last_report: Option<ScoreReport>,
    pub flash_message: Option<(String, Instant)>,
    /// Screen region the rows were last drawn into; written by the ui layer,
    /// read when mapping mouse coordinates to rows.
    pub list_area: Option<Rect>,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    pub fn new(def: GameDefinition, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let board = Board::shuffled(&def, &mut rng);

        Self {
            def,
            board,
            phase: Phase::Playing,
            stats: SessionStats::default(),
            input_mode: InputMode::Normal,
            cursor: 0,
            last_report: None,
            flash_message: None,
            list_area: None,
            should_quit: false,
            rng,
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    pub fn cursor_down(&mut self) {
        if self.board.is_empty() {
            return;
        }
        self.cursor = if self.cursor >= self.board.len() - 1 {
            0
        } else {
            self.cursor + 1
        };
    }

    pub fn cursor_up(&mut self) {
        if self.board.is_empty() {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.board.len() - 1
        } else {
            self.cursor - 1
        };
    }

    /// Keyboard grab: pick up or put down the row under the cursor. Shares
    /// the drag mark with the mouse path, so the semantics are identical.
    pub fn toggle_grab(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        if self.board.active().is_some() {
            self.board.end_drag();
        } else {
            self.board.begin_drag(self.cursor);
        }
    }

    /// Move down one row: the grabbed row if one is held, else the cursor.
    pub fn move_down(&mut self) {
        if self.board.active().is_some() {
            self.board.move_active_down();
            if let Some(i) = self.board.active() {
                self.cursor = i;
            }
        } else {
            self.cursor_down();
        }
    }

    /// Move up one row: the grabbed row if one is held, else the cursor.
    pub fn move_up(&mut self) {
        if self.board.active().is_some() {
            self.board.move_active_up();
            if let Some(i) = self.board.active() {
                self.cursor = i;
            }
        } else {
            self.cursor_up();
        }
    }

    /// Read the board top-to-bottom, grade it, and record the round.
    /// Submitting twice is refused until a new round starts.
    pub fn submit(&mut self) {
        if self.phase == Phase::Submitted {
            self.show_flash("Already submitted. Press n for a new round.".to_string());
            return;
        }
        self.board.end_drag();

        match scoring::score(self.board.order(), &self.def) {
            Ok(report) => {
                self.stats.record_round(report.total);
                self.show_flash(format!(
                    "Scored {}/{}",
                    report.total,
                    self.def.max_score()
                ));
                self.last_report = Some(report);
                self.phase = Phase::Submitted;
            }
            Err(e) => {
                // A fixed-size board only reorders, so this means a bug
                // upstream. Surface it instead of scoring garbage.
                self.show_flash(format!("Cannot score this order: {}", e));
            }
        }
    }

    /// Shuffle a fresh board. Only meaningful once the current round has been
    /// submitted; session counters carry over.
    pub fn new_round(&mut self) {
        if self.phase != Phase::Submitted {
            return;
        }
        self.board = Board::shuffled(&self.def, &mut self.rng);
        self.phase = Phase::Playing;
        self.cursor = 0;
        self.show_flash("New round".to_string());
    }

    /// Copy the share text for the last submission to the clipboard.
    /// Disabled until a submission has occurred.
    pub fn share(&mut self) {
        let Some(report) = &self.last_report else {
            self.show_flash("Nothing to share yet. Submit first.".to_string());
            return;
        };
        let text = share::share_text(report, &self.stats, &self.def);
        match share::copy_to_clipboard(&text) {
            Ok(()) => self.show_flash("Score copied to clipboard".to_string()),
            Err(e) => self.show_flash(format!("Failed to share: {}", e)),
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_overlay(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn toggle_scoring_info(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::ScoringInfo => InputMode::Normal,
            _ => InputMode::ScoringInfo,
        };
    }

    /// Map a terminal cell to a row index, if it falls on one.
    pub fn row_index_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area?;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }
        let index = (row - area.y) as usize;
        (index < self.board.len()).then_some(index)
    }

    /// Mouse button down: start dragging the row under the pointer.
    pub fn mouse_down(&mut self, column: u16, row: u16) {
        if self.phase != Phase::Playing {
            return;
        }
        if let Some(index) = self.row_index_at(column, row) {
            self.board.begin_drag(index);
            self.cursor = index;
        }
    }

    /// Mouse moved while held: live-reorder against the midpoints of the
    /// rows as currently drawn (each row is one cell tall).
    pub fn mouse_drag(&mut self, row: u16) {
        let Some(area) = self.list_area else {
            return;
        };
        let Some(active) = self.board.active() else {
            return;
        };

        let pointer_y = row as f32 + 0.5;
        let midpoints: Vec<f32> = (0..self.board.len())
            .filter(|&i| i != active)
            .map(|i| area.y as f32 + i as f32 + 0.5)
            .collect();
        self.board.drag_to(pointer_y, &midpoints);
        if let Some(i) = self.board.active() {
            self.cursor = i;
        }
    }

    /// Mouse button released: the order was committed during the drag.
    pub fn mouse_up(&mut self) {
        self.board.end_drag();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(GameDefinition::builtin(), Some(99))
    }

    #[test]
    fn test_submit_scores_and_locks_the_round() {
        let mut app = app();
        app.submit();

        assert_eq!(app.phase, Phase::Submitted);
        assert_eq!(app.stats.games_played, 1);
        let first_total = app.last_report.as_ref().unwrap().total;
        assert_eq!(app.stats.cumulative_score, first_total);

        // Second submit is refused.
        app.submit();
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn test_new_round_requires_a_submission() {
        let mut app = app();
        let before: Vec<String> = app.board.order().to_vec();
        app.new_round();
        assert_eq!(app.board.order(), before.as_slice());
        assert_eq!(app.phase, Phase::Playing);

        app.submit();
        app.new_round();
        assert_eq!(app.phase, Phase::Playing);
        assert_eq!(app.stats.games_played, 1);
        assert!(app.last_report.is_some());
    }

    #[test]
    fn test_grab_and_keyboard_move() {
        let mut app = app();
        let before: Vec<String> = app.board.order().to_vec();

        app.toggle_grab();
        assert_eq!(app.board.active(), Some(0));
        app.move_down();
        assert_eq!(app.board.order()[1], before[0]);
        assert_eq!(app.cursor, 1);
        app.toggle_grab();
        assert_eq!(app.board.active(), None);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut app = app();
        app.cursor_up();
        assert_eq!(app.cursor, 7);
        app.cursor_down();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_mouse_drag_maps_rows_through_list_area() {
        let mut app = app();
        app.list_area = Some(Rect::new(0, 2, 40, 8));
        let before: Vec<String> = app.board.order().to_vec();

        // Grab the top row and drag below the last row.
        app.mouse_down(5, 2);
        assert_eq!(app.board.active(), Some(0));
        app.mouse_drag(30);
        app.mouse_up();

        assert_eq!(app.board.order()[7], before[0]);
        assert_eq!(app.board.order()[0], before[1]);
    }

    #[test]
    fn test_mouse_down_outside_list_is_ignored() {
        let mut app = app();
        app.list_area = Some(Rect::new(0, 2, 40, 8));
        app.mouse_down(5, 15);
        assert_eq!(app.board.active(), None);
    }

    #[test]
    fn test_share_requires_submission() {
        let mut app = app();
        app.share();
        let (msg, _) = app.flash_message.clone().unwrap();
        assert!(msg.contains("Submit first"));
    }

    #[test]
    fn test_flash_expires_after_three_seconds() {
        let mut app = app();
        app.show_flash("hello".to_string());
        app.flash_message = app
            .flash_message
            .take()
            .map(|(m, t)| (m, t - std::time::Duration::from_secs(4)));
        app.update_flash();
        assert!(app.flash_message.is_none());
    }
}
