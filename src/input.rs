//! Shared input handling: coordinate conversion, click targets, and event types.
//!
//! Nothing here touches the DOM; `main.rs` converts browser events into
//! [`InputEvent`]s and the screen consumes them.

use ratzilla::ratatui::layout::Rect;

/// Input after normalization from mouse, touch and keyboard sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Press-down landed on the target with this action ID.
    PressDown(u16),
    /// Press-up. Carries the action ID under the pointer, if any.
    PressUp(Option<u16>),
    /// The gesture was abandoned (e.g. pointer lost).
    PressCancel,
    /// Close the visible notification.
    Dismiss,
    /// Scroll the content by this many rows (negative = up).
    Scroll(i32),
}

/// A region on screen that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// The rectangular region (in terminal cell coordinates) for hit testing.
    pub rect: Rect,
    /// Semantic action ID, see `screen::actions`.
    pub action_id: u16,
}

/// Shared state between the render loop and the input handlers.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
    /// Largest valid scroll offset for the last rendered frame.
    pub scroll_limit: u16,
}

impl Default for ClickState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
            scroll_limit: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Register a click target with a rectangular hit region and a semantic action ID.
    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        if rect.width > 0 && rect.height > 0 {
            self.targets.push(ClickTarget { rect, action_id });
        }
    }

    /// Hit-test a terminal cell coordinate against all registered targets.
    /// Later-registered targets win when they overlap (the modal is drawn last).
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Determine whether a screen width (in columns) should use narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert a pixel Y coordinate to a terminal row index.
///
/// `click_y` is relative to the grid container's top edge.
/// `grid_height` is the total pixel height of the grid container.
/// `terminal_rows` is the number of rows in the terminal.
///
/// Returns `None` if the click is outside the grid or inputs are invalid.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }

    let cell_height = grid_height / terminal_rows as f64;
    let row = (click_y / cell_height) as u16;

    if row >= terminal_rows {
        return None;
    }

    Some(row)
}

/// Convert a pixel X coordinate to a terminal column index.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (click_x / cell_width) as u16;
    if col >= terminal_cols { None } else { Some(col) }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hit_test tests ──────────────────────────────────────────────

    #[test]
    fn hit_test_basic() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 11, 80, 1), 2);

        assert_eq!(cs.hit_test(5, 10), Some(1));
        assert_eq!(cs.hit_test(5, 11), Some(2));
        assert_eq!(cs.hit_test(5, 12), None);
    }

    #[test]
    fn hit_test_side_by_side_buttons() {
        let mut cs = ClickState::new();
        // Dominio | Explorar on one row with a 1-column gap
        cs.add_click_target(Rect::new(1, 5, 17, 3), 7);
        cs.add_click_target(Rect::new(19, 5, 17, 3), 8);

        assert_eq!(cs.hit_test(1, 5), Some(7));
        assert_eq!(cs.hit_test(17, 7), Some(7));
        assert_eq!(cs.hit_test(18, 6), None); // gap
        assert_eq!(cs.hit_test(19, 6), Some(8));
        assert_eq!(cs.hit_test(36, 6), None);
    }

    #[test]
    fn hit_test_overlap_last_wins() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 80, 3), 1);
        // modal button drawn over it
        cs.add_click_target(Rect::new(30, 6, 10, 1), 99);

        assert_eq!(cs.hit_test(35, 6), Some(99));
        assert_eq!(cs.hit_test(0, 6), Some(1));
    }

    #[test]
    fn empty_rects_are_not_registered() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 0, 0, 1), 1);
        cs.add_click_target(Rect::new(0, 0, 5, 0), 2);
        assert!(cs.targets.is_empty());
    }

    #[test]
    fn click_state_clear() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 1, 80, 1), 1);
        cs.clear_targets();
        assert_eq!(cs.hit_test(0, 1), None);
    }

    #[test]
    fn narrow_layout_threshold() {
        assert!(is_narrow_layout(37));
        assert!(is_narrow_layout(59));
        assert!(!is_narrow_layout(60));
        assert!(!is_narrow_layout(120));
    }

    // ── pixel coordinate conversion tests ──────────────────────────

    #[test]
    fn pixel_to_row_basic() {
        assert_eq!(pixel_y_to_row(0.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(14.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(15.0, 450.0, 30), Some(1));
        assert_eq!(pixel_y_to_row(449.0, 450.0, 30), Some(29));
    }

    #[test]
    fn pixel_to_row_rejects_outside() {
        assert_eq!(pixel_y_to_row(450.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(-1.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 0.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 450.0, 0), None);
    }

    #[test]
    fn pixel_x_to_col_basic() {
        assert_eq!(pixel_x_to_col(0.0, 800.0, 80), Some(0));
        assert_eq!(pixel_x_to_col(10.0, 800.0, 80), Some(1));
        assert_eq!(pixel_x_to_col(799.0, 800.0, 80), Some(79));
        assert_eq!(pixel_x_to_col(800.0, 800.0, 80), None);
        assert_eq!(pixel_x_to_col(-1.0, 800.0, 80), None);
    }

    #[test]
    fn mobile_tap_pipeline() {
        // 37x50 phone grid, 15px rows, ~9.7px columns
        let mut cs = ClickState::new();
        cs.terminal_cols = 37;
        cs.terminal_rows = 50;
        cs.add_click_target(Rect::new(1, 12, 17, 3), 1);
        cs.add_click_target(Rect::new(19, 12, 17, 3), 2);

        let grid_w = 37.0 * 9.7;
        let grid_h = 50.0 * 15.0;

        let row = pixel_y_to_row(13.0 * 15.0 + 7.0, grid_h, cs.terminal_rows).unwrap();
        let left = pixel_x_to_col(5.0 * 9.7 + 2.0, grid_w, cs.terminal_cols).unwrap();
        let right = pixel_x_to_col(25.0 * 9.7 + 2.0, grid_w, cs.terminal_cols).unwrap();
        assert_eq!(cs.hit_test(left, row), Some(1));
        assert_eq!(cs.hit_test(right, row), Some(2));
    }
}
