//! Input plumbing: normalized events, click targets, and pixel → cell mapping.
//!
//! Nothing here knows about skills. Views register targets while rendering
//! and translate [`InputEvent`]s into their own operations.

use ratzilla::ratatui::layout::Rect;

/// Keyboard, mouse, and touch input normalized into one event type.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable character.
    Key(char),
    /// A click/tap on a registered target, identified by a semantic action ID.
    Click(u16),
    Backspace,
    Enter,
    Up,
    Down,
    Esc,
}

/// A screen region (terminal cells) bound to an action ID.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared between the render loop (which registers targets every frame) and
/// the mouse handler (which hit-tests against them).
#[derive(Default)]
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a one-row target spanning `area`'s width. Rows outside `area` are ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Action under a cell. Later registrations sit on top, so they win overlaps.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets
            .iter()
            .rev()
            .find(|t| {
                let r = t.rect;
                col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .map(|t| t.action_id)
    }
}

/// Screens narrower than this stack every panel vertically.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert a pixel offset (relative to the grid's top-left corner) to a
/// `(col, row)` cell. `None` when outside the grid or the grid has no size.
pub fn pixel_to_cell(
    x: f64,
    y: f64,
    grid_width: f64,
    grid_height: f64,
    cols: u16,
    rows: u16,
) -> Option<(u16, u16)> {
    Some((
        pixel_to_index(x, grid_width, cols)?,
        pixel_to_index(y, grid_height, rows)?,
    ))
}

fn pixel_to_index(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let index = (offset / (extent / cells as f64)) as u16;
    if index >= cells {
        None
    } else {
        Some(index)
    }
}
