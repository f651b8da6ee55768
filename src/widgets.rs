//! Clickable line lists.
//!
//! [`ClickableList`] keeps rendered lines and their click actions together, so
//! a row's target always follows the row wherever it lands in the panel.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;
use ratzilla::ratatui::widgets::{Paragraph, Wrap};

use crate::input::ClickState;

/// Lines for a `Paragraph`, some of them bound to action IDs.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from(" Selected Skills:"));
/// cl.push_clickable(Line::from(" [x] Python"), CHIP_BASE);
/// cl.register_targets(area, &mut cs, 1, 1, 0);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
#[derive(Default)]
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line index, action id)`
    actions: Vec<(usize, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len(), action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Rows all lines take when wrapped at `wrap_width` (`0`: no wrapping).
    pub fn visual_rows(&self, wrap_width: u16) -> u16 {
        self.lines
            .iter()
            .fold(0, |rows: u16, line| rows.saturating_add(visual_height(line, wrap_width)))
    }

    /// Register a row target for every visual row of every clickable line.
    ///
    /// * `top_offset` / `bottom_offset`: rows taken by borders above/below the content.
    /// * `wrap_width`: content width when the paragraph wraps (`Wrap { trim: false }`);
    ///   `0` means one logical line is always one row.
    ///
    /// Rows that fall below the content area are dropped.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        wrap_width: u16,
    ) {
        self.register_scrolled_targets(area, cs, top_offset, bottom_offset, wrap_width, 0);
    }

    /// Like [`register_targets`](Self::register_targets) for a paragraph rendered
    /// with `.scroll((scroll, 0))`: the first `scroll` visual rows are off screen.
    pub fn register_scrolled_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        wrap_width: u16,
        scroll: u16,
    ) {
        let content_top = area.y.saturating_add(top_offset);
        let content_bottom = (area.y + area.height).saturating_sub(bottom_offset);

        // Content-relative first row and height of each line
        let mut row_of_line = Vec::with_capacity(self.lines.len());
        let mut row: u16 = 0;
        for line in &self.lines {
            let height = visual_height(line, wrap_width);
            row_of_line.push((row, height));
            row = row.saturating_add(height);
        }

        for &(index, action_id) in &self.actions {
            let (start, height) = row_of_line[index];
            for r in start..start.saturating_add(height) {
                let Some(on_screen) = r.checked_sub(scroll) else {
                    continue;
                };
                let y = content_top.saturating_add(on_screen);
                if y >= content_bottom {
                    break;
                }
                cs.add_row_target(area, y, action_id);
            }
        }
    }
}

/// Rows a line occupies, wrapped exactly the way the rendering `Paragraph` wraps it.
fn visual_height(line: &Line<'_>, wrap_width: u16) -> u16 {
    if wrap_width == 0 || line.width() <= wrap_width as usize {
        return 1;
    }
    Paragraph::new(line.clone())
        .wrap(Wrap { trim: false })
        .line_count(wrap_width)
        .max(1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_follow_line_positions() {
        let mut cl = ClickableList::new();
        cl.push(Line::from(" Selected Skills:"));
        cl.push_clickable(Line::from(" [x] Python"), 70);
        cl.push_clickable(Line::from(" [x] React"), 71);
        assert_eq!(cl.len(), 3);

        // Bordered panel at y=10
        let area = Rect::new(0, 10, 40, 6);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(5, 11), None); // header
        assert_eq!(cs.hit_test(5, 12), Some(70));
        assert_eq!(cs.hit_test(5, 13), Some(71));
        assert_eq!(cs.hit_test(5, 14), None);
    }

    #[test]
    fn rows_past_bottom_border_are_dropped() {
        let mut cl = ClickableList::new();
        for i in 0..8 {
            cl.push_clickable(Line::from(format!(" option {}", i)), 10 + i);
        }
        // Height 5 with borders leaves 3 content rows (y=1..=3)
        let area = Rect::new(0, 0, 30, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(0, 3), Some(12));
        assert_eq!(cs.hit_test(0, 4), None);
    }

    #[test]
    fn no_border_offsets() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("first"), 1);
        let area = Rect::new(2, 7, 10, 1);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 0);
        assert_eq!(cs.hit_test(2, 7), Some(1));
        assert_eq!(cs.hit_test(1, 7), None);
    }

    #[test]
    fn wrapped_line_pushes_later_targets_down() {
        let mut cl = ClickableList::new();
        // 25 cols in a 10-wide content area: 3 rows
        cl.push(Line::from("Skills Income and Growth "));
        cl.push_clickable(Line::from(" [R] Again"), 81);

        let area = Rect::new(0, 0, 12, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 10);

        assert_eq!(cs.hit_test(3, 3), None);
        assert_eq!(cs.hit_test(3, 4), Some(81));
    }

    #[test]
    fn wrapped_clickable_line_covers_every_row() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("Natural Language Processing"), 42); // 27 cols
        let area = Rect::new(0, 0, 10, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 10);

        assert_eq!(cs.hit_test(0, 0), Some(42));
        assert_eq!(cs.hit_test(0, 1), Some(42));
        assert_eq!(cs.hit_test(0, 2), Some(42));
        assert_eq!(cs.hit_test(0, 3), None);
    }

    #[test]
    fn empty_list_registers_nothing() {
        let cl = ClickableList::new();
        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 20, 20), &mut cs, 1, 1, 0);
        assert!(cs.targets.is_empty());
        assert!(cl.into_lines().is_empty());
    }

    #[test]
    fn visual_height_rules() {
        assert_eq!(visual_height(&Line::from("x".repeat(50)), 0), 1);
        assert_eq!(visual_height(&Line::from("x".repeat(10)), 10), 1);
        assert_eq!(visual_height(&Line::from(""), 10), 1);
        // Word wrap: "Recommended Skills" / "Growth Rate and" / "Income"
        assert_eq!(
            visual_height(&Line::from("Recommended Skills Growth Rate and Income"), 20),
            3
        );
    }

    #[test]
    fn scrolled_rows_shift_up_and_hidden_rows_drop() {
        let mut cl = ClickableList::new();
        for i in 0..6 {
            cl.push_clickable(Line::from(format!(" row {}", i)), 100 + i);
        }
        // Bordered, 4 content rows (y=1..=4), scrolled by 2
        let area = Rect::new(0, 0, 20, 6);
        let mut cs = ClickState::new();
        cl.register_scrolled_targets(area, &mut cs, 1, 1, 0, 2);

        assert_eq!(cs.targets.len(), 4);
        assert_eq!(cs.hit_test(0, 1), Some(102));
        assert_eq!(cs.hit_test(0, 4), Some(105));
        assert_eq!(cs.hit_test(0, 5), None);
    }

    #[test]
    fn visual_rows_sums_wrapped_lines() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("Natural Language Processing"));
        cl.push_clickable(Line::from(" [R] Start Over"), 81);
        assert_eq!(cl.visual_rows(0), 2);
        // 3 rows + 2 rows (" [R] Start" / "Over")
        assert_eq!(cl.visual_rows(12), 5);
    }

    #[test]
    fn default_list_is_empty() {
        let cl = ClickableList::default();
        assert_eq!(cl.len(), 0);
    }
}
