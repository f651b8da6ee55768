//! Skill Recommender rendering (read-only from state).
//!
//! Wide layout: picker, chips and controls on the left; loading / leaderboard on the right.
//! Narrow layout stacks the same panels and drops the picker once the selection is full.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::*;
use super::catalog::Skill;
use super::logic::{
    format_growth, format_income, picker_enabled, recommend, sorted_selection, spinner_frame,
    suggestions,
};
use super::state::{AddRejection, Phase, RecommenderState, REVEAL_DELAY_TICKS, SELECTION_CAP};

const PRIMARY: Color = Color::Rgb(0x19, 0x76, 0xd2);
const SECONDARY: Color = Color::Rgb(0xdc, 0x00, 0x4e);
const SUCCESS: Color = Color::Green;

/// Leading text of the help bar whenever the selection is full.
const START_OVER_HINT: &str = "[R] Start over";

pub fn render(
    state: &RecommenderState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let narrow = is_narrow_layout(area.width);
    let borders = if narrow {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    render_title(f, chunks[0], borders);
    if narrow {
        render_narrow(state, f, chunks[1], borders, click_state);
    } else {
        render_wide(state, f, chunks[1], borders, click_state);
    }
    render_help(state, f, chunks[2], borders, narrow, click_state);

    // Drawn last so its full-screen target sits on top of everything else
    if let Some(notice) = state.notice {
        render_notice(notice, f, area, click_state);
    }
}

fn render_title(f: &mut Frame, area: Rect, borders: Borders) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Skill Recommender",
        Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

// ── Layouts ────────────────────────────────────────────────────────────

fn render_wide(
    state: &RecommenderState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(chips_height(state)),
            Constraint::Length(4),
        ])
        .split(columns[0]);

    render_picker(state, f, left[0], borders, click_state);
    render_chips(state, f, left[1], borders, click_state);
    render_controls(state, f, left[2], borders, click_state);
    render_results(state, f, columns[1], borders, click_state);
}

fn render_narrow(
    state: &RecommenderState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    if picker_enabled(state) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(chips_height(state)),
                Constraint::Length(4),
            ])
            .split(area);
        render_picker(state, f, chunks[0], borders, click_state);
        render_chips(state, f, chunks[1], borders, click_state);
        render_controls(state, f, chunks[2], borders, click_state);
        return;
    }

    // Full selection: the leaderboard (or its spinner) replaces the picker
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(chips_height(state)),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .split(area);
    render_chips(state, f, chunks[0], borders, click_state);
    render_controls(state, f, chunks[1], borders, click_state);
    render_results(state, f, chunks[2], borders, click_state);
}

// ── Picker ─────────────────────────────────────────────────────────────

/// First suggestion shown so the highlight stays inside a window of `visible` rows.
fn first_visible(highlight: usize, visible: usize) -> usize {
    if visible == 0 || highlight < visible {
        0
    } else {
        highlight + 1 - visible
    }
}

fn render_picker(
    state: &RecommenderState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let enabled = picker_enabled(state);
    let options = suggestions(state);
    let option_count = options.len();
    let mut cl = ClickableList::new();

    cl.push(Line::from(Span::styled(
        format!(" Select {} skills to see the leaderboard", SELECTION_CAP),
        Style::default().fg(Color::Gray),
    )));
    if enabled {
        cl.push(Line::from(vec![
            Span::styled(" Search for a skill: ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.query.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(PRIMARY)),
        ]));
    } else {
        cl.push(Line::from(Span::styled(
            format!(" Search disabled: {0} of {0} chosen", SELECTION_CAP),
            Style::default().fg(Color::DarkGray),
        )));
    }
    cl.push(Line::from(""));

    let visible = (area.height.saturating_sub(2) as usize).saturating_sub(cl.len());
    let start = first_visible(state.highlight, visible);

    if option_count == 0 {
        cl.push(Line::from(Span::styled(
            " No options",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, skill) in options.into_iter().enumerate().skip(start).take(visible) {
        if i >= SUGGESTION_SLOTS as usize {
            break;
        }
        let highlighted = enabled && i == state.highlight;
        let taken = state.selection.contains(&skill.name);
        let name_style = if highlighted {
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
        } else if taken || !enabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let line = Line::from(vec![
            Span::styled(
                if highlighted { " ▶ " } else { "   " },
                Style::default().fg(PRIMARY),
            ),
            Span::styled(skill.name.as_str(), name_style),
            Span::styled(
                if taken { " ✓" } else { "" },
                Style::default().fg(SUCCESS),
            ),
            Span::styled(
                format!("  {}", format_income(skill.income)),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        // Disabled at the cap: listed, not pickable
        if enabled {
            cl.push_clickable(line, SUGGESTION_BASE + i as u16);
        } else {
            cl.push(line);
        }
    }

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(if enabled { PRIMARY } else { Color::DarkGray }))
        .title(format!(" Skills ({}) ", option_count));

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0);
    drop(cs);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

// ── Chips & controls ───────────────────────────────────────────────────

/// Header + one row per chip + borders; collapses when nothing is chosen.
fn chips_height(state: &RecommenderState) -> u16 {
    match state.selection.len() {
        0 => 0,
        n => n as u16 + 3,
    }
}

fn render_chips(
    state: &RecommenderState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    if state.selection.len() == 0 || area.height == 0 {
        return;
    }

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        " Selected Skills:",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    for (i, skill) in state.selection.chosen().iter().enumerate() {
        cl.push_clickable(
            Line::from(vec![
                Span::styled(
                    " [x] ",
                    Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD),
                ),
                Span::styled(skill.name.as_str(), Style::default().fg(Color::White)),
            ]),
            CHIP_BASE + i as u16,
        );
    }

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0);
    drop(cs);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

fn render_controls(
    state: &RecommenderState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                " [Esc] ",
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled("Reset", Style::default().fg(Color::White)),
        ]),
        RESET,
    );
    cl.push(Line::from(Span::styled(
        format!(
            " Skills selected: {}/{}",
            state.selection.len(),
            SELECTION_CAP
        ),
        Style::default().fg(Color::Gray),
    )));

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0);
    drop(cs);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}

// ── Results ────────────────────────────────────────────────────────────

fn render_results(
    state: &RecommenderState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    match state.selection.phase() {
        Phase::Idle(n) => {
            state.results_scroll_max.set(0);
            render_waiting(n, f, area, borders);
        }
        Phase::Loading => {
            state.results_scroll_max.set(0);
            render_loading(state, f, area, borders);
        }
        Phase::Revealed => render_leaderboard(state, f, area, borders, click_state),
    }
}

fn render_waiting(chosen: usize, f: &mut Frame, area: Rect, borders: Borders) {
    let remaining = SELECTION_CAP.saturating_sub(chosen);
    let text = match remaining {
        0 => " Remove and re-add a skill to rebuild the leaderboard.".to_string(),
        1 => " Pick 1 more skill to see the leaderboard.".to_string(),
        n => format!(" Pick {} more skills to see the leaderboard.", n),
    };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Leaderboard ");
    f.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))),
        ])
        .block(block)
        .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_loading(state: &RecommenderState, f: &mut Frame, area: Rect, borders: Borders) {
    let remaining = state
        .selection
        .pending_reveal()
        .map_or(0, |t| t.remaining_ticks);
    let bar_width = 20usize;
    let done = REVEAL_DELAY_TICKS.saturating_sub(remaining) as usize;
    let filled = done * bar_width / REVEAL_DELAY_TICKS.max(1) as usize;
    let bar = "█".repeat(filled) + &"░".repeat(bar_width.saturating_sub(filled));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", spinner_frame(state.total_ticks)),
                Style::default().fg(PRIMARY),
            ),
            Span::styled("Loading leaderboard…", Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(format!("   {}", bar), Style::default().fg(PRIMARY))),
    ];

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(PRIMARY))
        .title(" Leaderboard ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn push_ranked<'a>(cl: &mut ClickableList<'a>, skills: &[&'a Skill]) {
    for (rank, skill) in skills.iter().enumerate() {
        cl.push(Line::from(Span::styled(
            format!(" {}. {}", rank + 1, skill.name),
            Style::default().fg(Color::White),
        )));
        cl.push(Line::from(vec![
            Span::styled(
                format!("    {} per year  ", format_income(skill.income)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("↗ {} growth", format_growth(skill.growth)),
                Style::default().fg(SUCCESS),
            ),
        ]));
    }
}

fn render_leaderboard(
    state: &RecommenderState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let sorted = sorted_selection(&state.selection);
    let recommended = recommend(&state.catalog, &state.selection);

    let mut cl = ClickableList::new();
    cl.push(
        Line::from(Span::styled(
            "Skills Income and Growth Leaderboard",
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    push_ranked(&mut cl, &sorted);
    cl.push(Line::from(""));
    cl.push(
        Line::from(Span::styled(
            "Recommended Skills Growth Rate and Income",
            Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    if recommended.is_empty() {
        cl.push(Line::from(Span::styled(
            " Nothing left to recommend.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    push_ranked(&mut cl, &recommended);
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                " [R] ",
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled("Start Over", Style::default().fg(Color::White)),
        ]),
        START_OVER,
    );

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(SUCCESS));
    let inner = block.inner(area);

    let max_scroll = cl.visual_rows(inner.width).saturating_sub(inner.height);
    state.results_scroll_max.set(max_scroll);
    let scroll = state.results_scroll.min(max_scroll);
    let block = block.title(if max_scroll > 0 {
        " Leaderboard (↑↓ to scroll) "
    } else {
        " Leaderboard "
    });

    let mut cs = click_state.borrow_mut();
    cl.register_scrolled_targets(area, &mut cs, inner.y - area.y, 1, inner.width, scroll);
    drop(cs);
    f.render_widget(
        Paragraph::new(cl.into_lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

// ── Help bar ───────────────────────────────────────────────────────────

fn render_help(
    state: &RecommenderState,
    f: &mut Frame,
    area: Rect,
    borders: Borders,
    narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let full = !picker_enabled(state);
    let text = match (full, narrow) {
        (true, true) => "[R] Start over  ↑↓ scroll  BS: remove",
        (true, false) => "[R] Start over  ↑↓ scroll  BS: remove last  Esc: reset",
        (false, true) => "Type  ↑↓  Enter: add  Esc: reset",
        (false, false) => "Type to search   ↑↓ move   Enter: add   Backspace: remove last   Esc: clear / reset",
    };
    let line = Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)));
    let line_width = line.width() as u16;
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(
        Paragraph::new(line)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );

    // Only the hint itself is a target; the rest of the bar is plain text
    if full && inner.height > 0 {
        let left = inner.x + (inner.width / 2).saturating_sub(line_width / 2);
        let hint_width = (START_OVER_HINT.len() as u16).min(inner.right().saturating_sub(left));
        click_state
            .borrow_mut()
            .add_click_target(Rect::new(left, inner.y, hint_width, 1), START_OVER);
    }
}

// ── Notice popup ───────────────────────────────────────────────────────

fn render_notice(
    notice: AddRejection,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let width = area.width.saturating_sub(4).clamp(1, 44).min(area.width);
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", notice),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(" [Enter] OK", Style::default().fg(PRIMARY))),
    ])
    .wrap(Wrap { trim: false });

    let text_rows = body.line_count(width.saturating_sub(2)) as u16;
    let height = (text_rows + 2).min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY))
        .title(Span::styled(
            " Notice ",
            Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Clear, popup);
    f.render_widget(body.block(block), popup);

    // Modal: any tap anywhere closes it
    click_state.borrow_mut().add_click_target(area, DISMISS_NOTICE);
}
