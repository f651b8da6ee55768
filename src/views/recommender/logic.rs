//! Skill Recommender pure logic (no rendering / IO apart from console logging).

use crate::console;

use super::catalog::{Skill, SkillCatalog};
use super::state::{
    AddOutcome, AddRejection, RecommenderState, SelectionState, RECOMMENDATION_COUNT,
    SELECTION_CAP,
};

// ── Derived lists ─────────────────────────────────────────────────────

/// The chosen skills ordered by income, highest first. Ties keep selection order.
pub fn sorted_selection(selection: &SelectionState) -> Vec<&Skill> {
    let mut sorted: Vec<&Skill> = selection.chosen().iter().collect();
    sorted.sort_by(|a, b| b.income.cmp(&a.income));
    sorted
}

/// The highest-income catalog skills that are not chosen yet. Ties keep catalog order.
pub fn recommend<'a>(catalog: &'a SkillCatalog, selection: &SelectionState) -> Vec<&'a Skill> {
    let mut remaining: Vec<&Skill> = catalog
        .skills()
        .iter()
        .filter(|s| !selection.contains(&s.name))
        .collect();
    remaining.sort_by(|a, b| b.income.cmp(&a.income));
    remaining.truncate(RECOMMENDATION_COUNT);
    remaining
}

/// Autocomplete options for the current query.
pub fn suggestions(state: &RecommenderState) -> Vec<&Skill> {
    state.catalog.search(&state.query)
}

/// The picker is disabled once the selection is full.
pub fn picker_enabled(state: &RecommenderState) -> bool {
    state.selection.len() < SELECTION_CAP
}

// ── Picking ───────────────────────────────────────────────────────────

/// Add the `index`-th suggestion for the current query.
pub fn pick_suggestion(state: &mut RecommenderState, index: usize) -> bool {
    let result = state
        .selection
        .add(state.catalog.search(&state.query).get(index).copied());
    apply_add(state, result)
}

pub fn pick_highlighted(state: &mut RecommenderState) -> bool {
    let index = state.highlight;
    pick_suggestion(state, index)
}

fn apply_add(state: &mut RecommenderState, result: Result<AddOutcome, AddRejection>) -> bool {
    match result {
        Ok(AddOutcome::Ignored) => false,
        Ok(outcome) => {
            if outcome == AddOutcome::RevealScheduled {
                console::log("Skill Recommender: selection full, leaderboard loading");
            }
            state.query.clear();
            state.highlight = 0;
            true
        }
        Err(rejection) => {
            console::warn(&format!("Skill Recommender: add rejected: {rejection}"));
            state.notice = Some(rejection);
            true
        }
    }
}

// ── Removing ──────────────────────────────────────────────────────────

/// Remove the chip at `index` (selection order).
pub fn remove_chip(state: &mut RecommenderState, index: usize) -> bool {
    let Some(name) = state.selection.chosen().get(index).map(|s| s.name.clone()) else {
        return false;
    };
    remove_by_name(state, &name)
}

fn remove_by_name(state: &mut RecommenderState, name: &str) -> bool {
    if state.selection.is_loading() {
        console::log("Skill Recommender: pending reveal cancelled");
    }
    state.results_scroll = 0;
    state.selection.remove(name)
}

pub fn reset(state: &mut RecommenderState) {
    state.selection.reset();
    state.query.clear();
    state.highlight = 0;
    state.notice = None;
    state.results_scroll = 0;
}

// ── Search box editing ────────────────────────────────────────────────

pub fn type_char(state: &mut RecommenderState, c: char) -> bool {
    if c.is_control() || !picker_enabled(state) {
        return false;
    }
    state.query.push(c);
    state.highlight = 0;
    true
}

/// Delete the last query character, or the most recent chip when the query is empty.
pub fn backspace(state: &mut RecommenderState) -> bool {
    if state.query.pop().is_some() {
        state.highlight = 0;
        return true;
    }
    match state.selection.chosen().len() {
        0 => false,
        n => remove_chip(state, n - 1),
    }
}

/// Move the highlight within the suggestions, clamped to the list.
pub fn move_highlight(state: &mut RecommenderState, delta: i32) -> bool {
    let count = suggestions(state).len();
    if count == 0 {
        state.highlight = 0;
        return false;
    }
    let next = (state.highlight as i64 + delta as i64).clamp(0, count as i64 - 1) as usize;
    let moved = next != state.highlight;
    state.highlight = next;
    moved
}

/// Esc: clear the query first, reset the whole selection second.
pub fn escape(state: &mut RecommenderState) {
    if state.query.is_empty() {
        reset(state);
    } else {
        state.query.clear();
        state.highlight = 0;
    }
}

pub fn dismiss_notice(state: &mut RecommenderState) -> bool {
    state.notice.take().is_some()
}

// ── Tick ──────────────────────────────────────────────────────────────

pub fn tick(state: &mut RecommenderState, delta_ticks: u32) {
    state.total_ticks += delta_ticks as u64;
    if state.selection.tick(delta_ticks) {
        state.results_scroll = 0;
        console::log("Skill Recommender: leaderboard revealed");
    }
}

// ── Results scrolling ─────────────────────────────────────────────────

/// Scroll the results panel, clamped to what the last render could show.
pub fn scroll_results(state: &mut RecommenderState, delta: i32) -> bool {
    let max = state.results_scroll_max.get();
    let next = (state.results_scroll as i32 + delta).clamp(0, max as i32) as u16;
    let moved = next != state.results_scroll;
    state.results_scroll = next;
    moved
}

// ── Formatting ────────────────────────────────────────────────────────

/// `$120,000`
pub fn format_income(income: u32) -> String {
    let s = income.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let digits: String = result.chars().rev().collect();
    format!("${}", digits)
}

/// Whole percentages print without a decimal point.
pub fn format_growth(growth: f64) -> String {
    if growth.fract() == 0.0 {
        format!("{}%", growth as i64)
    } else {
        format!("{:.1}%", growth)
    }
}

const SPINNER: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

pub fn spinner_frame(total_ticks: u64) -> char {
    SPINNER[(total_ticks % SPINNER.len() as u64) as usize]
}
