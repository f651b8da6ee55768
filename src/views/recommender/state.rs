//! Skill Recommender state: the bounded selection, its reveal timer, and the picker.

use std::cell::Cell;
use std::collections::HashSet;

use thiserror::Error;

use super::catalog::{Skill, SkillCatalog};

/// Maximum number of skills a user may choose.
pub const SELECTION_CAP: usize = 5;

/// How many recommendations are shown next to the leaderboard.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Clock rate fed to `View::tick` (100ms per tick).
pub const TICKS_PER_SEC: u32 = 10;

/// Delay between the fifth pick and the reveal (1 second).
pub const REVEAL_DELAY_TICKS: u32 = TICKS_PER_SEC;

/// Why an add was refused. The message is shown to the user as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AddRejection {
    #[error("You can only add up to 5 skills!")]
    CapReached,
    #[error("This skill has already been added!")]
    Duplicate,
}

/// What an accepted add did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// Nothing was picked.
    Ignored,
    Added,
    /// The selection is now full and the reveal timer started.
    RevealScheduled,
}

/// Countdown for the deferred reveal. Dropping it cancels the reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTimer {
    pub remaining_ticks: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// `n` skills chosen, no reveal pending or shown.
    Idle(usize),
    Loading,
    Revealed,
}

/// The chosen skills plus the reveal latch.
///
/// `names` always mirrors `chosen` so duplicate checks don't scan the list.
#[derive(Debug, Default)]
pub struct SelectionState {
    chosen: Vec<Skill>,
    names: HashSet<String>,
    revealed: bool,
    pending_reveal: Option<RevealTimer>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chosen skills in selection order.
    pub fn chosen(&self) -> &[Skill] {
        &self.chosen
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_full(&self) -> bool {
        self.chosen.len() >= SELECTION_CAP
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_loading(&self) -> bool {
        self.pending_reveal.is_some()
    }

    pub fn pending_reveal(&self) -> Option<RevealTimer> {
        self.pending_reveal
    }

    pub fn phase(&self) -> Phase {
        if self.is_revealed() {
            Phase::Revealed
        } else if self.is_loading() {
            Phase::Loading
        } else {
            Phase::Idle(self.chosen.len())
        }
    }

    /// Append a skill. The cap is checked before duplicates.
    pub fn add(&mut self, skill: Option<&Skill>) -> Result<AddOutcome, AddRejection> {
        let Some(skill) = skill else {
            return Ok(AddOutcome::Ignored);
        };
        if self.is_full() {
            return Err(AddRejection::CapReached);
        }
        if self.names.contains(&skill.name) {
            return Err(AddRejection::Duplicate);
        }

        self.names.insert(skill.name.clone());
        self.chosen.push(skill.clone());

        if self.chosen.len() == SELECTION_CAP {
            self.pending_reveal = Some(RevealTimer {
                remaining_ticks: REVEAL_DELAY_TICKS,
            });
            return Ok(AddOutcome::RevealScheduled);
        }
        Ok(AddOutcome::Added)
    }

    /// Drop every skill named `name`. Always clears the reveal and cancels a
    /// pending one, even when nothing matched. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.chosen.len();
        self.chosen.retain(|s| s.name != name);
        self.names.remove(name);
        self.revealed = false;
        self.pending_reveal = None;
        self.chosen.len() != before
    }

    pub fn reset(&mut self) {
        self.chosen.clear();
        self.names.clear();
        self.revealed = false;
        self.pending_reveal = None;
    }

    /// Advance the reveal timer. Returns true on the tick that latches the reveal.
    pub fn tick(&mut self, delta_ticks: u32) -> bool {
        let Some(timer) = self.pending_reveal.as_mut() else {
            return false;
        };
        timer.remaining_ticks = timer.remaining_ticks.saturating_sub(delta_ticks);
        if timer.remaining_ticks > 0 {
            return false;
        }
        self.pending_reveal = None;
        self.revealed = true;
        true
    }
}

/// Everything the recommender view owns.
pub struct RecommenderState {
    pub catalog: SkillCatalog,
    pub selection: SelectionState,
    /// Autocomplete search text.
    pub query: String,
    /// Index into the filtered suggestions.
    pub highlight: usize,
    /// Blocking notice; while set, the next input only dismisses it.
    pub notice: Option<AddRejection>,
    /// Drives the loading spinner.
    pub total_ticks: u64,
    /// Rows the results panel is scrolled down by.
    pub results_scroll: u16,
    /// Largest useful `results_scroll`, recorded by the last render since it
    /// depends on the panel size.
    pub results_scroll_max: Cell<u16>,
}

impl RecommenderState {
    pub fn new(catalog: SkillCatalog) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(),
            query: String::new(),
            highlight: 0,
            notice: None,
            total_ticks: 0,
            results_scroll: 0,
            results_scroll_max: Cell::new(0),
        }
    }
}
