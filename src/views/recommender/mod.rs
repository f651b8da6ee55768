//! Skill Recommender: pick five skills, then see them ranked by income
//! alongside the best-paying skills you didn't pick.

pub mod actions;
pub mod catalog;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::views::View;

use actions::*;
use catalog::SkillCatalog;
use state::{RecommenderState, SELECTION_CAP};

pub struct RecommenderView {
    pub state: RecommenderState,
}

impl RecommenderView {
    pub fn new(catalog: SkillCatalog) -> Self {
        Self {
            state: RecommenderState::new(catalog),
        }
    }

    fn handle_key(&mut self, c: char) -> bool {
        if logic::picker_enabled(&self.state) {
            return logic::type_char(&mut self.state, c);
        }
        // Picker is disabled at the cap, so letters are free for shortcuts
        match c {
            'r' | 'R' => {
                logic::reset(&mut self.state);
                true
            }
            _ => false,
        }
    }

    /// Arrows move the suggestion highlight, or scroll the results once the picker is off.
    fn handle_arrow(&mut self, delta: i32) -> bool {
        if logic::picker_enabled(&self.state) {
            logic::move_highlight(&mut self.state, delta)
        } else {
            logic::scroll_results(&mut self.state, delta)
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        match action_id {
            id if (SUGGESTION_BASE..SUGGESTION_BASE + SUGGESTION_SLOTS).contains(&id) => {
                logic::pick_suggestion(&mut self.state, (id - SUGGESTION_BASE) as usize)
            }
            id if (CHIP_BASE..CHIP_BASE + SELECTION_CAP as u16).contains(&id) => {
                logic::remove_chip(&mut self.state, (id - CHIP_BASE) as usize)
            }
            RESET | START_OVER => {
                logic::reset(&mut self.state);
                true
            }
            _ => false,
        }
    }
}

impl View for RecommenderView {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        // The notice is modal: whatever comes next only closes it.
        if logic::dismiss_notice(&mut self.state) {
            return true;
        }

        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
            InputEvent::Backspace => logic::backspace(&mut self.state),
            InputEvent::Enter => logic::pick_highlighted(&mut self.state),
            InputEvent::Up => self.handle_arrow(-1),
            InputEvent::Down => self.handle_arrow(1),
            InputEvent::Esc => {
                logic::escape(&mut self.state);
                true
            }
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
