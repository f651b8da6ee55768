mod console;
mod input;
mod time;
mod views;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use input::{pixel_to_cell, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use time::TickClock;
use views::recommender::catalog::SkillCatalog;
use views::recommender::state::TICKS_PER_SEC;
use views::recommender::RecommenderView;
use views::View;

/// Query the grid container's bounding rect and convert a pixel position to a cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let cell = pixel_to_cell(
        mouse_x as f64 - rect.left(),
        mouse_y as f64 - rect.top(),
        rect.width(),
        rect.height(),
        cs.terminal_cols,
        cs.terminal_rows,
    );

    console::log(&format!(
        "click: pixel=({}, {}), cell={:?}, targets={}",
        mouse_x,
        mouse_y,
        cell,
        cs.targets.len()
    ));

    cell
}

/// Milliseconds from `performance.now()`, or the wall clock when unavailable.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

fn key_to_input(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Char(c) => Some(InputEvent::Key(c)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Enter),
        KeyCode::Up => Some(InputEvent::Up),
        KeyCode::Down => Some(InputEvent::Down),
        KeyCode::Esc => Some(InputEvent::Esc),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let catalog = SkillCatalog::load().map_err(|e| {
        console::warn(&format!("failed to load skill catalog: {}", e));
        io::Error::new(io::ErrorKind::InvalidData, e)
    })?;
    console::log(&format!("loaded {} skills", catalog.skills().len()));

    let view: Rc<RefCell<Box<dyn View>>> =
        Rc::new(RefCell::new(Box::new(RecommenderView::new(catalog))));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let clock = RefCell::new(TickClock::new(TICKS_PER_SEC));

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let view = view.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let Some((col, row)) = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) else {
                return;
            };
            let action = cs.hit_test(col, row);
            drop(cs);

            if let Some(action_id) = action {
                view.borrow_mut()
                    .handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let view = view.clone();
        move |key_event| {
            if key_event.ctrl || key_event.alt {
                return;
            }
            if let Some(event) = key_to_input(key_event.code) {
                view.borrow_mut().handle_input(&event);
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let delta = clock.borrow_mut().update(now_ms());
            if delta > 0 {
                view.borrow_mut().tick(delta);
            }

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            view.borrow().render(f, size, &click_state);
        }
    });

    Ok(())
}
