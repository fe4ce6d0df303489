mod catalog;
mod dispatch;
mod input;
mod logging;
mod notify;
mod press;
mod screen;
mod selection;
mod theme;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use screen::Screen;
use tachyonfx::SimpleRng;
use time::FrameClock;

/// Rows moved by one PageUp/PageDown.
const PAGE_ROWS: i32 = 10;

/// Query the grid container's bounding rect and convert pixel coordinates
/// to a terminal cell `(col, row)`.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn now_ms() -> Option<f64> {
    Some(web_sys::window()?.performance()?.now())
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    logging::init();

    let screen = Rc::new(RefCell::new(Screen::new(SimpleRng::default())));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let clock = RefCell::new(FrameClock::default());
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch: press-down starts a gesture, press-up finishes it.
    terminal.on_mouse_event({
        let screen = screen.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.button != MouseButton::Left {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let hit = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                .and_then(|(col, row)| cs.hit_test(col, row));
            let scroll_limit = cs.scroll_limit;
            drop(cs);

            let event = match (mouse_event.event, hit) {
                (MouseEventKind::Pressed, Some(action_id)) => InputEvent::PressDown(action_id),
                (MouseEventKind::Pressed, None) => InputEvent::PressCancel,
                (MouseEventKind::Released, hit) => InputEvent::PressUp(hit),
                _ => return,
            };
            log::debug!("pointer -> {event:?}");
            screen.borrow_mut().handle_input(&event, scroll_limit);
        }
    });

    // Keyboard
    terminal.on_key_event({
        let screen = screen.clone();
        let click_state = click_state.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => InputEvent::Dismiss,
                KeyCode::Char('k') | KeyCode::Up => InputEvent::Scroll(-1),
                KeyCode::Char('j') | KeyCode::Down => InputEvent::Scroll(1),
                KeyCode::PageUp => InputEvent::Scroll(-PAGE_ROWS),
                KeyCode::PageDown => InputEvent::Scroll(PAGE_ROWS),
                _ => return,
            };
            let scroll_limit = click_state.borrow().scroll_limit;
            screen.borrow_mut().handle_input(&event, scroll_limit);
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let size = f.area();

            if let Some(now) = now_ms() {
                let mut clock = clock.borrow_mut();
                let steps = clock.update(now);
                let dt = clock.step_seconds();
                screen.borrow_mut().tick(steps, dt);
            }

            // Update terminal dimensions and clear click targets
            let mut cs = click_state.borrow_mut();
            cs.terminal_cols = size.width;
            cs.terminal_rows = size.height;
            cs.clear_targets();

            screen.borrow().render(f, size, &mut cs);
        }
    });

    Ok(())
}
