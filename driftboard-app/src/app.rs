//! Event loop and top-level layout

use crate::state::AppState;
use crate::views::{render_alert, FORM_HEIGHT};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use std::io::Stdout;

/// Run the draw/dispatch loop until the user quits.
///
/// Everything happens on this thread: one frame is drawn, one event is
/// read and dispatched, and the store notifications triggered by that
/// event complete before the next frame.
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut state: AppState) -> Result<()> {
    while !state.should_quit {
        terminal.draw(|frame| draw(frame, &mut state))?;
        dispatch(event::read()?, &mut state);
    }
    Ok(())
}

/// Draw one frame: the form on top, the two columns below, the alert over
/// everything
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    state.regions.clear();

    let [form_area, board_area] =
        Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)])
            .areas(frame.area());
    state.regions.form = form_area;
    state.form.render(frame, form_area);

    let [active_area, finished_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(board_area);
    state.active.render(frame, active_area, &mut state.regions);
    state.finished.render(frame, finished_area, &mut state.regions);

    if let Some(message) = &state.alert {
        render_alert(frame, message);
    }
}

fn dispatch(event: Event, state: &mut AppState) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => state.on_key(key),
        Event::Mouse(mouse) => state.on_mouse(mouse),
        _ => {}
    }
}
