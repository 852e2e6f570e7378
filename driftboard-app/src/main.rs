//! Terminal kanban board for tracking projects.
//!
//! Projects are entered through the form at the top and land in the
//! active column; dragging a card with the mouse moves it between the
//! active and finished columns.

mod app;
mod cli;
mod drag;
mod logging;
mod state;
mod views;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(&cli)?;

    let mut terminal = setup_terminal().context("failed to initialize the terminal")?;
    let result = app::run(&mut terminal, state::AppState::new());
    restore_terminal(&mut terminal).context("failed to restore the terminal")?;

    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}
