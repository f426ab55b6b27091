//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are entered on start and always left on
//! exit, including when the UI panics.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::tracker::ExpenseTracker;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI on top of any expense tracker
pub fn run_tui(tracker: &mut dyn ExpenseTracker) -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = event_loop(&mut terminal, tracker);

    // Leave the alternate screen even when the loop failed
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, tracker: &mut dyn ExpenseTracker) -> Result<()> {
    let mut app = App::new(tracker);
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &mut app))?;

        match events.next()? {
            Event::Tick => {}
            event => handle_event(&mut app, event),
        }
    }

    Ok(())
}
