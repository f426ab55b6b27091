//! Event handler for the TUI
//!
//! Routes keyboard events to the form or the expense table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::DefaultCategory;

use super::app::{App, FormField, StatusKind};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys
    match key.code {
        KeyCode::Esc => {
            app.quit();
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Tab => {
            app.form.next_field();
            return;
        }
        KeyCode::BackTab => {
            app.form.prev_field();
            return;
        }
        KeyCode::Enter => {
            app.submit_form();
            return;
        }
        KeyCode::Up => {
            app.select_prev();
            return;
        }
        KeyCode::Down => {
            app.select_next();
            return;
        }
        _ => {}
    }

    if app.form.focused_field == FormField::Category {
        handle_category_key(app, key);
    } else {
        handle_text_key(app, key);
    }
}

/// Keys while the category picker has focus
fn handle_category_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.form.category = app.form.category.prev(),
        KeyCode::Right | KeyCode::Char(' ') => app.form.category = app.form.category.next(),
        KeyCode::Char(c) => {
            // Jump to the first category starting with the typed letter
            if let Some(found) = DefaultCategory::all()
                .iter()
                .find(|cat| cat.name().starts_with(c.to_ascii_uppercase()))
            {
                app.form.category = *found;
            }
        }
        _ => {}
    }
}

/// Keys while a text field has focus
fn handle_text_key(app: &mut App, key: KeyEvent) {
    // An error stays up until the user starts correcting the input
    if matches!(app.status, Some(ref s) if s.kind == StatusKind::Error) {
        app.clear_status();
    }

    let Some(input) = app.form.focused_input() else {
        return;
    };

    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
