//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    types::{MainMenuItem, OptionsMenuItem, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the animation.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(16))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    if matches!(app.screen, Screen::InGame) {
        app.animation_manager.update();
    }

    Ok(())
}

/// Dispatches a single key press.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') | KeyCode::Down => handle_j_events(app),
        KeyCode::Char('k') | KeyCode::Up => handle_k_events(app),
        KeyCode::Char('l') | KeyCode::Enter => handle_l_events(app)?,
        KeyCode::Char('h') | KeyCode::Esc => handle_h_events(app),
        KeyCode::Char('r') => handle_r_events(app)?,
        _ => {}
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation.
///
/// In the size menu the cursor moves down one preset and the viewport scrolls once the cursor
/// would leave it.
pub(crate) fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::MainMenu(MainMenuItem::Quit);
        }
        Screen::OptionsMenu(OptionsMenuItem::Size) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Back);
        }
        Screen::SizeMenu if app.cursor + 1 < app.presets.len() => {
            app.cursor += 1;
            if app.cursor >= app.viewport_offset + app.viewport_height.max(1) {
                app.viewport_offset += 1;
            }
        }
        _ => {}
    }
}

/// Handles 'k' key press events for upward navigation.
pub(crate) fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);
        }
        Screen::SizeMenu if app.cursor > 0 => {
            app.cursor -= 1;
            app.viewport_offset = app.viewport_offset.min(app.cursor);
        }
        _ => {}
    }
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// Starting a game generates and solves a maze right away; selecting a size only remembers it
/// for the next game.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => app.start_game()?,
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::OptionsMenu(OptionsMenuItem::Size) => {
            app.screen = Screen::SizeMenu;
            app.cursor = app
                .presets
                .iter()
                .position(|preset| *preset == app.preset)
                .unwrap_or_default();
            app.viewport_offset = 0;
        }
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::SizeMenu => {
            app.preset = app
                .presets
                .get(app.cursor)
                .cloned()
                .ok_or_eyre("failed to retrieve cursor-selected size")?;
        }
        Screen::InGame => {}
    }

    Ok(())
}

/// Handles 'h' key press events for backward navigation.
///
/// Leaving the maze screen drops the maze and its animation.
pub(crate) fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::InGame => {
            app.end_game();
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::SizeMenu => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);
        }
        Screen::OptionsMenu(_) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(_) => {}
    }
}

/// Handles 'r' key press events, which replace the maze on screen with a freshly seeded one.
pub(crate) fn handle_r_events(app: &mut App) -> Result<()> {
    if matches!(app.screen, Screen::InGame) {
        app.end_game();
        app.start_game()?;
    }

    Ok(())
}
