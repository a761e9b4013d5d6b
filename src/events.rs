//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    app::App,
    game::MoveOutcome,
    grid::Direction,
    search::Algorithm,
    types::{Command, MainMenuItem, Screen},
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events, translates key presses into [`Command`]s for the
/// current screen and dispatches them. It uses a timeout to avoid blocking the UI, so the search
/// animation keeps advancing while no key is pressed.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(20))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(command) = command_for_key(&app.screen, key.code) {
                    dispatch(app, command)?;
                }
            }
        }
    }

    // Update animation if in-game
    if matches!(app.screen, Screen::InGame) {
        app.animation_manager.update();
    }

    Ok(())
}

/// Translates a key press into the command it stands for on the given screen.
///
/// Arrow keys move the player while in game and move the cursor in menus; the remaining bindings
/// follow the same (h) back, (j) down, (k) up, (l) select layout on every menu.
pub(crate) const fn command_for_key(screen: &Screen, code: KeyCode) -> Option<Command> {
    let command = match (screen, code) {
        (_, KeyCode::Char('q')) => Command::Quit,
        (Screen::InGame, KeyCode::Up) => Command::Move(Direction::Up),
        (Screen::InGame, KeyCode::Down) => Command::Move(Direction::Down),
        (Screen::InGame, KeyCode::Left) => Command::Move(Direction::Left),
        (Screen::InGame, KeyCode::Right) => Command::Move(Direction::Right),
        (Screen::InGame, KeyCode::Char('d')) => Command::Solve(Algorithm::Dfs),
        (Screen::InGame, KeyCode::Char('b')) => Command::Solve(Algorithm::Bfs),
        (Screen::InGame, KeyCode::Char('c')) => Command::ClearOverlay,
        (_, KeyCode::Char('h') | KeyCode::Esc) => Command::Back,
        (Screen::InGame, _) => return None,
        (_, KeyCode::Char('j') | KeyCode::Down) => Command::Next,
        (_, KeyCode::Char('k') | KeyCode::Up) => Command::Previous,
        (_, KeyCode::Char('l') | KeyCode::Enter) => Command::Select,
        _ => return None,
    };

    Some(command)
}

/// Applies a command to the application state.
///
/// # Errors
///
/// This function may return errors if a level to start cannot be found.
pub(crate) fn dispatch(app: &mut App, command: Command) -> Result<()> {
    match command {
        Command::Quit => app.exit = true,
        Command::Next => handle_next(app),
        Command::Previous => handle_previous(app),
        Command::Select => handle_select(app)?,
        Command::Back => handle_back(app),
        Command::Move(direction) => {
            if app.game.move_player(direction) == MoveOutcome::ReachedGoal {
                app.advance_level()?;
            }
        }
        Command::Solve(algorithm) => match app.game.solve(algorithm) {
            Some(result) => app.animation_manager.start(result),
            None => app.animation_manager.clear(),
        },
        Command::ClearOverlay => {
            app.game.clear_overlay();
            app.animation_manager.clear();
        }
    }

    Ok(())
}

/// Handles downward navigation in menus.
///
/// In the maze list the viewport scrolls along once the cursor moves past its last visible row.
fn handle_next(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.next()),
        Screen::MazeMenu => {
            if app.maze_cursor + 1 < app.maps.len() {
                app.maze_cursor += 1;
            }
            let visible = app.viewport_height.max(1);
            if app.maze_cursor >= app.viewport_offset + visible {
                app.viewport_offset = app.maze_cursor + 1 - visible;
            }
        }
        Screen::InGame | Screen::Completed => {}
    }
}

/// Handles upward navigation in menus.
fn handle_previous(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.previous()),
        Screen::MazeMenu => {
            app.maze_cursor = app.maze_cursor.saturating_sub(1);
            if app.maze_cursor < app.viewport_offset {
                app.viewport_offset = app.maze_cursor;
            }
        }
        Screen::InGame | Screen::Completed => {}
    }
}

/// Handles selection of the entry under the cursor.
fn handle_select(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) | Screen::MazeMenu => {
            app.start_level(app.maze_cursor)?;
        }
        Screen::MainMenu(MainMenuItem::Mazes) => app.screen = Screen::MazeMenu,
        Screen::MainMenu(MainMenuItem::Quit) => app.exit = true,
        Screen::Completed => app.screen = Screen::MainMenu(MainMenuItem::StartGame),
        Screen::InGame => {}
    }

    Ok(())
}

/// Handles returning to the previous screen.
fn handle_back(app: &mut App) {
    match app.screen {
        Screen::InGame => {
            app.animation_manager.clear();
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::MazeMenu => app.screen = Screen::MainMenu(MainMenuItem::Mazes),
        Screen::Completed => app.screen = Screen::MainMenu(MainMenuItem::StartGame),
        Screen::MainMenu(_) => {}
    }
}
