//! Core application state and logic for the maze game.

use std::{io, time::Duration};

use color_eyre::eyre::{OptionExt as _, Result};
use log::info;
use ratatui::DefaultTerminal;

use crate::{
    events,
    game::Game,
    map::Map,
    pathfinding::AnimationManager,
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze game.
///
/// Besides the screen being shown and the maze list cursor, it holds the index of the level being
/// played, the [`Game`] session on that level and the animation replaying the latest search.
#[derive(Debug)]
pub(crate) struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Mazes in the order in which they are played.
    ///
    /// This collection is never empty; [`App::new`] refuses to build an application without mazes.
    pub(crate) maps: Vec<Map>,
    /// Index into [`maps`](App::maps) of the level being played.
    pub(crate) level: usize,
    /// Session on the level being played.
    pub(crate) game: Game,
    /// Index of the maze under the cursor in the maze menu.
    pub(crate) maze_cursor: usize,
    /// Scrolling offset for the maze list viewport.
    ///
    /// This field holds the offset by which to scroll the sliding window into the
    /// [`maps`](App::maps) vector in the maze menu's viewport.
    pub(crate) viewport_offset: usize,
    /// Height of the maze list rendering area.
    ///
    /// This field holds the height of the area in which the list of mazes is being rendered as a
    /// measure of terminal cells during the last redraw of the on-screen frame.
    pub(crate) viewport_height: usize,
    /// Animation manager for search visualization.
    pub(crate) animation_manager: AnimationManager,
}

impl App {
    /// Creates the application on the first of `maps`, showing the main menu.
    ///
    /// # Errors
    ///
    /// This function returns an error if `maps` is empty.
    pub(crate) fn new(maps: Vec<Map>, frame_delay: Duration) -> Result<Self> {
        let grid = maps
            .first()
            .map(|map| map.grid.clone())
            .ok_or_eyre("no mazes to play")?;

        Ok(Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            maps,
            level: 0,
            game: Game::new(grid),
            maze_cursor: 0,
            viewport_offset: 0,
            viewport_height: 0,
            animation_manager: AnimationManager::new(frame_delay),
        })
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Returns the maze of the level being played.
    ///
    /// # Errors
    ///
    /// This function returns an error if the level index points past the loaded mazes.
    pub(crate) fn current_map(&self) -> Result<&Map> {
        self.maps
            .get(self.level)
            .ok_or_eyre("failed to retrieve the current maze")
    }

    /// Starts a fresh session on level `idx` and switches to the in-game screen.
    ///
    /// # Errors
    ///
    /// This function returns an error if `idx` points past the loaded mazes.
    pub(crate) fn start_level(&mut self, idx: usize) -> Result<()> {
        let map = self
            .maps
            .get(idx)
            .ok_or_eyre("failed to retrieve the selected maze")?;
        info!("starting level {} ({})", idx + 1, map.key);

        self.game = Game::new(map.grid.clone());
        self.level = idx;
        self.maze_cursor = idx;
        self.animation_manager.clear();
        self.screen = Screen::InGame;

        Ok(())
    }

    /// Moves on to the level after the current one.
    ///
    /// After the last maze the completion screen is shown and the next game starts over from the
    /// first maze.
    ///
    /// # Errors
    ///
    /// This function returns an error if the next level cannot be started.
    pub(crate) fn advance_level(&mut self) -> Result<()> {
        let next = self.level + 1;
        if next < self.maps.len() {
            return self.start_level(next);
        }

        info!("all {} mazes completed", self.maps.len());
        self.animation_manager.clear();
        self.maze_cursor = 0;
        self.viewport_offset = 0;
        self.screen = Screen::Completed;

        Ok(())
    }
}
