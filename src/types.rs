//! Type definitions and enums for the application state and navigation.

use crate::{grid::Direction, search::Algorithm};

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    ///
    /// This variant represents the main menu screen of the game.
    MainMenu(MainMenuItem),
    /// Maze selection screen.
    ///
    /// This variant represents the list of loaded mazes, from which the user picks the level to
    /// play.
    MazeMenu,
    /// In-game maze screen.
    ///
    /// This variant represents the screen where the player walks the maze and where search
    /// results are visualized.
    InGame,
    /// Completion screen.
    ///
    /// This variant is shown once the goal of the last maze has been reached.
    Completed,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Start Game" menu option.
    StartGame,
    /// "Mazes" menu option, leading to the maze list.
    Mazes,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Returns the item below this one, staying on the last item.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::StartGame => Self::Mazes,
            Self::Mazes | Self::Quit => Self::Quit,
        }
    }

    /// Returns the item above this one, staying on the first item.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Quit => Self::Mazes,
            Self::Mazes | Self::StartGame => Self::StartGame,
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the different specifics particular to each boxed menu in the
/// application's interface. Each variant carries the number of entries the menu displays.
pub(crate) enum MenuType {
    /// Main menu configuration.
    MainMenu(u8),
    /// Completion screen configuration.
    Completed(u8),
}

impl MenuType {
    /// Returns the string representation of the menu type.
    ///
    /// This function provides the display name for each menu variant, used as the title in the
    /// menu's border when rendering the interface.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Main Menu",
            Self::Completed(_) => "Well Done",
        }
    }

    /// Returns the numeric value stored by the menu type variant.
    ///
    /// This function provides access to the number of menu items for layout calculations, allowing
    /// the UI to properly size the menu containers.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::Completed(value) => *value,
        }
    }

    /// Returns the key hints shown at the bottom of the menu border.
    pub(crate) const fn hints(&self) -> &str {
        match self {
            Self::MainMenu(_) => "(j) down / (k) up / (l) select / (q) quit",
            Self::Completed(_) => "(l) main menu / (q) quit",
        }
    }
}

/// Action requested by the user.
///
/// Key events are translated into commands first, and the commands are then applied to the
/// application state in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Leave the application.
    Quit,
    /// Move the menu cursor down.
    Next,
    /// Move the menu cursor up.
    Previous,
    /// Activate the entry under the cursor.
    Select,
    /// Return to the previous screen.
    Back,
    /// Move the player one cell.
    Move(Direction),
    /// Solve the current maze and visualize the search.
    Solve(Algorithm),
    /// Remove the search overlay.
    ClearOverlay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::StartGame);
        let in_game = Screen::InGame;

        assert_eq!(main_menu, Screen::MainMenu(MainMenuItem::StartGame));
        assert_ne!(main_menu, Screen::MainMenu(MainMenuItem::Quit));
        assert_ne!(main_menu, in_game);
        assert_ne!(Screen::MazeMenu, Screen::Completed);
    }

    #[test]
    fn test_main_menu_item_navigation() {
        assert_eq!(MainMenuItem::StartGame.next(), MainMenuItem::Mazes);
        assert_eq!(MainMenuItem::Mazes.next(), MainMenuItem::Quit);
        assert_eq!(MainMenuItem::Quit.next(), MainMenuItem::Quit);

        assert_eq!(MainMenuItem::Quit.previous(), MainMenuItem::Mazes);
        assert_eq!(MainMenuItem::Mazes.previous(), MainMenuItem::StartGame);
        assert_eq!(MainMenuItem::StartGame.previous(), MainMenuItem::StartGame);
    }

    #[test]
    fn test_menu_type_repr() {
        assert_eq!(MenuType::MainMenu(3).repr(), "Main Menu");
        assert_eq!(MenuType::Completed(1).repr(), "Well Done");
    }

    #[test]
    fn test_menu_type_value() {
        assert_eq!(MenuType::MainMenu(3).value(), 3);
        assert_eq!(MenuType::Completed(1).value(), 1);
    }

    #[test]
    fn test_debug_implementations() {
        assert_eq!(format!("{:?}", Screen::InGame), "InGame");
        assert_eq!(format!("{:?}", MainMenuItem::Mazes), "Mazes");
        assert_eq!(
            format!("{:?}", Command::Solve(Algorithm::Bfs)),
            "Solve(Bfs)"
        );
    }
}
