//! Map data and management module.
//!
//! This module contains the `Map` struct pairing a parsed maze grid with the name it is listed
//! under, together with the mazes built into the binary.

use std::path::Path;

use color_eyre::eyre::{OptionExt as _, Result};

use crate::{error::MalformedMazeError, grid::Grid};

/// Named labyrinth map.
///
/// This structure pairs a maze grid with a display name, either the file stem of the maze file it
/// was read from or the name of one of the built-in mazes. It is kept in an ordered vector that
/// defines the order in which levels are played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Map {
    /// Display name of the map.
    pub(crate) key: String,
    /// Parsed maze.
    pub(crate) grid: Grid,
}

impl Map {
    /// Builds a new map from a name and a maze description.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedMazeError`] when the description does not hold exactly one start and one
    /// goal marker.
    pub(crate) fn new(key: String, data: &str) -> Result<Self, MalformedMazeError> {
        Ok(Self {
            key,
            grid: Grid::parse(data)?,
        })
    }

    /// Builds a new map named after the file stem of `path`.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The path has no file stem or it is not valid UTF-8
    /// - The description is malformed
    pub(crate) fn from_path(path: &Path, data: &str) -> Result<Self> {
        let key = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_eyre("failed to extract a file name from the maze path")?
            .to_owned();

        Ok(Self::new(key, data)?)
    }

    /// Returns the mazes bundled with the game.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedMazeError`] if a bundled description is malformed.
    pub(crate) fn builtin() -> Result<Vec<Self>, MalformedMazeError> {
        BUILTIN_MAZES
            .iter()
            .map(|&(key, data)| Self::new(key.to_owned(), data))
            .collect()
    }
}

/// Mazes used when no maze files are available.
const BUILTIN_MAZES: [(&str, &str); 3] = [
    (
        "Entrance",
        "\
###########
#A    #   #
# ### # # #
#   #   # #
### ##### #
#       # #
# ##### # #
#     #  B#
###########",
    ),
    (
        "Corridors",
        "\
###############
#A#     #     #
# # ### # ### #
#   #   #   # #
##### ##### # #
#   #     # # #
# # ##### # # #
# #     #   #B#
###############",
    ),
    (
        "Crossroads",
        "\
###################
#A  #       #     #
# # # ##### # ### #
# #   #   #   #   #
# ##### # ##### ###
#     # #     #   #
##### # ##### ### #
#   # #     #   # #
# # # ##### ### # #
# #       #     #B#
###################",
    ),
];

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::grid::Cell;

    #[test]
    fn test_builtin_mazes_parse() {
        let maps = Map::builtin().expect("built-in mazes should parse");

        assert_eq!(maps.len(), 3);
        assert_eq!(
            maps.iter().map(|map| map.key.as_str()).collect::<Vec<_>>(),
            vec!["Entrance", "Corridors", "Crossroads"]
        );
        assert!(maps
            .iter()
            .all(|map| map.grid.start() == Cell::new(1, 1)));
    }

    #[test]
    fn test_map_new_valid_input() {
        let map = Map::new("test".to_owned(), "A #\n  B").expect("Failed to create map");

        assert_eq!(map.key, "test");
        assert_eq!(map.grid.goal(), Cell::new(1, 2));
    }

    #[test]
    fn test_map_new_malformed_input() {
        let result = Map::new("broken".to_owned(), "A  \n   ");

        assert_eq!(
            result,
            Err(MalformedMazeError {
                starts: 1,
                goals: 0
            })
        );
    }

    #[test]
    fn test_map_from_path_uses_file_stem() {
        let path = PathBuf::from("levels/test.backup.maze");

        let map = Map::from_path(&path, "AB").expect("Failed to create map");

        assert_eq!(map.key, "test.backup");
    }

    #[test]
    fn test_map_from_path_without_file_name() {
        let result = Map::from_path(Path::new(""), "AB");

        assert!(result.is_err());
    }
}
