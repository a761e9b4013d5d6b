//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::{Marker, DOT},
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    app::App,
    pathfinding,
    types::{MainMenuItem, MenuType, Screen},
};

/// Key hints shown below the maze while playing.
const IN_GAME_HINTS: &str = "(arrows) move / (d) DFS / (b) BFS / (c) clear / (h) menu";

/// Notice shown instead of the maze when it does not fit in the terminal.
const TERMINAL_TOO_SMALL: &str = "Terminal too small";

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::MazeMenu => maze_menu(app, frame),
        Screen::InGame => in_game(app, frame)?,
        Screen::Completed => completed(app, frame),
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the boxed menus.
///
/// This function creates the common layout and block structure used by the main menu and the
/// completion screen. The generic part includes the centered positioning and border styling, while
/// the specific menu content is handled by the caller using the [`MenuType`] parameter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let space = Layout::vertical([Constraint::Length(u16::from(menu.value()) + 2)])
        .flex(Flex::Center)
        .split(frame.area())[0];
    let layout = Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(50),
        Constraint::Percentage(25),
    ])
    .split(space)[1];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom(menu.hints())
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value().into()]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game", "Mazes", and "Quit". It
/// highlights the currently selected option.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::MainMenu(3));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let entries = [
        (MainMenuItem::StartGame, "Start Game"),
        (MainMenuItem::Mazes, "Mazes"),
        (MainMenuItem::Quit, "Quit"),
    ];
    for ((entry, label), area) in entries.into_iter().zip(inner_layout.iter()) {
        let style = if entry == item {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::styled(label, style).centered(), *area);
    }
}

/// Renders the maze selection menu with a scrollable list of the loaded mazes.
///
/// The entry under the cursor is highlighted and the level currently being played is marked with
/// a dot. The height of the list area is stored back into the application so that cursor movement
/// can keep the cursor inside the viewport.
pub(crate) fn maze_menu(app: &mut App, frame: &mut Frame) {
    clear(frame);

    let [_, space, _] = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Fill(1),
        Constraint::Percentage(30),
    ])
    .areas(frame.area());
    let [_, layout, _] = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Fill(1),
        Constraint::Percentage(30),
    ])
    .areas(space);

    let block = Block::bordered()
        .title_top("Maze list")
        .title_bottom("(j) down / (k) up / (l) play / (h) return")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    app.viewport_height = inner_space.height.into();

    let [selector_area, list_area] =
        Layout::horizontal([Constraint::Length(2), Constraint::Fill(1)]).areas(inner_space);
    let rows = usize::from(inner_space.height);
    let selectors = Layout::vertical(vec![Constraint::Length(1); rows]).split(selector_area);
    let entries = Layout::vertical(vec![Constraint::Length(1); rows]).split(list_area);

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let visible = app
        .maps
        .iter()
        .enumerate()
        .skip(app.viewport_offset)
        .zip(selectors.iter().zip(entries.iter()));
    for ((idx, map), (&selector_row, &entry_row)) in visible {
        let style = if idx == app.maze_cursor {
            active_content_style
        } else {
            content_style
        };
        let marker = if idx == app.level { DOT } else { " " };

        frame.render_widget(Line::styled(marker, style).centered(), selector_row);
        frame.render_widget(
            Line::styled(format!("{}. {}", idx + 1, map.key), style),
            entry_row,
        );
    }
}

/// Renders the in-game screen with the maze, the player and the search overlay.
///
/// The screen is a status line, the maze and a key-hint footer. When the maze does not fit in the
/// space left between them, a notice asking for a larger terminal is shown instead of a clipped
/// maze.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations or if the current maze
/// cannot be found.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let map = app.current_map()?;
    let grid = &app.game.grid;

    let [status_area, maze_content_area, tooltip_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    let mut status = format!("Maze {}/{}: {}", app.level + 1, app.maps.len(), map.key);
    if let Some(message) = &app.game.status {
        status.push_str(" | ");
        status.push_str(message);
    }
    frame.render_widget(
        Line::styled(status, Style::default().fg(Color::Green)).centered(),
        status_area,
    );

    let tooltip_block = Block::bordered()
        .title(IN_GAME_HINTS)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    if grid.width() > usize::from(maze_content_area.width)
        || grid.height() > usize::from(maze_content_area.height)
    {
        let [notice_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(maze_content_area);
        frame.render_widget(
            Line::styled(TERMINAL_TOO_SMALL, Style::default().fg(Color::Red)).centered(),
            notice_area,
        );
        return Ok(());
    }

    draw_maze(app, frame, maze_content_area)
}

/// Draws the maze centered in `area`.
///
/// The maze is drawn on a [`Canvas`] with one layer per kind of cell so that later layers stay on
/// top: walls, explored cells, the solution path, the start and goal markers, and finally the
/// player. The overlay only shows the cells the animation has revealed so far.
fn draw_maze(app: &App, frame: &mut Frame, area: Rect) -> Result<()> {
    let grid = &app.game.grid;

    let [maze_area] = Layout::vertical([Constraint::Length(u16::try_from(grid.height())?)])
        .flex(Flex::Center)
        .areas(area);
    let [space] = Layout::horizontal([Constraint::Length(u16::try_from(grid.width())?)])
        .flex(Flex::Center)
        .areas(maze_area);

    // Pre-compute screen coordinates to handle errors before closures
    let walls: Vec<_> = grid.cells().filter(|&cell| grid.is_wall(cell)).collect();
    let wall_coords = pathfinding::transform_maze_to_screen_coords(&walls, grid)?;
    let explored_coords =
        pathfinding::transform_maze_to_screen_coords(&app.animation_manager.explored, grid)?;
    let path_coords =
        pathfinding::transform_maze_to_screen_coords(&app.animation_manager.path, grid)?;
    let start_coords = pathfinding::transform_maze_to_screen_coords(&[grid.start()], grid)?;
    let goal_coords = pathfinding::transform_maze_to_screen_coords(&[grid.goal()], grid)?;
    let player_coords = pathfinding::transform_maze_to_screen_coords(&[app.game.player], grid)?;

    let layers = [
        (&wall_coords, Color::Green),
        (&explored_coords, Color::Blue),
        (&path_coords, Color::Yellow),
        (&start_coords, Color::Red),
        (&goal_coords, Color::Magenta),
        (&player_coords, Color::White),
    ];

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Block)
        .paint(|ctx| {
            for &(coords, color) in &layers {
                ctx.draw(&Points { coords, color });
                ctx.layer();
            }
        });

    frame.render_widget(maze, space);

    Ok(())
}

/// Renders the screen shown once the last maze has been solved.
pub(crate) fn completed(app: &App, frame: &mut Frame) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::Completed(2));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let lines = [
        Line::styled(format!("{} mazes solved", app.maps.len()), content_style),
        Line::styled("Main Menu", active_content_style),
    ];
    for (line, area) in lines.into_iter().zip(inner_layout.iter()) {
        frame.render_widget(line.centered(), *area);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::{map::Map, search::Algorithm};

    /// Creates a test app over two small mazes.
    fn create_test_app() -> App {
        let maps = vec![
            Map::new("first".to_owned(), "#####\n#A  #\n# # #\n#  B#\n#####")
                .expect("test maze should parse"),
            Map::new("second".to_owned(), "A B").expect("test maze should parse"),
        ];
        App::new(maps, Duration::ZERO).expect("app should build")
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Concatenates the symbols of every buffer cell into one string.
    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    /// Draws the app once and returns the rendered text.
    fn render(app: &mut App) -> String {
        let mut terminal = create_test_terminal();
        let _ = terminal
            .draw(|frame| {
                draw(app, frame).expect("drawing should succeed in test");
            })
            .expect("terminal drawing should succeed");
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_main_menu() {
        let mut app = create_test_app();
        app.screen = Screen::MainMenu(MainMenuItem::Mazes);

        let text = render(&mut app);

        assert!(text.contains("Main Menu"), "menu title should be shown");
        assert!(text.contains("Start Game"), "first entry should be shown");
        assert!(text.contains("Mazes"), "second entry should be shown");
        assert!(text.contains("Quit"), "third entry should be shown");
    }

    #[test]
    fn test_draw_maze_menu_lists_mazes() {
        let mut app = create_test_app();
        app.screen = Screen::MazeMenu;

        let text = render(&mut app);

        assert!(text.contains("Maze list"), "list title should be shown");
        assert!(text.contains("1. first"), "first maze should be listed");
        assert!(text.contains("2. second"), "second maze should be listed");
        assert!(app.viewport_height > 0, "viewport height should be recorded");
    }

    #[test]
    fn test_maze_menu_respects_viewport_offset() {
        let mut app = create_test_app();
        app.screen = Screen::MazeMenu;
        app.maze_cursor = 1;
        app.viewport_offset = 1;

        let text = render(&mut app);

        assert!(!text.contains("1. first"), "scrolled entry should be hidden");
        assert!(text.contains("2. second"), "visible entry should be listed");
    }

    #[test]
    fn test_draw_in_game_shows_status_and_hints() {
        let mut app = create_test_app();
        app.start_level(0).expect("level should start");

        let text = render(&mut app);

        assert!(text.contains("Maze 1/2: first"), "status line should be shown");
        assert!(text.contains("(d) DFS"), "key hints should be shown");
    }

    #[test]
    fn test_draw_in_game_with_search_overlay() {
        let mut app = create_test_app();
        app.start_level(0).expect("level should start");
        if let Some(result) = app.game.solve(Algorithm::Bfs) {
            app.animation_manager.start(result);
        }
        for _ in 0..app.animation_manager.steps.len() {
            app.animation_manager.update();
        }

        let text = render(&mut app);

        assert!(app.animation_manager.is_finished(), "replay should finish");
        assert!(
            text.contains("BFS: 4 moves"),
            "search outcome should be shown"
        );
    }

    #[test]
    fn test_draw_in_game_maze_larger_than_terminal() {
        let wide = format!("A{}B", " ".repeat(28));
        let maps = vec![Map::new("wide".to_owned(), &wide).expect("test maze should parse")];
        let mut app = App::new(maps, Duration::ZERO).expect("app should build");
        app.start_level(0).expect("level should start");
        let mut terminal =
            Terminal::new(TestBackend::new(24, 10)).expect("failed to create test terminal");

        let _ = terminal
            .draw(|frame| {
                draw(&mut app, frame).expect("drawing should succeed in test");
            })
            .expect("terminal drawing should succeed");
        let text = buffer_text(terminal.backend().buffer());

        assert!(
            text.contains("Terminal too small"),
            "oversized maze should be replaced by a notice"
        );
        assert!(text.contains("Maze 1/1: wide"), "status line should be shown");
    }

    #[test]
    fn test_draw_in_game_maze_that_fits_has_no_notice() {
        let mut app = create_test_app();
        app.start_level(0).expect("level should start");

        let text = render(&mut app);

        assert!(
            !text.contains("Terminal too small"),
            "a maze that fits should be drawn"
        );
    }

    #[test]
    fn test_draw_completed() {
        let mut app = create_test_app();
        app.screen = Screen::Completed;

        let text = render(&mut app);

        assert!(text.contains("Well Done"), "completion title should be shown");
        assert!(text.contains("2 mazes solved"), "maze count should be shown");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_init_menu_item_count() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let layout = init_menu(frame, MenuType::MainMenu(3));
            assert_eq!(layout.len(), 3, "main menu should have 3 items");
            let layout = init_menu(frame, MenuType::Completed(2));
            assert_eq!(layout.len(), 2, "completion screen should have 2 items");
        });

        assert!(result.is_ok(), "initializing menus should succeed");
    }
}
