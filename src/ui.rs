//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::{Marker, DOT},
    text::Line,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    cell::Coord,
    grid::{CellRect, Grid},
    types::{MainMenuItem, MenuType, OptionsMenuItem, Screen},
    App,
};

/// Narrowest width given to the in-game tooltip, so its text fits next to small mazes.
const TOOLTIP_WIDTH: u16 = 44;

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match &app.screen {
        Screen::MainMenu(item) => main_menu(frame, *item),
        Screen::OptionsMenu(item) => options_menu(frame, *item),
        Screen::InGame => in_game(app, frame)?,
        Screen::SizeMenu => size_menu(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the main and options menus.
///
/// The generic part includes the centered positioning and border styling, while the specific menu
/// content is handled by the caller using the [`MenuType`] parameter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value().into()]).split(inner_space)
}

/// Renders a list of menu entries, highlighting the selected one.
fn render_entries(frame: &mut Frame, areas: &[Rect], entries: &[&str], selected: usize) {
    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (idx, (entry, area)) in entries.iter().zip(areas).enumerate() {
        let style = if idx == selected {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::raw(*entry).centered().style(style), *area);
    }
}

/// Renders the main menu screen with navigation options.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::MainMenu(3));
    let selected = match item {
        MainMenuItem::StartGame => 0,
        MainMenuItem::Options => 1,
        MainMenuItem::Quit => 2,
    };

    render_entries(frame, &inner_layout, &["Start", "Options", "Quit"], selected);
}

/// Renders the options menu screen with configuration choices.
pub(crate) fn options_menu(frame: &mut Frame, item: OptionsMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::OptionsMenu(2));
    let selected = match item {
        OptionsMenuItem::Size => 0,
        OptionsMenuItem::Back => 1,
    };

    render_entries(frame, &inner_layout, &["Size", "Return"], selected);
}

/// Renders the size selection menu with a scrollable list of presets.
///
/// The entry under the cursor is highlighted and the size used for the next maze is marked with a
/// dot.
///
/// # Errors
///
/// This function may return errors if the layout does not provide the expected areas.
pub(crate) fn size_menu(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Fill(1),
        Constraint::Percentage(30),
    ])
    .split(frame.area())
    .get(1)
    .copied()
    .ok_or_eyre("failed to get size menu column from layout")?;
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Fill(1),
        Constraint::Percentage(40),
    ])
    .split(space)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get size menu row from layout")?;

    let block = Block::bordered()
        .title_top("Maze size")
        .title_bottom("(j) down / (k) up / (l) select / (h) return")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(space);

    frame.render_widget(block, space);

    app.viewport_height = inner_space.height.into();

    let columns = Layout::horizontal([Constraint::Length(2), Constraint::Fill(1)]).split(inner_space);
    let (selector_column, list_column) = (
        *columns
            .first()
            .ok_or_eyre("failed to get selector column from layout")?,
        *columns
            .last()
            .ok_or_eyre("failed to get list column from layout")?,
    );
    let rows = vec![Constraint::Max(1); inner_space.height.into()];
    let inner_selector = Layout::vertical(rows.clone()).split(selector_column);
    let inner_list = Layout::vertical(rows).split(list_column);

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let visible = app
        .presets
        .iter()
        .enumerate()
        .skip(app.viewport_offset)
        .take(app.viewport_height);
    for ((idx, preset), (selector_area, entry_area)) in
        visible.zip(inner_selector.iter().zip(inner_list.iter()))
    {
        let style = if idx == app.cursor {
            active_content_style
        } else {
            content_style
        };
        let marker = if *preset == app.preset { DOT } else { " " };

        frame.render_widget(Line::styled(marker, style).centered(), *selector_area);
        frame.render_widget(Line::styled(preset.label.as_str(), style), *entry_area);
    }

    Ok(())
}

/// Maps a point in maze drawing space onto a canvas whose bounds are `[-half_width, half_width]`
/// by `[-half_height, half_height]`.
///
/// Drawing space grows downwards while the canvas grows upwards, so the vertical axis is flipped.
pub(crate) fn to_canvas(
    bounds: &CellRect,
    half_width: f64,
    half_height: f64,
    (x, y): (f64, f64),
) -> (f64, f64) {
    let relative_x = (x - bounds.x1) / (bounds.x2 - bounds.x1);
    let relative_y = (y - bounds.y1) / (bounds.y2 - bounds.y1);

    (
        relative_x.mul_add(2. * half_width, -half_width),
        relative_y.mul_add(-2. * half_height, half_height),
    )
}

/// Collects the canvas lines of every closed wall in the grid.
pub(crate) fn wall_lines(grid: &Grid, half_width: f64, half_height: f64) -> Vec<CanvasLine> {
    let bounds = grid.bounds();
    let project = |point| to_canvas(&bounds, half_width, half_height, point);
    let mut lines = Vec::new();

    for coord in grid.coords() {
        let cell = grid.cell(coord);
        let rect = grid.cell_rect(coord);
        let (left, top) = project((rect.x1, rect.y1));
        let (right, bottom) = project((rect.x2, rect.y2));

        for (closed, (x1, y1, x2, y2)) in [
            (cell.has_top_wall(), (left, top, right, top)),
            (cell.has_bottom_wall(), (left, bottom, right, bottom)),
            (cell.has_left_wall(), (left, top, left, bottom)),
            (cell.has_right_wall(), (right, top, right, bottom)),
        ] {
            if closed {
                lines.push(CanvasLine::new(x1, y1, x2, y2, Color::Green));
            }
        }
    }

    lines
}

/// Projects the centres of the given cells onto the canvas.
pub(crate) fn path_points(
    grid: &Grid,
    path: &[Coord],
    half_width: f64,
    half_height: f64,
) -> Vec<(f64, f64)> {
    let bounds = grid.bounds();

    path.iter()
        .map(|coord| to_canvas(&bounds, half_width, half_height, grid.cell_rect(*coord).center()))
        .collect()
}

/// Renders the in-game screen with the maze and the animated solver path.
///
/// The walls are drawn as canvas lines and the cells currently on the solver's path are joined by
/// red segments. The tooltip reports the seed and, once the animation is over, the outcome.
///
/// # Errors
///
/// This function may return errors if no maze has been generated or from layout and coordinate
/// conversion failures.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let maze = app
        .maze
        .as_ref()
        .ok_or_eyre("failed to retrieve the maze on screen")?;
    let grid = maze.grid();

    let maze_width = grid.num_cols().saturating_mul(2).saturating_add(1);
    let maze_height = grid.num_rows().saturating_add(1);

    let overall_layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(frame.area());
    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let tooltip_area = Layout::horizontal([Constraint::Length(maze_width.max(TOOLTIP_WIDTH))])
        .flex(Flex::Center)
        .split(tooltip_full_area)
        .first()
        .copied()
        .ok_or_eyre("failed to get centered tooltip area from horizontal layout")?;

    let maze_row = Layout::vertical([Constraint::Length(maze_height)])
        .flex(Flex::Center)
        .split(maze_content_area)
        .first()
        .copied()
        .ok_or_eyre("failed to get maze area from layout")?;
    let space = Layout::horizontal([Constraint::Length(maze_width)])
        .flex(Flex::Center)
        .split(maze_row)
        .first()
        .copied()
        .ok_or_eyre("failed to get maze space from horizontal layout")?;

    let half_width = rounded_div::i32(space.width.into(), 2);
    let half_height = rounded_div::i32(space.height.into(), 2);
    let (half_width_f, half_height_f) = (f64::from(half_width), f64::from(half_height));

    let walls = wall_lines(grid, half_width_f, half_height_f);
    let path = path_points(
        grid,
        &app.animation_manager.current_path,
        half_width_f,
        half_height_f,
    );

    let canvas = Canvas::default()
        .x_bounds([-half_width_f, half_width_f])
        .y_bounds([-half_height_f, half_height_f])
        .marker(Marker::Braille)
        .paint(|ctx| {
            for wall in &walls {
                ctx.draw(wall);
            }
            ctx.layer();
            for segment in path.windows(2) {
                if let [(x1, y1), (x2, y2)] = *segment {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, Color::Red));
                }
            }
            ctx.draw(&Points {
                coords: &path,
                color: Color::Red,
            });
        });

    frame.render_widget(canvas, space);

    let status = match (&app.solution, app.animation_manager.is_finished()) {
        (_, false) => "solving".to_owned(),
        (Some(solution), true) => format!("solved in {} moves", solution.len().saturating_sub(1)),
        (None, true) => "no path".to_owned(),
    };
    let tooltip_block = Block::bordered()
        .title(format!("(h) return / (r) new maze / seed {}", maze.seed()))
        .title_bottom(status)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, grid::Geometry};
    use ratatui::{backend::TestBackend, Terminal};

    /// Creates an app with a small, seeded maze and no animation pacing.
    fn create_test_app() -> App {
        App::new(Config {
            rows: 4,
            cols: 6,
            seed: Some(1),
            frame_delay_ms: Some(0),
            ..Config::default()
        })
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Returns the rendered buffer as one string per row.
    fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;

        (area.top()..area.bottom())
            .map(|row| {
                (area.left()..area.right())
                    .map(|col| buffer[(col, row)].symbol())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_draw_main_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing main menu should succeed");
        let lines = buffer_lines(&terminal);
        assert!(lines.iter().any(|line| line.contains("Main Menu")));
        assert!(lines.iter().any(|line| line.contains("Start")));
    }

    #[test]
    fn test_draw_options_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::OptionsMenu(OptionsMenuItem::Size);

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing options menu should succeed");
        assert!(buffer_lines(&terminal).iter().any(|line| line.contains("Size")));
    }

    #[test]
    fn test_draw_size_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::SizeMenu;

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing size menu should succeed");
        assert!(app.viewport_height > 0, "the viewport height should be recorded");
        assert!(buffer_lines(&terminal)
            .iter()
            .any(|line| line.contains("Command line (6x4)")));
    }

    #[test]
    fn test_draw_in_game() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.start_game().expect("test maze should generate");
        app.animation_manager.update();

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing in-game screen should succeed");
        let lines = buffer_lines(&terminal);
        assert!(lines.iter().any(|line| line.contains("seed 1")));
        assert!(lines.iter().any(|line| line.contains("solved in")));
    }

    #[test]
    fn test_in_game_without_maze_fails() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::InGame;

        let result = terminal.draw(|frame| {
            assert!(in_game(&app, frame).is_err(), "in-game should fail without a maze");
        });

        assert!(result.is_ok(), "terminal drawing should succeed even if in_game fails");
    }

    #[test]
    fn test_in_game_on_a_tiny_terminal() {
        let mut app = create_test_app();
        app.start_game().expect("test maze should generate");
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).expect("failed to create test terminal");

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "a small terminal should clip rather than fail");
    }

    #[test]
    fn test_init_menu_sizes() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            assert_eq!(init_menu(frame, MenuType::MainMenu(3)).len(), 3);
            assert_eq!(init_menu(frame, MenuType::OptionsMenu(2)).len(), 2);
        });

        assert!(result.is_ok(), "initializing menus should succeed");
    }

    #[test]
    fn test_to_canvas_maps_corners() {
        let bounds = CellRect {
            x1: 10.,
            y1: 0.,
            x2: 30.,
            y2: 8.,
        };

        assert_eq!(to_canvas(&bounds, 5., 2., (10., 0.)), (-5., 2.));
        assert_eq!(to_canvas(&bounds, 5., 2., (30., 8.)), (5., -2.));
        assert_eq!(to_canvas(&bounds, 5., 2., (20., 4.)), (0., 0.));
    }

    #[test]
    fn test_wall_lines_of_closed_cell() {
        let grid = Grid::new(Geometry::new(1, 1)).expect("geometry should be valid");

        assert_eq!(wall_lines(&grid, 1., 1.).len(), 4);
    }

    #[test]
    fn test_path_points_use_cell_centres() {
        let grid = Grid::new(Geometry::new(2, 2)).expect("geometry should be valid");
        let points = path_points(&grid, &[Coord::new(0, 0), Coord::new(1, 1)], 2., 2.);

        assert_eq!(points, vec![(-1., 1.), (1., -1.)]);
    }
}
