//! Core application state and logic for the maze interface.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    animation::AnimationManager,
    cell::Coord,
    config::Config,
    events,
    grid::Geometry,
    maze::Maze,
    preset::Preset,
    render::Recorder,
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze interface.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the interface and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag, set once the user asks to quit.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Configuration the application was started with.
    pub(crate) config: Config,
    /// Size used for the next generated maze.
    pub(crate) preset: Preset,
    /// Every size offered in the size menu.
    pub(crate) presets: Vec<Preset>,
    /// Index into [`presets`](App::presets) of the entry under the cursor in the size menu.
    pub(crate) cursor: usize,
    /// Scrolling offset for the size list viewport.
    pub(crate) viewport_offset: usize,
    /// Height of the size list rendering area during the last redraw, in terminal rows.
    pub(crate) viewport_height: usize,
    /// Seed for the next generated maze. Only the first maze uses the command-line seed.
    pub(crate) next_seed: Option<u64>,
    /// Maze currently on screen, if a game was started.
    pub(crate) maze: Option<Maze<Recorder>>,
    /// Solution of the maze on screen, or [`None`] if it could not be solved.
    pub(crate) solution: Option<Vec<Coord>>,
    /// Animation manager for solver visualization.
    pub(crate) animation_manager: AnimationManager,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    /// Creates the application state for the given configuration, starting at the main menu.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            preset: Preset::from_config(&config),
            presets: Preset::catalog(&config),
            cursor: 0,
            viewport_offset: 0,
            viewport_height: 0,
            next_seed: config.seed,
            maze: None,
            solution: None,
            animation_manager: AnimationManager::new(config.frame_delay()),
            config,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    /// - Errors from generating a maze with the selected size
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame).map_err(|err| std::io::Error::other(err.to_string()))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Generates a maze of the selected size, solves it and loads the solver's moves into the
    /// animation.
    ///
    /// # Errors
    ///
    /// This function returns an error if the selected size does not form a valid maze.
    pub(crate) fn start_game(&mut self) -> Result<()> {
        let geometry = Geometry::new(self.preset.num_cols, self.preset.num_rows)
            .with_cell_size(self.config.cell_width, self.config.cell_height);

        let mut maze = Maze::new(geometry, self.next_seed.take(), Recorder::new())?;
        maze.port_mut().clear();
        let solution = maze.solve_path();

        self.animation_manager
            .load(maze.grid().entrance(), maze.port().moves());
        tracing::info!(
            seed = maze.seed(),
            solved = solution.is_some(),
            steps = self.animation_manager.steps.len(),
            "maze ready"
        );

        self.maze = Some(maze);
        self.solution = solution;
        self.screen = Screen::InGame;

        Ok(())
    }

    /// Drops the current maze and its animation.
    pub(crate) fn end_game(&mut self) {
        self.animation_manager.clear();
        self.maze = None;
        self.solution = None;
    }
}
