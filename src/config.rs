//! Command-line configuration.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::grid::Geometry;

/// Default number of maze rows.
pub const DEFAULT_ROWS: u16 = 12;

/// Default number of maze columns.
pub const DEFAULT_COLS: u16 = 20;

/// Default delay between animation frames, in milliseconds.
pub const DEFAULT_FRAME_DELAY_MS: u64 = 60;

/// Generate a perfect maze by randomized backtracking and watch it get solved.
#[derive(Clone, Debug, PartialEq, Parser)]
#[command(version, about)]
pub struct Config {
    /// Number of maze rows.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: u16,

    /// Number of maze columns.
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: u16,

    /// Seed for reproducible generation; a random one is picked and logged when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the solved maze to standard output instead of starting the interface.
    #[arg(long)]
    pub headless: bool,

    /// Delay between animation frames in milliseconds; 0 disables pacing.
    ///
    /// The interface falls back to 60 ms. Headless runs are only paced when this is given.
    #[arg(long)]
    pub frame_delay_ms: Option<u64>,

    /// Drawing width of a cell.
    #[arg(long, default_value_t = 2.)]
    pub cell_width: f64,

    /// Drawing height of a cell.
    #[arg(long, default_value_t = 1.)]
    pub cell_height: f64,

    /// Horizontal drawing origin of the maze.
    #[arg(long, default_value_t = 0., allow_negative_numbers = true)]
    pub origin_x: f64,

    /// Vertical drawing origin of the maze.
    #[arg(long, default_value_t = 0., allow_negative_numbers = true)]
    pub origin_y: f64,

    /// Write logs to this file; without it the interface logs nothing.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            headless: false,
            frame_delay_ms: None,
            cell_width: 2.,
            cell_height: 1.,
            origin_x: 0.,
            origin_y: 0.,
            log_file: None,
        }
    }
}

impl Config {
    /// Returns the maze geometry described by the configuration.
    ///
    /// The geometry is not validated here; that happens when the maze is built.
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        Geometry::new(self.cols, self.rows)
            .with_origin(self.origin_x, self.origin_y)
            .with_cell_size(self.cell_width, self.cell_height)
    }

    /// Returns the delay between animation frames in the interface.
    #[must_use]
    pub const fn frame_delay(&self) -> Duration {
        match self.frame_delay_ms {
            Some(millis) => Duration::from_millis(millis),
            None => Duration::from_millis(DEFAULT_FRAME_DELAY_MS),
        }
    }

    /// Returns the delay between render refreshes in headless mode, zero unless one was asked for.
    #[must_use]
    pub const fn headless_frame_delay(&self) -> Duration {
        match self.frame_delay_ms {
            Some(millis) => Duration::from_millis(millis),
            None => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parser() {
        let parsed = Config::try_parse_from(["backtrack-maze"]).expect("no arguments should parse");

        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_parse_all_flags() {
        let parsed = Config::try_parse_from([
            "backtrack-maze",
            "--rows",
            "3",
            "--cols",
            "4",
            "--seed",
            "99",
            "--headless",
            "--frame-delay-ms",
            "0",
            "--cell-width",
            "10",
            "--cell-height",
            "5",
            "--origin-x",
            "-2.5",
            "--origin-y",
            "7",
            "--log-file",
            "maze.log",
        ])
        .expect("arguments should parse");

        assert_eq!(parsed.rows, 3);
        assert_eq!(parsed.cols, 4);
        assert_eq!(parsed.seed, Some(99));
        assert!(parsed.headless);
        assert_eq!(parsed.frame_delay(), Duration::ZERO);
        assert_eq!(parsed.headless_frame_delay(), Duration::ZERO);
        assert_eq!(parsed.log_file, Some(PathBuf::from("maze.log")));

        let geometry = parsed.geometry();
        assert_eq!(
            geometry,
            Geometry::new(4, 3)
                .with_origin(-2.5, 7.)
                .with_cell_size(10., 5.)
        );
    }

    #[test]
    fn test_frame_delay_defaults_per_mode() {
        let config = Config::default();
        assert_eq!(config.frame_delay(), Duration::from_millis(DEFAULT_FRAME_DELAY_MS));
        assert_eq!(config.headless_frame_delay(), Duration::ZERO);

        let paced = Config::try_parse_from(["backtrack-maze", "--frame-delay-ms", "15"])
            .expect("arguments should parse");
        assert_eq!(paced.frame_delay(), Duration::from_millis(15));
        assert_eq!(paced.headless_frame_delay(), Duration::from_millis(15));
    }

    #[test]
    fn test_rejects_negative_rows() {
        assert!(Config::try_parse_from(["backtrack-maze", "--rows", "-1"]).is_err());
    }

    #[test]
    fn test_zero_rows_parse_but_do_not_validate() {
        let parsed =
            Config::try_parse_from(["backtrack-maze", "--rows", "0"]).expect("zero is a valid u16");

        assert!(parsed.geometry().validate().is_err());
    }
}
