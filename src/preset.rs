//! Maze size presets offered in the size menu.

use crate::config::Config;

/// A named pair of maze dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Preset {
    /// Name shown in the size menu.
    pub(crate) label: String,
    /// Number of columns.
    pub(crate) num_cols: u16,
    /// Number of rows.
    pub(crate) num_rows: u16,
}

/// Built-in presets as `(name, columns, rows)`.
const BUILT_IN: [(&str, u16, u16); 5] = [
    ("Tiny", 4, 3),
    ("Small", 10, 6),
    ("Medium", 20, 12),
    ("Large", 32, 16),
    ("Huge", 60, 24),
];

impl Preset {
    /// Builds a preset whose label carries its dimensions.
    pub(crate) fn new(name: &str, num_cols: u16, num_rows: u16) -> Self {
        Self {
            label: format!("{name} ({num_cols}x{num_rows})"),
            num_cols,
            num_rows,
        }
    }

    /// Returns the preset matching the command-line dimensions.
    pub(crate) fn from_config(config: &Config) -> Self {
        Self::new("Command line", config.cols, config.rows)
    }

    /// Returns every preset offered in the size menu, the command-line one first.
    pub(crate) fn catalog(config: &Config) -> Vec<Self> {
        let mut presets = vec![Self::from_config(config)];
        presets.extend(
            BUILT_IN
                .into_iter()
                .map(|(name, num_cols, num_rows)| Self::new(name, num_cols, num_rows)),
        );

        presets
    }
}
