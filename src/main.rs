//! This crate contains the source code for the binary of the backtrack-maze generator and solver.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use backtrack_maze::{logging, App, Config};
use clap::Parser as _;
use color_eyre::{eyre::Result, install};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    logging::init(&config)?;
    config.geometry().validate()?;

    if config.headless {
        print!("{}", backtrack_maze::run_headless(&config)?);
        return Ok(());
    }

    let mut terminal = ratatui::init();
    let result = App::new(config).run(&mut terminal);
    ratatui::restore();

    result
}
