// src/bin/cli.rs
use color_eyre::eyre::Result;

use school_timetable::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run()?;
    Ok(())
}
