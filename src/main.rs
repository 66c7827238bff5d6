use std::env;

use anyhow::Context;
use classweep::{
    sweeper::ClassSweeper,
    CrewOptions,
    SweeperCrew,
};
use clap::Parser;

mod args;
use args::Args;

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    env_logger::init();

    let root_path = env::current_dir().context("failed to resolve the current directory")?;
    let root_path = dunce::canonicalize(&root_path)
        .with_context(|| format!("invalid root path {}", root_path.display()))?;
    log::debug!("Root path: {}", root_path.display());

    let crew = {
        let mut crew = SweeperCrew::new();
        crew.register(ClassSweeper::new());

        crew
    };

    crew.execute(&root_path, CrewOptions::default())
        .with_context(|| format!("sweeping {} aborted", root_path.display()))?;

    Ok(())
}
