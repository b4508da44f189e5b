use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minegrid_core::{BoardEngine, Difficulty, Placement};

mod app;
mod command;
mod render;

use app::Response;

#[derive(Parser, Debug)]
#[command(version, about = "Reveal every safe cell without hitting a mine", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Board preset: easy, medium or hard
    #[arg(short, long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Place mines with a shuffle instead of rejection sampling
    #[arg(long)]
    shuffle: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");

    let placement = if args.shuffle {
        Placement::Shuffle
    } else {
        Placement::Rejection
    };
    let mut engine = BoardEngine::with_placement(args.difficulty, seed, placement)
        .context("Could not create the first board")?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render::render_game(&engine))?;
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read input")?;

        let command = match command::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(stdout, "error: {err}")?;
                continue;
            }
        };

        match app::execute(&mut engine, command) {
            Ok(Response::Redraw) => write!(stdout, "{}", render::render_game(&engine))?,
            Ok(Response::Unchanged) => {}
            Ok(Response::ShowHelp) => write!(stdout, "{}", app::HELP)?,
            Ok(Response::Quit) => break,
            Err(err) => writeln!(stdout, "error: {err}")?,
        }
        stdout.flush()?;
    }

    log::debug!("Exiting");
    Ok(())
}
