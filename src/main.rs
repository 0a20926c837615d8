//! Tank Duel entry point
//!
//! Parses the command line, loads settings and runs a match on the terminal.

use std::path::PathBuf;

use clap::Parser;

use tank_duel::input::{ConsoleInput, NumberSource, ScriptedInput};
use tank_duel::renderer::{AsciiRenderer, Render};
use tank_duel::{Game, GameError, Settings};

#[derive(Debug, Parser)]
#[command(name = "tank-duel", version, about = "Two-player turn-based artillery duel")]
struct Cli {
    /// Seed for tank placement and wind (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override gravity
    #[arg(long)]
    gravity: Option<f64>,

    /// Override samples per trajectory
    #[arg(long)]
    samples: Option<usize>,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,

    /// Play from a comma separated list of velocity/angle pairs instead of stdin
    #[arg(long, value_name = "LIST")]
    script: Option<String>,
}

fn run<I: NumberSource, R: Render>(
    seed: u64,
    settings: &Settings,
    input: I,
    renderer: R,
) -> Result<(), GameError> {
    let mut game = Game::new(seed, settings, input, renderer)?;
    game.play()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(gravity) = cli.gravity {
        settings.gravity = gravity;
    }
    if let Some(samples) = cli.samples {
        settings.sample_count = samples;
    }
    if cli.no_color {
        settings.color = false;
    }
    settings.validate()?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Tank Duel starting with seed {seed}");

    let renderer = AsciiRenderer::stdout(
        settings.plot_width,
        settings.plot_height,
        settings.board_size,
        settings.color,
    );

    match cli.script.as_deref() {
        Some(script) => run(seed, &settings, ScriptedInput::parse(script)?, renderer)?,
        None => run(seed, &settings, ConsoleInput::stdio(), renderer)?,
    }
    Ok(())
}
