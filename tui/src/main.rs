use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use std::path::PathBuf;
use sweeper_core::{Game, Level};

mod input;
mod logging;
mod render;
mod term;

use input::Command;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    level: LevelArgs,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Append log records to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
#[group(multiple = false)]
struct LevelArgs {
    /// Play easy mode (9x9, 10 mines)
    #[arg(long)]
    easy: bool,

    /// Play medium mode (16x16, 40 mines)
    #[arg(long)]
    medium: bool,

    /// Play hard mode (16x30, 99 mines)
    #[arg(long)]
    hard: bool,
}

impl LevelArgs {
    fn level(&self) -> Level {
        if self.hard {
            Level::Hard
        } else if self.medium {
            Level::Medium
        } else {
            Level::Easy
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        logging::init(path, args.verbose.log_level_filter())
            .with_context(|| format!("Could not open log file {}", path.display()))?;
    }

    let level = args.level.level();
    log::debug!("level: {}, seed: {:?}", level, args.seed);
    let game = match args.seed {
        Some(seed) => Game::with_seed(level, seed),
        None => Game::new(level),
    };

    let mut screen = term::Screen::enter().context("Could not set up the terminal")?;
    run(&mut screen, game, level)
}

/// Event loop: redraws after every handled event until quit. Once the game is
/// over any key exits.
fn run(screen: &mut term::Screen, mut game: Game, level: Level) -> anyhow::Result<()> {
    render::draw(screen.out(), &game, level, terminal::size()?)?;

    loop {
        match event::read()? {
            Event::Resize(..) => {}
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if game.is_finished() {
                    break;
                }
                match input::map_key(key) {
                    Some(Command::Quit) => break,
                    Some(Command::Play(action)) => {
                        log::trace!("{:?} at {:?}", action, game.cursor());
                        game.apply(action)?;
                    }
                    None => continue,
                }
            }
            _ => continue,
        }
        render::draw(screen.out(), &game, level, terminal::size()?)?;
    }

    log::info!("Exiting with outcome {:?}", game.outcome());
    Ok(())
}
