use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use petri_core::{BoardConfig, GridSeeder, RandomGridSeeder, Simulation, StepOutcome, TextRenderer};

/// Conway's Game of Life on a bounded terminal grid.
#[derive(Debug, Parser)]
#[command(name = "petri", version, about)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = 40)]
    cols: usize,

    /// Board height in cells
    #[arg(long, default_value_t = 30)]
    rows: usize,

    /// Percentage chance for each cell to start alive
    #[arg(long, default_value_t = 2)]
    life_percent: u8,

    /// Stop after this many generations even if life persists
    #[arg(long, default_value_t = 50)]
    generations: u64,

    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Seed for the initial board; derived from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Glyph drawn for live cells
    #[arg(long, default_value_t = '#')]
    alive_glyph: char,

    /// Glyph drawn for dead cells
    #[arg(long, default_value_t = ' ')]
    dead_glyph: char,

    #[command(flatten)]
    verbosity: Verbosity,
}

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("seeding board with {seed}, rerun with --seed {seed} to reproduce");

    let config = BoardConfig::new((args.cols, args.rows), args.life_percent);
    let renderer = TextRenderer::new(args.alive_glyph, args.dead_glyph);
    let mut sim = Simulation::new(RandomGridSeeder::new(seed).generate(config));

    let stdout = io::stdout();
    let mut settled = false;

    for generation in 0..args.generations {
        {
            let mut out = stdout.lock();
            write!(out, "{CLEAR_SCREEN}")?;
            writeln!(out, "{}", renderer.render(sim.grid()))?;
            out.flush()?;
        }

        if sim.is_extinct() {
            log::info!("population extinct after {generation} generations");
            break;
        }
        if settled {
            log::info!("board settled into a still life after {generation} generations");
            break;
        }

        settled = matches!(sim.step(), StepOutcome::Settled);
        thread::sleep(Duration::from_millis(args.delay_ms));
    }

    println!();
    Ok(())
}
