use std::io::{self, Write};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, fmt};
use wayfind_core::Cell;
use wayfind_demo::{Board, Cli, render};

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;
    let cli = Cli::parse();

    let mut board = Board::new(cli.width, cli.height);
    if !cli.blank {
        match cli.seed {
            Some(seed) => board.regenerate(StdRng::seed_from_u64(seed)),
            None => board.regenerate(rand::rng()),
        };
    }
    board.place(cli.start_cell(), Cell::Start);
    board.place(cli.end_cell(), Cell::End);
    for &p in &cli.toggle {
        board.cycle_forward(p);
    }
    for &p in &cli.untoggle {
        board.cycle_backward(p);
    }

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, board.trace())?;
        writeln!(stdout)?;
    } else {
        render(&mut stdout, &board, !cli.no_color)?;
    }
    for &p in &cli.inspect {
        match board.hover(p) {
            Some(text) => writeln!(stdout, "{text}")?,
            None => writeln!(stdout, "{p} was not visited")?,
        }
    }
    Ok(())
}
