use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use crossterm::style::{Attribute, Color, Stylize};

use mazeforge::{
    generators::{Generator, new_generator},
    logging,
    render::{self, Style},
};

/// Generate a perfect maze and print it to the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze size (cells per side)
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(5..=4096))]
    size: u16,

    /// Maze generation algorithm
    #[arg(long, value_enum, default_value_t = Generator::RecurDiv)]
    generator: Generator,

    /// Seed string; the same seed always reproduces the same maze
    #[arg(long, default_value = "")]
    seed: String,

    /// Print plain ASCII instead of coloured blocks
    #[arg(long)]
    no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = logging::init(args.log_file.as_deref())?;

    let mut maze = new_generator(args.generator, args.size, &args.seed)
        .with_context(|| format!("failed to set up a maze of size {}", args.size))?;
    maze.generate().context("maze generation failed")?;
    tracing::info!(
        "Generated {}x{} maze with {}",
        maze.size(),
        maze.size(),
        args.generator
    );

    let mut stdout = std::io::stdout().lock();
    let header = if args.seed.is_empty() {
        format!(
            "Maze size: {}\r\nMaze generator: {}\r\n",
            maze.size(),
            args.generator
        )
    } else {
        format!(
            "Maze size: {}\r\nGenerator seed: {}\r\nMaze generator: {}\r\n",
            maze.size(),
            args.seed,
            args.generator
        )
    };
    if args.no_color {
        write!(stdout, "{}", header)?;
    } else {
        write!(
            stdout,
            "{}",
            header.with(Color::Green).attribute(Attribute::Bold)
        )?;
    }

    let style = if args.no_color {
        Style::Plain
    } else {
        Style::Color
    };
    let placement = maze.placement();
    render::draw(&mut stdout, maze.grid(), placement.as_ref(), style)?;

    if let Some(placement) = placement {
        writeln!(
            stdout,
            "Start: {:?}  Exit: {:?} ({} border)",
            placement.start, placement.exit, placement.border
        )?;
    }
    Ok(())
}
