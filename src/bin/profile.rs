use std::time::{Duration, Instant};

use mazeforge::{
    generators::{Generator, new_generator},
    logging,
};

/// Times repeated generation: `profile [iterations] [size]`.
fn main() -> anyhow::Result<()> {
    let _guard = logging::init(None)?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(100)
        .max(1);
    let size = args
        .next()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(u8::MAX as u16);

    for generator in [Generator::RecurBacktrack, Generator::RecurDiv] {
        let mut maze = new_generator(generator, size, "profile")?;
        let mut total = Duration::ZERO;
        for _ in 0..num_iters {
            let started = Instant::now();
            maze.generate()?;
            total += started.elapsed();
        }
        tracing::info!(
            "{}: {} runs at size {} took {:?} ({:?} per maze)",
            generator,
            num_iters,
            maze.size(),
            total,
            total / num_iters
        );
    }
    Ok(())
}
