//! Headless run of the reference world, printing statistics as JSON lines.
//!
//! Set `RUST_LOG=anosmellya_engine=debug` (or `trace`) to see the engine's
//! own logging on stderr.

use anosmellya_bench::{reference_profile, REFERENCE_HEIGHT, REFERENCE_WIDTH};
use tracing_subscriber::EnvFilter;

const SEED: u32 = 42;
const TICKS: u32 = 1000;
const STAT_INTERVAL: u32 = 100;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut world = match reference_profile(SEED, 0) {
        Ok(world) => world,
        Err(err) => {
            tracing::error!(%err, "cannot build world");
            std::process::exit(1);
        }
    };
    tracing::info!(
        width = REFERENCE_WIDTH,
        height = REFERENCE_HEIGHT,
        workers = world.worker_count(),
        "running {TICKS} ticks"
    );

    println!("{}", world.statistics());
    for _ in 0..TICKS {
        world.simulate();
        if world.tick() % u64::from(STAT_INTERVAL) == 0 {
            println!("{}", world.statistics());
            let m = world.last_metrics();
            tracing::debug!(
                tick = world.tick(),
                fluid_us = m.fluid_us,
                animal_us = m.animal_us,
                births = m.births,
                deaths = m.deaths,
                "checkpoint"
            );
        }
        let stats = world.statistics();
        if stats.population() == 0 {
            tracing::info!(tick = world.tick(), "population extinct");
            println!("{stats}");
            break;
        }
    }
}
