use std::time::Instant;

use ising_sim::render::Palette;
use ising_sim::{run_parallel, Lattice, LatticeConfig, LatticeError};
use tracing::info;
use tracing_subscriber::EnvFilter;

const L: usize = 64;
const N_FRAMES: usize = 40;
const SEED: u64 = 42;

fn main() -> Result<(), LatticeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Cool from T = 4 to T = 0.5, one sweep's worth of trials per frame.
    let temps: Vec<f64> = (0..N_FRAMES)
        .map(|k| 4.0 - 3.5 * k as f64 / (N_FRAMES - 1) as f64)
        .collect();

    let mut lattices = Vec::new();
    for (s, neighbors) in [4, 8].into_iter().enumerate() {
        let cfg = LatticeConfig::new(L, L, 0.5, neighbors, temps.clone())?;
        lattices.push(Lattice::seeded(cfg, SEED + s as u64)?);
    }

    let t0 = Instant::now();
    let results = run_parallel(&mut lattices, L * L, None, false)?;
    info!(elapsed_s = t0.elapsed().as_secs_f64(), "annealing done");

    for (lat, obs) in lattices.iter().zip(&results) {
        println!("{}-neighbor lattice", lat.neighbor_mode().count());
        println!("{:>8} {:>10} {:>10} {:>10}", "T", "m", "U", "Cv");
        for k in 0..obs.n_frames() {
            println!(
                "{:>8.3} {:>10.4} {:>10.4} {:>10.4}",
                obs.temperatures[k],
                obs.magnetization[k],
                obs.mean_potential[k],
                obs.heat_capacity[k],
            );
        }
    }

    let last = Palette::default().frame(&lattices[0], N_FRAMES - 1)?;
    for row in last.iter().take(16) {
        let line: String = row
            .iter()
            .take(L)
            .map(|&c| if c == [0, 0, 0] { '#' } else { '.' })
            .collect();
        println!("{line}");
    }

    Ok(())
}
