use rand::Rng;

use crate::geometry::Topology;
use crate::spins::{flip_energy_delta, Site};

/// Metropolis acceptance probability `min(1, exp(-ΔE / T))`.
#[inline]
pub fn acceptance_probability(energy_delta: f64, temp: f64) -> f64 {
    if energy_delta <= 0.0 {
        1.0
    } else {
        (-energy_delta / temp).exp()
    }
}

/// Decide a proposed flip given a uniform draw `u` in `[0, 1)`.
///
/// Non-positive `energy_delta` is accepted for every `u` in `[0, 1)`.
#[inline]
pub fn accept(energy_delta: f64, temp: f64, u: f64) -> bool {
    u < acceptance_probability(energy_delta, temp)
}

/// One single-spin-flip trial at a uniformly chosen site.
///
/// Draws the row, then the column, then (only if the flip costs energy) one
/// uniform `f64`. Returns whether the flip was accepted.
#[inline]
pub fn metropolis_trial<R: Rng + ?Sized>(
    topology: &Topology,
    sites: &mut [Site],
    temp: f64,
    rng: &mut R,
) -> bool {
    let row = rng.gen_range(0..topology.height);
    let col = rng.gen_range(0..topology.width);
    let i = topology.index(row, col);

    let energy_delta = flip_energy_delta(topology, sites, i);
    // No uniform draw for downhill flips.
    let accepted = energy_delta <= 0.0 || accept(energy_delta, temp, rng.gen::<f64>());
    if accepted {
        sites[i].flip();
    }
    accepted
}

/// Run `n_trials` sequential trials and return how many flips were accepted.
#[cfg_attr(feature = "profile", inline(never))]
pub fn metropolis_batch<R: Rng + ?Sized>(
    topology: &Topology,
    sites: &mut [Site],
    temp: f64,
    n_trials: usize,
    rng: &mut R,
) -> usize {
    (0..n_trials)
        .filter(|_| metropolis_trial(topology, sites, temp, rng))
        .count()
}
