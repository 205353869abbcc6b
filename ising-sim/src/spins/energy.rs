use super::spin::Site;
use crate::geometry::Topology;

/// Distance-weighted sum of the neighbor spins of site `i`.
#[inline]
pub fn local_field(topology: &Topology, sites: &[Site], i: usize) -> f64 {
    topology
        .neighbors_of(i)
        .map(|(j, w)| sites[j].spin.as_f64() * w)
        .sum()
}

/// Potential of site `i`: `-2 * s_i * h_i`.
#[inline]
pub fn site_potential(topology: &Topology, sites: &[Site], i: usize) -> f64 {
    -2.0 * sites[i].spin.as_f64() * local_field(topology, sites, i)
}

/// Energy change caused by flipping site `i`: `2 * s_i * h_i`.
#[inline]
pub fn flip_energy_delta(topology: &Topology, sites: &[Site], i: usize) -> f64 {
    2.0 * sites[i].spin.as_f64() * local_field(topology, sites, i)
}

/// Per-site potentials in row-major order.
pub fn compute_potentials(topology: &Topology, sites: &[Site]) -> Vec<f64> {
    (0..topology.n_sites)
        .map(|i| site_potential(topology, sites, i))
        .collect()
}
