use super::History;
use crate::error::Result;

/// Per-frame thermodynamic observables.
///
/// Every vector is indexed by frame and has the length of the history it was
/// derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Observables {
    /// ⟨s⟩ — mean spin, in `[-1, 1]`.
    pub magnetization: Vec<f64>,
    /// ⟨U⟩ — mean per-site potential.
    pub mean_potential: Vec<f64>,
    /// ⟨U²⟩.
    pub mean_square_potential: Vec<f64>,
    /// `(⟨U²⟩ - ⟨U⟩²) / T²`, using the spread of potentials across sites
    /// within the frame.
    pub heat_capacity: Vec<f64>,
    /// Temperature each frame ran at.
    pub temperatures: Vec<f64>,
}

impl Observables {
    pub fn from_history(history: &History) -> Result<Self> {
        let magnetization = history.magnetization()?;
        let (mean_potential, mean_square_potential) = history.potential_moments()?;
        let temperatures = history.temperatures().to_vec();
        let heat_capacity = heat_capacity(&temperatures, &mean_potential, &mean_square_potential);
        Ok(Self {
            magnetization,
            mean_potential,
            mean_square_potential,
            heat_capacity,
            temperatures,
        })
    }

    pub fn n_frames(&self) -> usize {
        self.magnetization.len()
    }
}

/// Heat capacity `(U2[k] - U[k]²) / T[k]²` for each `k`.
pub fn heat_capacity(temps: &[f64], mean: &[f64], mean_sq: &[f64]) -> Vec<f64> {
    temps
        .iter()
        .zip(mean)
        .zip(mean_sq)
        .map(|((&t, &u), &u2)| (u2 - u * u) / (t * t))
        .collect()
}
