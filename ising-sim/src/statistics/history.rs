use crate::error::{LatticeError, Result};

/// Measurement snapshots, one per recorded frame.
///
/// `spins[k]` and `potentials[k]` are the row-major spin values and per-site
/// potentials after frame `k`; `temperatures[k]` is the temperature the
/// frame's trials ran at. All three always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    spins: Vec<Vec<i8>>,
    potentials: Vec<Vec<f64>>,
    temperatures: Vec<f64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, spins: Vec<i8>, potentials: Vec<f64>, temp: f64) {
        debug_assert_eq!(spins.len(), potentials.len());
        self.spins.push(spins);
        self.potentials.push(potentials);
        self.temperatures.push(temp);
    }

    pub fn len(&self) -> usize {
        self.spins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    pub fn spins(&self) -> &[Vec<i8>] {
        &self.spins
    }

    pub fn potentials(&self) -> &[Vec<f64>] {
        &self.potentials
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    /// Per-frame `(⟨U⟩, ⟨U²⟩)` over sites.
    pub fn potential_moments(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        if self.is_empty() {
            return Err(LatticeError::NoFrames);
        }
        Ok(self
            .potentials
            .iter()
            .map(|frame| (mean(frame.iter().copied()), mean(frame.iter().map(|u| u * u))))
            .unzip())
    }

    /// Per-frame mean spin.
    pub fn magnetization(&self) -> Result<Vec<f64>> {
        if self.is_empty() {
            return Err(LatticeError::NoFrames);
        }
        Ok(self
            .spins
            .iter()
            .map(|frame| mean(frame.iter().map(|&s| s as f64)))
            .collect())
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    values.sum::<f64>() / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_history_is_usage_error() {
        let h = History::new();
        assert!(matches!(h.potential_moments(), Err(LatticeError::NoFrames)));
        assert!(matches!(h.magnetization(), Err(LatticeError::NoFrames)));
    }

    #[test]
    fn test_moments_per_frame() {
        let mut h = History::new();
        h.push(vec![1, 1, -1, -1], vec![-2.0, 2.0, -4.0, 4.0], 1.0);
        h.push(vec![1, 1, 1, -1], vec![-8.0, -8.0, -8.0, -8.0], 2.0);
        assert_eq!(h.len(), 2);

        let (u, u2) = h.potential_moments().unwrap();
        assert_relative_eq!(u[0], 0.0);
        assert_relative_eq!(u2[0], 10.0);
        assert_relative_eq!(u[1], -8.0);
        assert_relative_eq!(u2[1], 64.0);

        let m = h.magnetization().unwrap();
        assert_eq!(m, vec![0.0, 0.5]);
        assert_eq!(h.temperatures(), &[1.0, 2.0]);
    }
}
