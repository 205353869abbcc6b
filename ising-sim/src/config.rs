use validator::{Validate, ValidationError};

use crate::error::LatticeError;
use crate::geometry::MAX_SITES;

/// Number of sites coupled to each site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeighborMode {
    /// Orthogonal neighbors only (von Neumann).
    Four,
    /// Orthogonal and diagonal neighbors (Moore).
    Eight,
}

impl NeighborMode {
    pub fn count(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
        }
    }
}

impl TryFrom<usize> for NeighborMode {
    type Error = LatticeError;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            _ => Err(LatticeError::InvalidNeighborMode(n)),
        }
    }
}

/// Temperature applied to each recorded frame.
#[derive(Debug, Clone, PartialEq)]
pub enum TemperatureSchedule {
    /// Same temperature for every frame.
    Constant(f64),
    /// `temps[k]` is the temperature of frame `k`.
    Sequence(Vec<f64>),
}

impl TemperatureSchedule {
    /// Temperature for frame `frame`.
    pub fn temperature_at(&self, frame: usize) -> Result<f64, LatticeError> {
        match self {
            Self::Constant(t) => Ok(*t),
            Self::Sequence(temps) => {
                temps
                    .get(frame)
                    .copied()
                    .ok_or(LatticeError::FrameOutOfRange {
                        frame,
                        frames: temps.len(),
                    })
            }
        }
    }

    /// Number of frames implied by the schedule, if it implies one.
    pub fn frame_count(&self) -> Option<usize> {
        match self {
            Self::Constant(_) => None,
            Self::Sequence(temps) => Some(temps.len()),
        }
    }

    /// Resolve the number of frames a multi-frame run should record.
    ///
    /// A sequence dictates its own length; a constant needs `requested`.
    pub fn resolve_frames(&self, requested: Option<usize>) -> Result<usize, LatticeError> {
        match (self.frame_count(), requested) {
            (Some(expected), Some(n)) if n != expected => {
                Err(LatticeError::ScheduleLengthMismatch {
                    expected,
                    requested: n,
                })
            }
            (Some(expected), _) => Ok(expected),
            (None, Some(n)) => Ok(n),
            (None, None) => Err(LatticeError::MissingFrameCount),
        }
    }

    fn temperatures(&self) -> &[f64] {
        match self {
            Self::Constant(t) => std::slice::from_ref(t),
            Self::Sequence(temps) => temps,
        }
    }
}

impl From<f64> for TemperatureSchedule {
    fn from(t: f64) -> Self {
        Self::Constant(t)
    }
}

impl From<Vec<f64>> for TemperatureSchedule {
    fn from(temps: Vec<f64>) -> Self {
        Self::Sequence(temps)
    }
}

fn validate_lattice_config(cfg: &LatticeConfig) -> Result<(), ValidationError> {
    match cfg.height.checked_mul(cfg.width) {
        Some(n) if n <= MAX_SITES => {}
        _ => return Err(ValidationError::new("height * width exceeds the maximum site count")),
    }
    if !(0.0..=1.0).contains(&cfg.initial_distribution) {
        return Err(ValidationError::new(
            "initial_distribution must lie in [0, 1]",
        ));
    }
    let temps = cfg.schedule.temperatures();
    if temps.is_empty() {
        return Err(ValidationError::new("temperature sequence must not be empty"));
    }
    if temps.iter().any(|t| !t.is_finite() || *t <= 0.0) {
        return Err(ValidationError::new(
            "temperatures must be finite and strictly positive",
        ));
    }
    Ok(())
}

/// Construction parameters of a [`Lattice`](crate::Lattice).
///
/// `initial_distribution` is the probability that a site starts as
/// [`Spin::Down`](crate::Spin::Down); `0.0` yields an all-up lattice.
#[derive(Debug, Clone, PartialEq, Validate)]
#[validate(schema(function = "validate_lattice_config"))]
pub struct LatticeConfig {
    #[validate(range(min = 1))]
    pub height: usize,
    #[validate(range(min = 1))]
    pub width: usize,
    pub initial_distribution: f64,
    pub neighbor_mode: NeighborMode,
    pub schedule: TemperatureSchedule,
}

impl LatticeConfig {
    pub fn new(
        height: usize,
        width: usize,
        initial_distribution: f64,
        neighbors: usize,
        schedule: impl Into<TemperatureSchedule>,
    ) -> Result<Self, LatticeError> {
        let cfg = Self {
            height,
            width,
            initial_distribution,
            neighbor_mode: NeighborMode::try_from(neighbors)?,
            schedule: schedule.into(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn n_sites(&self) -> usize {
        self.height * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_mode_parsing() {
        assert_eq!(NeighborMode::try_from(4).unwrap(), NeighborMode::Four);
        assert_eq!(NeighborMode::try_from(8).unwrap().count(), 8);
        for bad in [0, 3, 6, 9] {
            assert!(matches!(
                NeighborMode::try_from(bad),
                Err(LatticeError::InvalidNeighborMode(n)) if n == bad
            ));
        }
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(LatticeConfig::new(4, 4, 0.5, 4, 1.0).is_ok());
        assert!(matches!(
            LatticeConfig::new(4, 4, 0.5, 6, 1.0),
            Err(LatticeError::InvalidNeighborMode(6))
        ));
        for dist in [-0.1, 1.1, f64::NAN] {
            assert!(matches!(
                LatticeConfig::new(4, 4, dist, 4, 1.0),
                Err(LatticeError::InvalidConfig(_))
            ));
        }
        for temp in [0.0, -1.0, f64::INFINITY] {
            assert!(matches!(
                LatticeConfig::new(4, 4, 0.5, 8, temp),
                Err(LatticeError::InvalidConfig(_))
            ));
        }
        assert!(LatticeConfig::new(4, 4, 0.5, 4, vec![1.0, 0.0]).is_err());
        assert!(LatticeConfig::new(4, 4, 0.5, 4, Vec::<f64>::new()).is_err());
        assert!(LatticeConfig::new(0, 4, 0.5, 4, 1.0).is_err());
        assert!(LatticeConfig::new(4, 0, 0.5, 4, 1.0).is_err());
    }

    #[test]
    fn test_config_rejects_oversized_lattice() {
        assert!(matches!(
            LatticeConfig::new(usize::MAX, 2, 0.5, 4, 1.0),
            Err(LatticeError::InvalidConfig(_))
        ));
        assert!(matches!(
            LatticeConfig::new(MAX_SITES, 2, 0.5, 4, 1.0),
            Err(LatticeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_schedule_lookup() {
        let constant = TemperatureSchedule::from(2.0);
        assert_eq!(constant.temperature_at(17).unwrap(), 2.0);
        assert_eq!(constant.frame_count(), None);

        let seq = TemperatureSchedule::from(vec![3.0, 2.0, 1.0]);
        assert_eq!(seq.temperature_at(1).unwrap(), 2.0);
        assert!(matches!(
            seq.temperature_at(3),
            Err(LatticeError::FrameOutOfRange { frame: 3, frames: 3 })
        ));
    }

    #[test]
    fn test_resolve_frames() {
        let seq = TemperatureSchedule::from(vec![3.0, 2.0, 1.0]);
        assert_eq!(seq.resolve_frames(None).unwrap(), 3);
        assert_eq!(seq.resolve_frames(Some(3)).unwrap(), 3);
        assert!(matches!(
            seq.resolve_frames(Some(5)),
            Err(LatticeError::ScheduleLengthMismatch {
                expected: 3,
                requested: 5
            })
        ));

        let constant = TemperatureSchedule::from(1.5);
        assert_eq!(constant.resolve_frames(Some(7)).unwrap(), 7);
        assert!(matches!(
            constant.resolve_frames(None),
            Err(LatticeError::MissingFrameCount)
        ));
    }
}
