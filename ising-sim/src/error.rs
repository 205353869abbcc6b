use thiserror::Error;
use validator::ValidationErrors;

/// Errors reported by lattice construction, stepping and analysis.
///
/// Every variant is raised before any lattice state is touched, so a failed
/// call leaves the lattice exactly as it was.
#[derive(Debug, Error)]
pub enum LatticeError {
    /// Construction parameters failed validation.
    #[error("invalid lattice configuration: {0}")]
    InvalidConfig(#[from] ValidationErrors),

    #[error("neighbor mode must be 4 or 8, got {0}")]
    InvalidNeighborMode(usize),

    /// A temperature sequence was paired with a different frame count.
    #[error("temperature schedule has {expected} entries but {requested} frames were requested")]
    ScheduleLengthMismatch { expected: usize, requested: usize },

    #[error("frame {frame} is outside the temperature schedule ({frames} entries)")]
    FrameOutOfRange { frame: usize, frames: usize },

    /// A constant schedule does not imply a frame count.
    #[error("a frame count is required when the temperature is constant")]
    MissingFrameCount,

    /// Observables were requested before any frame was recorded.
    #[error("no frames recorded yet; call `step` or `run` first")]
    NoFrames,

    #[error("spin value must be +1 or -1, got {0}")]
    InvalidSpin(i8),
}

pub type Result<T> = std::result::Result<T, LatticeError>;
