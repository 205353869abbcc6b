pub mod config;
pub mod error;
pub mod geometry;
pub mod mcmc;
pub mod render;
pub mod simulation;
pub mod spins;
pub mod statistics;

mod parallel;

pub use config::{LatticeConfig, NeighborMode, TemperatureSchedule};
pub use error::LatticeError;
pub use simulation::{run_frames, run_parallel, Lattice};
pub use spins::{Site, Spin};
pub use statistics::{History, Observables};
