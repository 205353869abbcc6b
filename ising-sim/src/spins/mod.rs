pub mod energy;
pub mod spin;

pub use energy::{compute_potentials, flip_energy_delta, local_field, site_potential};
pub use spin::{Site, Spin};
