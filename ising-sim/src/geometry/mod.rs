pub mod offsets;
pub mod topology;

pub use offsets::{circle_offsets, offsets, MOORE, VON_NEUMANN};
pub use topology::{Topology, MAX_SITES};
