pub mod metropolis;

pub use metropolis::{accept, acceptance_probability, metropolis_batch, metropolis_trial};
