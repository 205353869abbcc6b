pub mod history;
pub mod observables;

pub use history::History;
pub use observables::{heat_capacity, Observables};
