pub mod lattice;

pub use lattice::Lattice;

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::parallel::par_over;
use crate::statistics::Observables;

/// Record `frames` frames of `trials_per_frame` trials each on `lattice`.
///
/// Frame indices run from 0. With a temperature sequence the frame count is
/// the sequence length and `frames` may be `None`; passing a different count
/// is an error. With a constant temperature `frames` is required. The count
/// is resolved before any trial runs.
///
/// `on_frame(k, lattice)` is called after frame `k` is recorded (useful for
/// display or export). Returns the total number of accepted flips.
pub fn run_frames<R: Rng>(
    lattice: &mut Lattice<R>,
    trials_per_frame: usize,
    frames: Option<usize>,
    mut on_frame: impl FnMut(usize, &Lattice<R>),
) -> Result<usize> {
    let n_frames = lattice.schedule().resolve_frames(frames)?;
    info!(n_frames, trials_per_frame, "starting run");

    let mut accepted = 0;
    for frame in 0..n_frames {
        accepted += lattice.step(trials_per_frame, frame)?;
        on_frame(frame, lattice);
    }

    info!(
        n_frames,
        accepted,
        recorded = lattice.history().len(),
        "run finished"
    );
    Ok(accepted)
}

impl<R: Rng> Lattice<R> {
    /// Record a full run; see [`run_frames`].
    pub fn run(&mut self, trials_per_frame: usize, frames: Option<usize>) -> Result<usize> {
        run_frames(self, trials_per_frame, frames, |_, _| {})
    }

    /// Like [`Lattice::run`], handing each recorded frame to `on_frame`.
    pub fn run_with(
        &mut self,
        trials_per_frame: usize,
        frames: Option<usize>,
        on_frame: impl FnMut(usize, &Self),
    ) -> Result<usize> {
        run_frames(self, trials_per_frame, frames, on_frame)
    }
}

/// Run independent lattices, in parallel unless `sequential` is set, and
/// return each lattice's observables in input order.
///
/// Lattices share nothing, each trial sequence stays on a single thread.
pub fn run_parallel<R: Rng + Send>(
    lattices: &mut [Lattice<R>],
    trials_per_frame: usize,
    frames: Option<usize>,
    sequential: bool,
) -> Result<Vec<Observables>> {
    // Reject bad frame counts before any lattice is touched.
    for lat in lattices.iter() {
        lat.schedule().resolve_frames(frames)?;
    }
    par_over(lattices, sequential, |lat| {
        lat.run(trials_per_frame, frames)?;
        lat.observables()
    })
    .into_iter()
    .collect()
}
