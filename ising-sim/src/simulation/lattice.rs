use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::{debug, info};
use validator::Validate;

use crate::config::{LatticeConfig, NeighborMode, TemperatureSchedule};
use crate::error::Result;
use crate::geometry::Topology;
use crate::mcmc::metropolis_batch;
use crate::spins::{self, Site, Spin};
use crate::statistics::{History, Observables};

/// A periodic 2D spin lattice together with its measurement history.
///
/// Sites are stored row-major and are only ever flipped in place; the
/// generator `rng` is the single source of randomness for initialization and
/// for every Metropolis trial.
pub struct Lattice<R: Rng = Xoshiro256StarStar> {
    config: LatticeConfig,
    topology: Topology,
    sites: Vec<Site>,
    history: History,
    rng: R,
}

impl Lattice<Xoshiro256StarStar> {
    /// Build a lattice driven by a xoshiro generator seeded with `seed`.
    pub fn seeded(config: LatticeConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, Xoshiro256StarStar::seed_from_u64(seed))
    }
}

impl<R: Rng> Lattice<R> {
    /// Validate `config` and draw the initial spins from `rng`.
    ///
    /// Each site, in row-major order, draws one uniform `p` and starts
    /// [`Spin::Down`] if `p < initial_distribution`, otherwise [`Spin::Up`].
    pub fn with_rng(config: LatticeConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let topology = Topology::new(config.height, config.width, config.neighbor_mode);
        let sites = init_sites(&config, &mut rng);
        Ok(Self {
            config,
            topology,
            sites,
            history: History::new(),
            rng,
        })
    }

    /// Re-draw every spin from the construction parameters and drop all history.
    ///
    /// The generator keeps its current state, so the new spins are fresh
    /// draws rather than a replay of the first initialization.
    pub fn reset(&mut self) {
        self.sites = init_sites(&self.config, &mut self.rng);
        self.history = History::new();
        info!(
            height = self.config.height,
            width = self.config.width,
            "lattice reset"
        );
    }

    /// Run `n_trials` Metropolis trials at the temperature of frame `frame`,
    /// then record one snapshot. Returns the number of accepted flips.
    pub fn step(&mut self, n_trials: usize, frame: usize) -> Result<usize> {
        let temp = self.config.schedule.temperature_at(frame)?;
        let accepted = metropolis_batch(
            &self.topology,
            &mut self.sites,
            temp,
            n_trials,
            &mut self.rng,
        );
        self.record(temp);
        debug!(frame, temp, n_trials, accepted, "frame recorded");
        Ok(accepted)
    }

    fn record(&mut self, temp: f64) {
        let spins = self.sites.iter().map(|s| s.spin.value()).collect();
        let potentials = spins::compute_potentials(&self.topology, &self.sites);
        self.history.push(spins, potentials, temp);
    }

    /// Magnetization, mean potential and heat capacity of every recorded frame.
    pub fn observables(&self) -> Result<Observables> {
        Observables::from_history(&self.history)
    }

    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn neighbor_mode(&self) -> NeighborMode {
        self.config.neighbor_mode
    }

    pub fn schedule(&self) -> &TemperatureSchedule {
        &self.config.schedule
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// All sites in row-major order.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Flat index of `(row, col)`. Panics if either coordinate is out of bounds.
    fn checked_index(&self, row: usize, col: usize) -> usize {
        let (height, width) = (self.config.height, self.config.width);
        assert!(
            row < height && col < width,
            "site ({row}, {col}) is outside the {height}x{width} lattice"
        );
        self.topology.index(row, col)
    }

    /// Site at `(row, col)`. Panics if out of bounds.
    pub fn site(&self, row: usize, col: usize) -> &Site {
        &self.sites[self.checked_index(row, col)]
    }

    /// Neighbors of `(row, col)` in offset order, wrapping at every edge.
    /// Panics if `(row, col)` is out of bounds.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = &Site> + '_ {
        self.topology
            .neighbors_of(self.checked_index(row, col))
            .map(move |(j, _)| &self.sites[j])
    }

    /// Panics if `(row, col)` is out of bounds.
    pub fn local_field(&self, row: usize, col: usize) -> f64 {
        spins::local_field(&self.topology, &self.sites, self.checked_index(row, col))
    }

    /// Current spins as a row-major `height x width` grid.
    pub fn spin_grid(&self) -> Vec<Vec<Spin>> {
        self.sites
            .chunks(self.config.width)
            .map(|row| row.iter().map(|s| s.spin).collect())
            .collect()
    }
}

fn init_sites<R: Rng>(config: &LatticeConfig, rng: &mut R) -> Vec<Site> {
    let width = config.width;
    (0..config.n_sites())
        .map(|i| {
            let spin = if rng.gen::<f64>() < config.initial_distribution {
                Spin::Down
            } else {
                Spin::Up
            };
            Site::new(i / width, i % width, spin)
        })
        .collect()
}
