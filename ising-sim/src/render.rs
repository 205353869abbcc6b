//! Presentation adapter: maps spins onto two display colours.
//!
//! Nothing in the simulation depends on this module; it only reads spins from
//! a [`Lattice`] or its [`History`](crate::statistics::History).

use rand::Rng;

use crate::error::{LatticeError, Result};
use crate::simulation::Lattice;
use crate::spins::Spin;

pub type Rgb = [u8; 3];

/// Colour assigned to each spin state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub up: Rgb,
    pub down: Rgb,
}

impl Default for Palette {
    /// Up is black, down is white.
    fn default() -> Self {
        Self {
            up: [0, 0, 0],
            down: [255, 255, 255],
        }
    }
}

impl Palette {
    pub fn color(&self, spin: Spin) -> Rgb {
        match spin {
            Spin::Up => self.up,
            Spin::Down => self.down,
        }
    }

    /// Inverse of [`Palette::color`]; `None` for a colour outside the palette.
    pub fn spin(&self, color: Rgb) -> Option<Spin> {
        if color == self.up {
            Some(Spin::Up)
        } else if color == self.down {
            Some(Spin::Down)
        } else {
            None
        }
    }

    /// Current lattice as a row-major `height x width` colour grid.
    pub fn grid<R: Rng>(&self, lattice: &Lattice<R>) -> Vec<Vec<Rgb>> {
        lattice
            .spin_grid()
            .into_iter()
            .map(|row| row.into_iter().map(|s| self.color(s)).collect())
            .collect()
    }

    /// Recorded frame `frame` as a colour grid.
    pub fn frame<R: Rng>(&self, lattice: &Lattice<R>, frame: usize) -> Result<Vec<Vec<Rgb>>> {
        let history = lattice.history();
        if history.is_empty() {
            return Err(LatticeError::NoFrames);
        }
        let spins = history
            .spins()
            .get(frame)
            .ok_or(LatticeError::FrameOutOfRange {
                frame,
                frames: history.len(),
            })?;
        spins
            .chunks(lattice.width())
            .map(|row| {
                row.iter()
                    .map(|&v| Spin::try_from(v).map(|s| self.color(s)))
                    .collect::<Result<Vec<_>>>()
            })
            .collect()
    }

    /// Every recorded frame as a colour grid, in frame order.
    pub fn frames<R: Rng>(&self, lattice: &Lattice<R>) -> Result<Vec<Vec<Vec<Rgb>>>> {
        let n = lattice.history().len();
        if n == 0 {
            return Err(LatticeError::NoFrames);
        }
        (0..n).map(|k| self.frame(lattice, k)).collect()
    }
}
