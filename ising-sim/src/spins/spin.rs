use crate::error::LatticeError;

/// Two-valued spin state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Spin {
    Up = 1,
    Down = -1,
}

impl Spin {
    #[inline]
    pub fn value(self) -> i8 {
        self as i8
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.value() as f64
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl TryFrom<i8> for Spin {
    type Error = LatticeError;
    fn try_from(v: i8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Self::Up),
            -1 => Ok(Self::Down),
            _ => Err(LatticeError::InvalidSpin(v)),
        }
    }
}

impl From<Spin> for i8 {
    fn from(s: Spin) -> Self {
        s.value()
    }
}

/// One lattice position and its spin.
///
/// `row` and `col` are fixed when the owning lattice allocates its sites;
/// only the spin changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    row: usize,
    col: usize,
    pub spin: Spin,
}

impl Site {
    pub(crate) fn new(row: usize, col: usize, spin: Spin) -> Self {
        Self { row, col, spin }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    #[inline]
    pub fn flip(&mut self) {
        self.spin = self.spin.flipped();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_values() {
        assert_eq!(Spin::Up.value(), 1);
        assert_eq!(Spin::Down.value(), -1);
        assert_eq!(Spin::Up.flipped(), Spin::Down);
        assert_eq!(Spin::Down.flipped().flipped(), Spin::Down);
    }

    #[test]
    fn test_spin_decoding_rejects_other_values() {
        assert_eq!(Spin::try_from(1).unwrap(), Spin::Up);
        assert_eq!(Spin::try_from(-1).unwrap(), Spin::Down);
        for v in [0, 2, -2, i8::MAX] {
            assert!(matches!(Spin::try_from(v), Err(LatticeError::InvalidSpin(x)) if x == v));
        }
    }

    #[test]
    fn test_site_flip_keeps_position() {
        let mut site = Site::new(2, 3, Spin::Up);
        site.flip();
        assert_eq!(site.spin, Spin::Down);
        assert_eq!((site.row(), site.col()), (2, 3));
    }
}
