use super::offsets::offsets;
use crate::config::NeighborMode;

/// Largest lattice whose flat indices fit the `u32` neighbor table.
pub const MAX_SITES: usize = u32::MAX as usize;

/// Periodic 2D lattice with a precomputed neighbor table.
///
/// Sites are indexed in row-major order. For site `i`, entry
/// `i * n_neighbors + d` of the table holds the flat index of the neighbor in
/// direction `d` and the coupling weight `1 / |offset_d|`.
pub struct Topology {
    pub height: usize,
    pub width: usize,
    pub n_sites: usize,
    pub n_neighbors: usize,
    neighbors: Vec<u32>,
    /// One weight per direction; identical for every site.
    weights: Vec<f64>,
}

impl Topology {
    pub fn new(height: usize, width: usize, mode: NeighborMode) -> Self {
        Self::with_offsets(height, width, offsets(mode))
    }

    /// Build the table for arbitrary `(d_row, d_col)` offsets.
    ///
    /// Wrapping uses `rem_euclid`, so offsets that leave the lattice in either
    /// direction re-enter on the opposite edge.
    pub fn with_offsets(height: usize, width: usize, offsets: &[(isize, isize)]) -> Self {
        let n_sites = height
            .checked_mul(width)
            .filter(|&n| n <= MAX_SITES)
            .unwrap_or_else(|| panic!("{height}x{width} lattice exceeds {MAX_SITES} sites"));
        let n_neighbors = offsets.len();

        let mut neighbors = vec![0u32; n_sites * n_neighbors];
        for i in 0..n_sites {
            let (row, col) = (i / width, i % width);
            for (d, &(dr, dc)) in offsets.iter().enumerate() {
                let r = (row as isize + dr).rem_euclid(height as isize) as usize;
                let c = (col as isize + dc).rem_euclid(width as isize) as usize;
                neighbors[i * n_neighbors + d] = (r * width + c) as u32;
            }
        }

        let weights = offsets
            .iter()
            .map(|&(dr, dc)| 1.0 / ((dr * dr + dc * dc) as f64).sqrt())
            .collect();

        Self {
            height,
            width,
            n_sites,
            n_neighbors,
            neighbors,
            weights,
        }
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn coords(&self, flat_idx: usize) -> (usize, usize) {
        (flat_idx / self.width, flat_idx % self.width)
    }

    /// Flat index of the neighbor of `flat_idx` in direction `d`.
    #[inline]
    pub fn neighbor(&self, flat_idx: usize, d: usize) -> usize {
        self.neighbors[flat_idx * self.n_neighbors + d] as usize
    }

    /// Coupling weight in direction `d`: 1 for orthogonal, 1/√2 for diagonal.
    #[inline]
    pub fn weight(&self, d: usize) -> f64 {
        self.weights[d]
    }

    /// `(neighbor_index, weight)` pairs of `flat_idx`, in direction order.
    pub fn neighbors_of(&self, flat_idx: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let base = flat_idx * self.n_neighbors;
        self.neighbors[base..base + self.n_neighbors]
            .iter()
            .zip(self.weights.iter())
            .map(|(&j, &w)| (j as usize, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_four_neighbor_wrap() {
        // 3x4 lattice
        let topo = Topology::new(3, 4, NeighborMode::Four);
        assert_eq!(topo.n_sites, 12);
        assert_eq!(topo.n_neighbors, 4);

        // Site 0 = (0,0): (1,0)=4, (0,1)=1, (-1,0)->(2,0)=8, (0,-1)->(0,3)=3
        let n: Vec<usize> = (0..4).map(|d| topo.neighbor(0, d)).collect();
        assert_eq!(n, vec![4, 1, 8, 3]);

        // Site 11 = (2,3): (1,0)->(0,3)=3, (0,1)->(2,0)=8
        assert_eq!(topo.neighbor(11, 0), 3);
        assert_eq!(topo.neighbor(11, 1), 8);
        assert_eq!(topo.neighbor(11, 2), 7);
        assert_eq!(topo.neighbor(11, 3), 10);
    }

    #[test]
    fn test_boundary_wrap_is_symmetric() {
        let (h, w) = (5, 7);
        let topo = Topology::new(h, w, NeighborMode::Four);
        for c in 0..w {
            let top = topo.index(0, c);
            let bottom = topo.index(h - 1, c);
            assert!(topo.neighbors_of(top).any(|(j, _)| j == bottom));
            assert!(topo.neighbors_of(bottom).any(|(j, _)| j == top));
        }
        for r in 0..h {
            let left = topo.index(r, 0);
            let right = topo.index(r, w - 1);
            assert!(topo.neighbors_of(left).any(|(j, _)| j == right));
            assert!(topo.neighbors_of(right).any(|(j, _)| j == left));
        }
    }

    #[test]
    fn test_eight_neighbor_corners_and_weights() {
        let topo = Topology::new(4, 4, NeighborMode::Eight);
        assert_eq!(topo.n_neighbors, 8);

        // Site 0 = (0,0): diagonal (-1,-1) wraps to (3,3)=15, (1,-1) to (1,3)=7
        assert_eq!(topo.neighbor(0, 5), 15);
        assert_eq!(topo.neighbor(0, 7), 7);
        assert_eq!(topo.neighbor(0, 1), 5);

        for d in 0..8 {
            let expected = if d % 2 == 0 { 1.0 } else { std::f64::consts::FRAC_1_SQRT_2 };
            assert_relative_eq!(topo.weight(d), expected, epsilon = 1e-12);
        }
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_oversized_lattice_is_refused() {
        Topology::new(usize::MAX, 2, NeighborMode::Four);
    }

    #[test]
    fn test_coords_roundtrip_row_major() {
        let topo = Topology::new(3, 5, NeighborMode::Four);
        assert_eq!(topo.coords(7), (1, 2));
        assert_eq!(topo.index(1, 2), 7);
    }
}
