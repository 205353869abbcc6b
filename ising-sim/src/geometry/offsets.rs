use std::f64::consts::PI;

use crate::config::NeighborMode;

/// Orthogonal offsets `(d_row, d_col)`, in increasing-angle order.
pub const VON_NEUMANN: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Orthogonal and diagonal offsets `(d_row, d_col)`, in increasing-angle order.
pub const MOORE: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Neighbor offsets for `mode`.
///
/// The row offset of neighbor `n` is `round(cos(2πn/k))` and the column offset
/// `round(sin(2πn/k))` for `k` neighbors; the tables above are those values.
pub fn offsets(mode: NeighborMode) -> &'static [(isize, isize)] {
    match mode {
        NeighborMode::Four => &VON_NEUMANN,
        NeighborMode::Eight => &MOORE,
    }
}

/// Sample `k` evenly spaced points on the unit circle and round them onto the
/// integer grid.
pub fn circle_offsets(k: usize) -> Vec<(isize, isize)> {
    (0..k)
        .map(|n| {
            let angle = 2.0 * PI * n as f64 / k as f64;
            (angle.cos().round() as isize, angle.sin().round() as isize)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_match_circle_sampling() {
        assert_eq!(circle_offsets(4), VON_NEUMANN.to_vec());
        assert_eq!(circle_offsets(8), MOORE.to_vec());
    }

    #[test]
    fn test_offsets_are_distinct_and_nonzero() {
        for mode in [NeighborMode::Four, NeighborMode::Eight] {
            let offs = offsets(mode);
            assert_eq!(offs.len(), mode.count());
            assert!(offs.iter().all(|&o| o != (0, 0)));
            for (i, a) in offs.iter().enumerate() {
                assert!(offs[i + 1..].iter().all(|b| a != b));
            }
        }
    }
}
