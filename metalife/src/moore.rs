use itertools::Itertools;

/// Moore neighbours of `(y, x)` on a bounded `size`×`size` grid. Positions
/// off the edge are dropped rather than wrapped.
pub fn neighbours(size: usize, (y, x): (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
        .filter_map(move |(dy, dx)| {
            let p = (y.checked_add_signed(dy)?, x.checked_add_signed(dx)?);
            (p.0 < size && p.1 < size).then_some(p)
        })
}

/// All positions of a `size`×`size` grid in row-major order.
pub fn positions(size: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..size).cartesian_product(0..size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior() {
        let ps = neighbours(3, (1, 1)).collect_vec();
        assert_eq!(ps.len(), 8);
        assert!(!ps.contains(&(1, 1)));
    }

    #[test]
    fn test_corners() {
        for p in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(neighbours(5, p).count(), 3);
        }
        assert_eq!(
            neighbours(5, (0, 0)).sorted().collect_vec(),
            [(0, 1), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_edges() {
        for p in [(0, 2), (2, 0), (4, 2), (2, 4)] {
            assert_eq!(neighbours(5, p).count(), 5);
        }
    }

    #[test]
    fn test_no_wraparound() {
        // (4, 4) would be a neighbour of (0, 0) on a torus.
        assert!(neighbours(5, (0, 0)).all(|(y, x)| y <= 1 && x <= 1));
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(neighbours(1, (0, 0)).count(), 0);
    }

    #[test]
    fn test_positions() {
        assert_eq!(positions(2).collect_vec(), [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
