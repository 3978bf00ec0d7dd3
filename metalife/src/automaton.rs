use rand::Rng;

use crate::Config;

/// A binary cellular automaton that can live inside a macro cell.
pub trait Automaton {
    /// A fresh instance of side `config.size()`, each cell live with
    /// probability `config.alive_probability()`.
    fn seeded<R: Rng>(config: &Config, rng: &mut R) -> Self;

    /// Advance one generation in place. Must not panic; the engine makes no
    /// promise about its grid if it does.
    fn step(&mut self);

    fn size(&self) -> usize;

    /// Row-major cell states, `size() * size()` of them, 0 dead and 1 live.
    fn cells(&self) -> &[u8];

    /// Whether any cell is live. `None` when a cell holds something other
    /// than 0 or 1, in which case the answer is unknown.
    fn liveness(&self) -> Option<bool> {
        self.cells()
            .iter()
            .try_fold(false, |any, &c| match c {
                0 => Some(any),
                1 => Some(true),
                _ => None,
            })
    }

    /// Fraction of live cells.
    fn density(&self) -> f64 {
        let cells = self.cells();
        if cells.is_empty() {
            return 0.;
        }
        cells.iter().filter(|&&c| c == 1).count() as f64 / cells.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Raw(Vec<u8>);

    impl Automaton for Raw {
        fn seeded<R: Rng>(config: &Config, _: &mut R) -> Self {
            Raw(vec![0; config.size() * config.size()])
        }

        fn step(&mut self) {}

        fn size(&self) -> usize {
            self.0.len().isqrt()
        }

        fn cells(&self) -> &[u8] {
            &self.0
        }
    }

    #[test]
    fn test_liveness() {
        assert_eq!(Raw(vec![0, 0, 0, 0]).liveness(), Some(false));
        assert_eq!(Raw(vec![0, 1, 0, 0]).liveness(), Some(true));
        assert_eq!(Raw(vec![]).liveness(), Some(false));
    }

    #[test]
    fn test_liveness_unknown() {
        // A corrupt state is unknown even when a live cell precedes it.
        assert_eq!(Raw(vec![1, 7, 0, 0]).liveness(), None);
        assert_eq!(Raw(vec![0, 0, 2, 0]).liveness(), None);
    }

    #[test]
    fn test_density() {
        assert_eq!(Raw(vec![1, 1, 0, 0]).density(), 0.5);
        assert_eq!(Raw(vec![]).density(), 0.);
    }
}
