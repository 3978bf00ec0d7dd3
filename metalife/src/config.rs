use crate::{Error, Result};

/// Side length and seeding probability shared by the macro grid and every
/// inner automaton it creates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    size: usize,
    alive_probability: f64,
}

impl Config {
    pub fn new(size: usize, alive_probability: f64) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize { size });
        }
        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(Error::InvalidProbability {
                probability: alive_probability,
            });
        }
        Ok(Self {
            size,
            alive_probability,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn alive_probability(&self) -> f64 {
        self.alive_probability
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 50,
            alive_probability: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_size() {
        assert_eq!(Config::new(0, 0.5), Err(Error::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_rejects_bad_probability() {
        for p in [-0.1, 1.5, f64::INFINITY] {
            assert_eq!(
                Config::new(4, p),
                Err(Error::InvalidProbability { probability: p })
            );
        }
        assert!(Config::new(4, f64::NAN).is_err());
    }

    #[test]
    fn test_accepts_bounds() {
        assert!(Config::new(1, 0.0).is_ok());
        assert!(Config::new(1, 1.0).is_ok());
        let config = Config::default();
        assert_eq!((config.size(), config.alive_probability()), (50, 0.2));
    }
}
