use std::fmt::Display;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Automaton, BasicLife, Config, Error, MacroCell, MacroGrid, Result};

/// What happened to the macro cells during the last step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transitions {
    /// Empty cells that received a fresh automaton.
    pub born: usize,
    /// Occupied cells that kept their (advanced) automaton.
    pub survived: usize,
    /// Occupied cells whose automaton was swapped for a fresh one.
    pub replaced: usize,
    /// Occupied cells that were cleared.
    pub died: usize,
}

impl Display for Transitions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Transitions {
            born,
            survived,
            replaced,
            died,
        } = self;
        write!(
            f,
            "{born} born, {survived} survived, {replaced} replaced, {died} died"
        )
    }
}

/// Game of Life whose cells are themselves games of life.
///
/// A macro cell is alive when its inner automaton has a live cell. Each step
/// advances every inner automaton once and applies B3/S23 to the macro grid,
/// where a birth on an occupied cell installs a fresh automaton.
#[derive(Debug)]
pub struct Engine<A = BasicLife, R = StdRng> {
    config: Config,
    grid: MacroGrid<A>,
    rng: R,
    generation: usize,
    transitions: Transitions,
}

impl Engine {
    pub fn new(size: usize, alive_probability: f64) -> Result<Self> {
        let config = Config::new(size, alive_probability)?;
        Ok(Self::with_rng(config, StdRng::from_entropy()))
    }

    pub fn with_seed(size: usize, alive_probability: f64, seed: u64) -> Result<Self> {
        let config = Config::new(size, alive_probability)?;
        Ok(Self::with_rng(config, StdRng::seed_from_u64(seed)))
    }
}

impl<A: Automaton, R: Rng> Engine<A, R> {
    pub fn with_rng(config: Config, mut rng: R) -> Self {
        let grid = populate(&config, &mut rng);
        log::info!(
            "seeded {0}x{0} grid: {1} occupied",
            config.size(),
            grid.occupied()
        );
        Self {
            config,
            grid,
            rng,
            generation: 0,
            transitions: Transitions::default(),
        }
    }

    /// Start from a prepared grid instead of a random one.
    pub fn from_grid(config: Config, grid: MacroGrid<A>, rng: R) -> Result<Self> {
        if grid.size() != config.size() {
            return Err(Error::GridSize {
                expected: config.size(),
                actual: grid.size(),
            });
        }
        Ok(Self {
            config,
            grid,
            rng,
            generation: 0,
            transitions: Transitions::default(),
        })
    }

    /// Advance the macro grid and every inner automaton one generation.
    ///
    /// # Panics
    ///
    /// Propagates a panic from an inner automaton's `step`. The engine's grid
    /// is unspecified afterwards and should be `reset` before further use.
    pub fn step(&mut self) -> &MacroGrid<A> {
        // Every count is taken before any inner automaton moves.
        let counts: Vec<usize> = self
            .grid
            .positions()
            .map(|p| self.grid.active_neighbours(p))
            .collect();
        let size = self.grid.size();
        let current = std::mem::replace(&mut self.grid, MacroGrid::empty(size));
        let mut transitions = Transitions::default();
        let cells = current
            .into_cells()
            .into_iter()
            .zip(counts)
            .map(|(cell, neighbours)| self.transition(cell, neighbours, &mut transitions))
            .collect();
        self.grid = MacroGrid::from_raw(size, cells);
        self.generation += 1;
        self.transitions = transitions;
        log::debug!("[STEP] generation {}: {}", self.generation, transitions);
        &self.grid
    }

    /// Throw the current grid away and seed a new one.
    pub fn reset(&mut self) -> &MacroGrid<A> {
        self.grid = populate(&self.config, &mut self.rng);
        self.generation = 0;
        self.transitions = Transitions::default();
        log::info!("reset grid: {} occupied", self.grid.occupied());
        &self.grid
    }

    pub fn grid(&self) -> &MacroGrid<A> {
        &self.grid
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn size(&self) -> usize {
        self.config.size()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn last_transitions(&self) -> Transitions {
        self.transitions
    }
}

impl<A: Automaton, R: Rng> Engine<A, R> {
    fn fresh(&mut self) -> MacroCell<A> {
        MacroCell::Occupied(A::seeded(&self.config, &mut self.rng))
    }

    fn transition(
        &mut self,
        cell: MacroCell<A>,
        neighbours: usize,
        transitions: &mut Transitions,
    ) -> MacroCell<A> {
        match cell {
            MacroCell::Empty if neighbours == 3 => {
                transitions.born += 1;
                self.fresh()
            }
            MacroCell::Empty => MacroCell::Empty,
            MacroCell::Occupied(mut inner) => {
                // The inner automaton always advances, so one that dies out
                // now cannot survive.
                inner.step();
                let alive = inner.liveness().unwrap_or_else(|| {
                    log::trace!("inner automaton liveness unknown after step");
                    false
                });
                match (neighbours, alive) {
                    (2 | 3, true) => {
                        transitions.survived += 1;
                        MacroCell::Occupied(inner)
                    }
                    (3, false) => {
                        transitions.replaced += 1;
                        self.fresh()
                    }
                    _ => {
                        transitions.died += 1;
                        MacroCell::Empty
                    }
                }
            }
        }
    }
}

fn populate<A: Automaton, R: Rng>(config: &Config, rng: &mut R) -> MacroGrid<A> {
    MacroGrid::from_fn(config.size(), |_| {
        if rng.gen_bool(config.alive_probability()) {
            MacroCell::Occupied(A::seeded(config, &mut *rng))
        } else {
            MacroCell::Empty
        }
    })
}
