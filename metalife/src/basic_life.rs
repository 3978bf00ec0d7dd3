use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use itertools::Itertools;
use rand::Rng;

use crate::{
    Automaton, Config, Error, Result,
    moore::{neighbours, positions},
};

/// Conway's B3/S23 on a bounded square grid. Cells beyond the edge count as
/// dead.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicLife {
    size: usize,
    cells: Vec<u8>,
}

impl BasicLife {
    pub fn new(size: usize, alive_probability: f64) -> Result<Self> {
        let config = Config::new(size, alive_probability)?;
        Ok(Self::seeded(&config, &mut rand::thread_rng()))
    }

    pub fn dead(size: usize) -> Result<Self> {
        Config::new(size, 0.)?;
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    pub fn set_bit(&mut self, p: (usize, usize)) {
        let i = self.index(p);
        self.cells[i] = 1;
    }

    pub fn get_bit(&self, p: (usize, usize)) -> bool {
        self.cells[self.index(p)] == 1
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }
}

impl BasicLife {
    fn index(&self, (y, x): (usize, usize)) -> usize {
        assert!(y < self.size && x < self.size, "({y}, {x}) outside grid");
        y * self.size + x
    }
}

impl Automaton for BasicLife {
    fn seeded<R: Rng>(config: &Config, rng: &mut R) -> Self {
        let size = config.size();
        let cells = (0..size * size)
            .map(|_| rng.gen_bool(config.alive_probability()) as u8)
            .collect();
        Self { size, cells }
    }

    fn step(&mut self) {
        let cells = positions(self.size)
            .map(|p| {
                let count = neighbours(self.size, p).filter(|&q| self.get_bit(q)).count();
                match (count, self.get_bit(p)) {
                    (2 | 3, true) | (3, false) => 1,
                    _ => 0,
                }
            })
            .collect();
        self.cells = cells;
    }

    fn size(&self) -> usize {
        self.size
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl FromStr for BasicLife {
    type Err = Error;

    /// Reads `o` as live and `.` or space as dead. Common indentation is
    /// stripped and the pattern is padded out to a square.
    fn from_str(s: &str) -> Result<Self> {
        let lines = s.lines().filter(|l| !l.trim().is_empty()).collect_vec();
        // Indentation is counted in chars, whitespace may be multi-byte.
        let indent = lines
            .iter()
            .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
            .min()
            .unwrap_or_default();
        let rows = lines
            .iter()
            .map(|l| l.trim_end().chars().skip(indent).collect_vec())
            .collect_vec();
        let width = rows.iter().map(Vec::len).max().unwrap_or_default();
        let mut state = BasicLife::dead(rows.len().max(width))?;
        for (y, row) in rows.into_iter().enumerate() {
            for (x, c) in row.into_iter().enumerate() {
                match c {
                    ' ' | '.' => (),
                    'o' => state.set_bit((y, x)),
                    _ => return Err(Error::Parse(format!("Unexpected character {c}"))),
                }
            }
        }
        Ok(state)
    }
}

impl Display for BasicLife {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for &c in row {
                f.write_char(if c == 1 { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}
