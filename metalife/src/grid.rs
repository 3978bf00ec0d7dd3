use std::{
    fmt::{Display, Write},
    ops::Index,
};

use crate::{
    Automaton, Error, Result,
    moore::{neighbours, positions},
};

/// One cell of the macro grid. An occupied cell exclusively owns its inner
/// automaton.
#[derive(Clone, Debug, PartialEq)]
pub enum MacroCell<A> {
    Empty,
    Occupied(A),
}

impl<A: Automaton> MacroCell<A> {
    /// Active means occupied by an automaton with at least one live cell.
    /// Unknown liveness counts as inactive.
    pub fn is_active(&self) -> bool {
        match self {
            MacroCell::Empty => false,
            MacroCell::Occupied(inner) => inner.liveness().unwrap_or_else(|| {
                log::trace!("inner automaton liveness unknown, counting as inactive");
                false
            }),
        }
    }

    pub fn inner(&self) -> Option<&A> {
        match self {
            MacroCell::Empty => None,
            MacroCell::Occupied(inner) => Some(inner),
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, MacroCell::Occupied(_))
    }
}

/// Square, row-major grid of macro cells. The side never changes after
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct MacroGrid<A> {
    size: usize,
    cells: Vec<MacroCell<A>>,
}

impl<A: Automaton> MacroGrid<A> {
    pub fn from_fn(size: usize, f: impl FnMut((usize, usize)) -> MacroCell<A>) -> Self {
        Self {
            size,
            cells: positions(size).map(f).collect(),
        }
    }

    pub fn from_cells(size: usize, cells: Vec<MacroCell<A>>) -> Result<Self> {
        if cells.len() != size * size {
            return Err(Error::CellCount {
                expected: size * size,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    pub fn empty(size: usize) -> Self {
        Self::from_fn(size, |_| MacroCell::Empty)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    pub fn get(&self, (y, x): (usize, usize)) -> Option<&MacroCell<A>> {
        if y < self.size && x < self.size {
            self.cells.get(y * self.size + x)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MacroCell<A>> {
        self.cells.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<A> {
        positions(self.size)
    }

    /// Number of active cells among the bounded Moore neighbours of `p`.
    pub fn active_neighbours(&self, p: (usize, usize)) -> usize {
        neighbours(self.size, p)
            .filter(|&q| self[q].is_active())
            .count()
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    pub fn active(&self) -> usize {
        self.cells.iter().filter(|c| c.is_active()).count()
    }

    /// Row-major densities: 0 for empty cells, the inner live fraction for
    /// occupied ones.
    pub fn densities(&self) -> Vec<f64> {
        self.cells
            .iter()
            .map(|c| c.inner().map_or(0., |inner| inner.density()))
            .collect()
    }

    pub(crate) fn into_cells(self) -> Vec<MacroCell<A>> {
        self.cells
    }

    pub(crate) fn from_raw(size: usize, cells: Vec<MacroCell<A>>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }
}

impl<A> Index<(usize, usize)> for MacroGrid<A> {
    type Output = MacroCell<A>;

    fn index(&self, (y, x): (usize, usize)) -> &Self::Output {
        assert!(y < self.size && x < self.size, "({y}, {x}) outside grid");
        &self.cells[y * self.size + x]
    }
}

impl<A: Automaton> Display for MacroGrid<A> {
    /// `.` empty, `o` active, `x` occupied with no live (or unknown) cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.size == 0 {
            return Ok(());
        }
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                let c = match cell {
                    MacroCell::Empty => '.',
                    _ if cell.is_active() => 'o',
                    MacroCell::Occupied(_) => 'x',
                };
                f.write_char(c)?;
            }
        }
        Ok(())
    }
}
