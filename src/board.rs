use std::fmt;

use rayon::prelude::*;

use crate::cell::Cell;
use crate::error::GameError;
use crate::notation::index_label;
use crate::position::Position;

/// Physical storage chosen at construction. Both layouts answer every
/// `get`/`set` identically; the tag only decides memory shape and which
/// disarray strategy is safe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    Dense,
    Packed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Storage {
    /// Column-major, one `Cell` per slot: each column is one contiguous
    /// `height`-long slice.
    Dense(Vec<Cell>),
    /// Row-major, two bits per cell at bit index `(row * width + col) * 2`.
    Packed(Vec<u32>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Storage,
}

#[inline]
fn dense_index(height: u16, row: u16, col: u16) -> usize {
    col as usize * height as usize + row as usize
}

#[inline]
fn packed_bit_index(width: u16, row: u16, col: u16) -> usize {
    (row as usize * width as usize + col as usize) * 2
}

#[inline]
fn packed_get(words: &[u32], width: u16, row: u16, col: u16) -> Cell {
    let bit = packed_bit_index(width, row, col);
    Cell::from_bits(words[bit / 32] >> (bit % 32))
}

#[inline]
fn packed_set(words: &mut [u32], width: u16, row: u16, col: u16, cell: Cell) {
    let bit = packed_bit_index(width, row, col);
    let word = &mut words[bit / 32];
    *word &= !(0b11 << (bit % 32));
    *word |= cell.to_bits() << (bit % 32);
}

impl Board {
    pub fn new(width: u16, height: u16, layout: Layout) -> Result<Board, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::Dimensions { width, height });
        }
        let area = width as usize * height as usize;
        let cells = match layout {
            Layout::Dense => Storage::Dense(vec![Cell::Empty; area]),
            Layout::Packed => Storage::Packed(vec![0; (area * 2).div_ceil(32)]),
        };
        Ok(Board {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn layout(&self) -> Layout {
        match self.cells {
            Storage::Dense(_) => Layout::Dense,
            Storage::Packed(_) => Layout::Packed,
        }
    }

    pub fn get(&self, pos: Position) -> Result<Cell, GameError> {
        self.check_bounds(pos)?;
        Ok(self.cell_unchecked(pos.row, pos.col))
    }

    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), GameError> {
        self.check_bounds(pos)?;
        self.set_unchecked(pos.row, pos.col, cell);
        Ok(())
    }

    /// Number of squares currently holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        let mut total = 0;
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cell_unchecked(row, col) == cell {
                    total += 1;
                }
            }
        }
        total
    }

    fn check_bounds(&self, pos: Position) -> Result<(), GameError> {
        if pos.is_valid(self.width, self.height) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Fast path for engine-generated positions, which are in-bounds by
    /// construction.
    #[inline]
    pub(crate) fn cell_unchecked(&self, row: u16, col: u16) -> Cell {
        debug_assert!(row < self.height && col < self.width);
        match &self.cells {
            Storage::Dense(cells) => cells[dense_index(self.height, row, col)],
            Storage::Packed(words) => packed_get(words, self.width, row, col),
        }
    }

    #[inline]
    pub(crate) fn set_unchecked(&mut self, row: u16, col: u16, cell: Cell) {
        debug_assert!(row < self.height && col < self.width);
        match &mut self.cells {
            Storage::Dense(cells) => cells[dense_index(self.height, row, col)] = cell,
            Storage::Packed(words) => packed_set(words, self.width, row, col, cell),
        }
    }

    /// Reverse the vertical order of each column's contiguous bottom stack,
    /// leaving empty squares above every stack where they were. Returns the
    /// per-column stack heights observed before reversal; the queue-remap
    /// pass in the game layer depends on them.
    ///
    /// Dense columns are disjoint slices, so they are reversed by parallel
    /// workers; rayon joins them all before this returns. Packed columns
    /// share storage words and are walked sequentially.
    pub(crate) fn reverse_column_stacks(&mut self) -> Vec<u16> {
        let height = self.height as usize;
        match &mut self.cells {
            Storage::Dense(cells) => cells
                .par_chunks_mut(height)
                .map(|column| {
                    let top = column
                        .iter()
                        .position(|c| !c.is_empty())
                        .unwrap_or(height);
                    column[top..].reverse();
                    (height - top) as u16
                })
                .collect(),
            Storage::Packed(words) => {
                let width = self.width;
                let mut heights = Vec::with_capacity(width as usize);
                for col in 0..width {
                    let mut top = 0;
                    while top < self.height && packed_get(words, width, top, col).is_empty() {
                        top += 1;
                    }
                    let stack = self.height - top;
                    for i in 0..stack / 2 {
                        let upper = top + i;
                        let lower = self.height - 1 - i;
                        let a = packed_get(words, width, upper, col);
                        let b = packed_get(words, width, lower, col);
                        packed_set(words, width, upper, col, b);
                        packed_set(words, width, lower, col, a);
                    }
                    heights.push(stack);
                }
                heights
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.width {
            write!(f, "{}", index_label(col))?;
        }
        writeln!(f)?;

        for row in 0..self.height {
            write!(f, "{} ", index_label(row))?;
            for col in 0..self.width {
                write!(f, "{}", self.cell_unchecked(row, col))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
