//! Binary cell grid with toroidal neighbor counting
//!
//! Direct access (`get`/`set`) is bounds-checked against the real
//! dimensions. Neighbor counting for the automaton wraps on both axes, while
//! the planar queries used by rendering and topology treat cells past the
//! edge as inactive.

use std::fmt;

use ndarray::Array2;

use crate::io::error::{PatternError, Result, invalid_parameter, require_positive};

/// Relative neighbor offsets in clockwise encoding order: TL, T, TR, L, R, BL, B, BR
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fixed-size binary grid of cell states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    cells: Array2<bool>,
}

impl Lattice {
    /// Create an all-inactive lattice
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero
    pub fn new(height: usize, width: usize) -> Result<Self> {
        require_positive("height", height)?;
        require_positive("width", width)?;
        Ok(Self {
            cells: Array2::from_elem((height, width), false),
        })
    }

    /// Wrap an existing cell array
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the array has a zero dimension
    pub fn from_cells(cells: Array2<bool>) -> Result<Self> {
        let (height, width) = cells.dim();
        require_positive("height", height)?;
        require_positive("width", width)?;
        Ok(Self { cells })
    }

    /// Build a lattice from rows of 0/1 values (any non-zero value is active)
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if there are no rows, the first row is
    /// empty, or the rows have different lengths
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(ragged) = rows.iter().find(|row| row.len() != width) {
            return Err(invalid_parameter(
                "rows",
                &ragged.len(),
                &format!("every row must have {width} cells"),
            ));
        }

        let mut lattice = Self::new(height, width)?;
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                lattice.set(row, col, value != 0)?;
            }
        }
        Ok(lattice)
    }

    /// Reconstruct a lattice from rendered text
    ///
    /// Any non-whitespace character is active. ANSI colour sequences are
    /// ignored, and short rows are padded to the widest line. Text with no
    /// visible characters yields a one-column lattice.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `lines` is empty
    pub fn from_glyph_lines(lines: &[String]) -> Result<Self> {
        let rows: Vec<Vec<bool>> = lines.iter().map(|line| visible_cells(line)).collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);

        let mut lattice = Self::new(rows.len(), width)?;
        for (row, cells) in rows.iter().enumerate() {
            for (col, &active) in cells.iter().enumerate() {
                lattice.set(row, col, active)?;
            }
        }
        Ok(lattice)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as (height, width)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Cell state, or `None` outside the lattice
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get([row, col]).copied()
    }

    /// Whether the cell exists and is active
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(true)
    }

    /// Set a cell state
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if the position is outside the lattice
    pub fn set(&mut self, row: usize, col: usize, active: bool) -> Result<()> {
        let dimensions = self.dimensions();
        let cell = self
            .cells
            .get_mut([row, col])
            .ok_or(PatternError::CellOutOfBounds {
                row,
                col,
                dimensions,
            })?;
        *cell = active;
        Ok(())
    }

    /// Activate the cell at a toroidally wrapped position
    pub fn activate_wrapped(&mut self, row: isize, col: isize) {
        let (height, width) = self.dimensions();
        let index = [wrap(row, height), wrap(col, width)];
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = true;
        }
    }

    /// Count active cells among the 8 surrounding positions with wrap-around
    ///
    /// On lattices smaller than 3x3 the same cell can be counted several
    /// times; a single active cell in a 1x1 lattice is its own 8 neighbors.
    pub fn neighbor_count(&self, row: usize, col: usize) -> usize {
        let (height, width) = self.dimensions();
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| {
                let index = [
                    wrap(row as isize + dr, height),
                    wrap(col as isize + dc, width),
                ];
                self.cells.get(index).copied().unwrap_or(false)
            })
            .count()
    }

    /// Neighbor states in encoding order, treating off-grid positions as inactive
    pub fn planar_neighbors(&self, row: usize, col: usize) -> [bool; 8] {
        NEIGHBOR_OFFSETS.map(|(dr, dc)| {
            offset(row, col, dr, dc).is_some_and(|(r, c)| self.is_active(r, c))
        })
    }

    /// Number of active planar neighbors
    pub fn planar_neighbor_count(&self, row: usize, col: usize) -> usize {
        self.planar_neighbors(row, col)
            .iter()
            .filter(|&&active| active)
            .count()
    }

    /// In-bounds planar neighbor positions of a cell
    pub fn planar_neighbor_positions(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (height, width) = self.dimensions();
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dr, dc)| offset(row, col, dr, dc))
            .filter(move |&(r, c)| r < height && c < width)
    }

    /// Number of active cells
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&active| active).count()
    }

    /// Fraction of cells that are active
    pub fn density(&self) -> f64 {
        self.active_count() as f64 / self.total_cells() as f64
    }

    /// New lattice of the same size whose cells are `f(row, col, active)`
    pub fn map_cells(&self, mut f: impl FnMut(usize, usize, bool) -> bool) -> Self {
        let cells = Array2::from_shape_fn(self.dimensions(), |(row, col)| {
            f(row, col, self.is_active(row, col))
        });
        Self { cells }
    }

    /// Underlying cell array
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Active cell positions in row-major order
    pub fn active_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &active)| active)
            .map(|(position, _)| position)
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row
                .iter()
                .map(|&active| if active { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Reduce a possibly negative index onto `0..len`
const fn wrap(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}

/// Apply an offset without wrapping, rejecting positions above or left of the grid
fn offset(row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
    Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
}

/// Visible-cell mask of one line of rendered text, ignoring ANSI sequences
fn visible_cells(line: &str) -> Vec<bool> {
    let mut cells = Vec::new();
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            // Skip through the final byte of the control sequence
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        cells.push(!ch.is_whitespace());
    }
    cells
}
