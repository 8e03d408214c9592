use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of lights, `true` meaning lit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLightGrid")]
pub struct LightGrid {
    cells: Array2<bool>,
}

#[derive(Deserialize)]
struct RawLightGrid {
    cells: Array2<bool>,
}

impl TryFrom<RawLightGrid> for LightGrid {
    type Error = GameError;

    fn try_from(raw: RawLightGrid) -> Result<Self> {
        let (rows, cols) = raw.cells.dim();
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        if rows > usize::from(Coord::MAX) || cols > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells: raw.cells })
    }
}

impl LightGrid {
    /// Builds a grid of `size` by asking `f` for every cell, in row-major order.
    pub fn from_fn(size: Coord2, f: impl FnMut(Coord2) -> bool) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self::from_fn_unchecked(size, f))
    }

    pub(crate) fn from_fn_unchecked(size: Coord2, mut f: impl FnMut(Coord2) -> bool) -> Self {
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            // both axes are bounded by `size`, so they fit a `Coord`
            f((row as Coord, col as Coord))
        });
        Self { cells }
    }

    pub fn filled(size: Coord2, lit: bool) -> Result<Self> {
        Self::from_fn(size, |_| lit)
    }

    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let row_count: Coord = rows
            .len()
            .try_into()
            .map_err(|_| GameError::InvalidBoardShape)?;
        let col_count: Coord = rows
            .first()
            .map_or(0, |row| row.as_ref().len())
            .try_into()
            .map_err(|_| GameError::InvalidBoardShape)?;

        if row_count == 0 || col_count == 0 {
            return Err(GameError::InvalidBoardShape);
        }
        if rows
            .iter()
            .any(|row| row.as_ref().len() != usize::from(col_count))
        {
            return Err(GameError::InvalidBoardShape);
        }

        Self::from_fn((row_count, col_count), |(row, col)| {
            rows[usize::from(row)].as_ref()[usize::from(col)]
        })
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // constructors never exceed `Coord::MAX` on either axis
        (rows as Coord, cols as Coord)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    pub fn get(&self, coords: Coord2) -> Option<bool> {
        self.contains(coords).then(|| self[coords])
    }

    pub fn lit_count(&self) -> CellCount {
        // at most 255 * 255 cells
        self.cells.iter().filter(|&&lit| lit).count() as CellCount
    }

    /// Whether every light is off.
    pub fn all_off(&self) -> bool {
        !self.cells.iter().any(|&lit| lit)
    }

    pub fn iter_lit(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &lit)| lit)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    /// Iterates the rows, each one as an iterator of lit flags.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = bool> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }

    /// Returns a copy of this grid with the plus-shaped neighborhood of `center` flipped.
    ///
    /// Neighbors outside the grid are skipped, and a `center` outside the grid flips nothing.
    pub fn toggled(&self, center: Coord2) -> Self {
        let mut cells = self.cells.clone();
        for pos in self.cells.iter_plus(center) {
            let cell = &mut cells[pos.to_nd_index()];
            *cell = !*cell;
            log::trace!("flip {:?} -> {}", pos, *cell);
        }
        Self { cells }
    }
}

impl Index<Coord2> for LightGrid {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// One line per row, `O` for lit and `.` for unlit.
impl fmt::Display for LightGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.iter_rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col_index, lit) in row.enumerate() {
                if col_index > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if lit { "O" } else { "." })?;
            }
        }
        Ok(())
    }
}
