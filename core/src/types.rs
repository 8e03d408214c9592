use ndarray::Array2;

/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait PlusIterExt {
    /// Iterates the plus-shaped neighborhood of `index`: the cell itself, then up, down, left and right, skipping
    /// whatever falls outside the array.
    fn iter_plus(&self, index: Coord2) -> PlusIter;
}

impl<T> PlusIterExt for Array2<T> {
    fn iter_plus(&self, index: Coord2) -> PlusIter {
        let (rows, cols) = self.dim();
        let bounds = (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        );
        PlusIter::new(index, bounds)
    }
}

const DISPLACEMENTS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct PlusIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl PlusIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        // an out-of-bounds center has no neighborhood at all
        let in_bounds = center.0 < bounds.0 && center.1 < bounds.1;
        Self {
            center,
            bounds,
            index: if in_bounds { 0 } else { DISPLACEMENTS.len() as u8 },
        }
    }
}

impl Iterator for PlusIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn plus(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        PlusIter::new(center, bounds).collect()
    }

    #[test]
    fn interior_cell_has_full_plus() {
        assert_eq!(
            plus((1, 1), (3, 3)),
            [(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]
        );
    }

    #[test]
    fn corner_cell_skips_out_of_bounds() {
        assert_eq!(plus((0, 0), (3, 3)), [(0, 0), (1, 0), (0, 1)]);
        assert_eq!(plus((2, 2), (3, 3)), [(2, 2), (1, 2), (2, 1)]);
    }

    #[test]
    fn center_outside_bounds_yields_nothing() {
        assert!(plus((3, 0), (3, 3)).is_empty());
        assert!(plus((0, 7), (3, 3)).is_empty());
    }

    #[test]
    fn single_cell_is_its_own_plus() {
        assert_eq!(plus((0, 0), (1, 1)), [(0, 0)]);
    }
}
