use alloc::vec::Vec;

use crate::*;

pub const TITLE: &str = "LIGHTS OUT!";
pub const WIN_MESSAGE: &str = "YOU WON!!!!";

/// What a single cell needs to be drawn and to report activation back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellDescriptor {
    pub coords: Coord2,
    pub is_lit: bool,
}

/// Render-ready view of a game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardProjection {
    Playing { rows: Vec<Vec<CellDescriptor>> },
    Won { message: &'static str },
}

impl BoardProjection {
    pub const fn is_won(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

impl GameState {
    /// Projects the board into rows of cell descriptors, or the win message once every light is off.
    pub fn project(&self) -> BoardProjection {
        if self.has_won() {
            return BoardProjection::Won {
                message: WIN_MESSAGE,
            };
        }

        let rows = self
            .grid()
            .iter_rows()
            .zip(0..)
            .map(|(row, row_index)| {
                row.zip(0..)
                    .map(|(is_lit, col_index)| CellDescriptor {
                        coords: (row_index, col_index),
                        is_lit,
                    })
                    .collect()
            })
            .collect();
        BoardProjection::Playing { rows }
    }
}

impl GameGrid {
    pub fn project(&self) -> BoardProjection {
        self.state().project()
    }
}
