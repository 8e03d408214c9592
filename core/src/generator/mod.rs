use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> LightGrid;
}

/// Builds a board for `config`, lighting each cell independently when `draw` returns less than the configured chance.
///
/// `draw` must return uniform values in `[0, 1)`, it is called once per cell in row-major order, so a deterministic
/// source yields a reproducible board.
pub fn create_grid(config: &GameConfig, mut draw: impl FnMut() -> f64) -> LightGrid {
    let chance_lit = config.chance_lit();
    // a validated config always has at least one row and one column
    LightGrid::from_fn_unchecked(config.size(), |_| draw() < chance_lit)
}
