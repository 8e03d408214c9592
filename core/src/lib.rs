#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use projection::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod grid;
mod projection;
mod types;

pub const DEFAULT_SIZE: Coord2 = (5, 5);
pub const DEFAULT_CHANCE_LIT: f64 = 0.2;

/// Board dimensions and the chance for each light to start lit, fixed for the lifetime of a game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    size: Coord2,
    chance_lit: f64,
}

#[derive(Deserialize)]
struct RawGameConfig {
    size: Coord2,
    chance_lit: f64,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.size.0, raw.size.1, raw.chance_lit)
    }
}

impl GameConfig {
    pub fn new(rows: Coord, cols: Coord, chance_lit: f64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        // also rejects NaN
        if !(0.0..=1.0).contains(&chance_lit) {
            return Err(GameError::InvalidChance);
        }
        Ok(Self {
            size: (rows, cols),
            chance_lit,
        })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn chance_lit(&self) -> f64 {
        self.chance_lit
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            chance_lit: DEFAULT_CHANCE_LIT,
        }
    }
}

/// Outcome of activating a cell
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    NoChange,
    Toggled,
    Won,
}

impl ToggleOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use ToggleOutcome::*;
        match self {
            NoChange => false,
            Toggled => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_five_by_five() {
        let config = GameConfig::default();

        assert_eq!(config.size(), (5, 5));
        assert_eq!(config.chance_lit(), 0.2);
        assert_eq!(config.total_cells(), 25);
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(GameConfig::new(0, 5, 0.2), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new(5, 0, 0.2), Err(GameError::InvalidSize));
    }

    #[test]
    fn config_rejects_chance_outside_unit_interval() {
        assert_eq!(GameConfig::new(5, 5, -0.1), Err(GameError::InvalidChance));
        assert_eq!(GameConfig::new(5, 5, 1.5), Err(GameError::InvalidChance));
        assert_eq!(
            GameConfig::new(5, 5, f64::NAN),
            Err(GameError::InvalidChance)
        );
    }

    #[test]
    fn config_accepts_boundary_chances() {
        assert!(GameConfig::new(1, 1, 0.0).is_ok());
        assert!(GameConfig::new(255, 255, 1.0).is_ok());
    }

    #[test]
    fn deserializing_config_validates_it() {
        let config: GameConfig =
            serde_json::from_str(r#"{"size":[3,4],"chance_lit":0.5}"#).unwrap();
        assert_eq!(config, GameConfig::new(3, 4, 0.5).unwrap());

        let bad_size = serde_json::from_str::<GameConfig>(r#"{"size":[0,4],"chance_lit":0.5}"#);
        assert!(bad_size.is_err());

        let bad_chance =
            serde_json::from_str::<GameConfig>(r#"{"size":[3,4],"chance_lit":2.0}"#);
        assert!(bad_chance.is_err());
    }

    #[test]
    fn only_no_change_has_no_update() {
        assert!(!ToggleOutcome::NoChange.has_update());
        assert!(ToggleOutcome::Toggled.has_update());
        assert!(ToggleOutcome::Won.has_update());
    }
}
