use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GamePhase {
    Playing,
    Won,
}

impl GamePhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Snapshot of a game: the board and whether it is fully unlit.
///
/// `has_won` is always derived from the board, states are only ever replaced by [`GameState::apply_toggle`].
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    grid: LightGrid,
    has_won: bool,
}

impl GameState {
    pub fn new(grid: LightGrid) -> Self {
        let has_won = grid.all_off();
        Self { grid, has_won }
    }

    pub fn grid(&self) -> &LightGrid {
        &self.grid
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn phase(&self) -> GamePhase {
        if self.has_won {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    /// Flips the light at `coords` and its orthogonal neighbors, returning the resulting state.
    ///
    /// `self` is left untouched. Coordinates outside the board leave the state as it is.
    pub fn apply_toggle(&self, coords: Coord2) -> Self {
        if !self.grid.contains(coords) {
            log::warn!(
                "ignoring toggle at {:?}, outside of {:?} board",
                coords,
                self.grid.size()
            );
            return self.clone();
        }
        Self::new(self.grid.toggled(coords))
    }
}

/// Owner of a running game, the only place a [`GameState`] is advanced.
#[derive(Clone, Debug, PartialEq)]
pub struct GameGrid {
    config: GameConfig,
    state: GameState,
}

impl GameGrid {
    pub fn new(config: GameConfig, generator: impl BoardGenerator) -> Self {
        let grid = generator.generate(config);
        log::debug!("new game:\n{}", grid);
        Self {
            config,
            state: GameState::new(grid),
        }
    }

    pub fn from_grid(grid: LightGrid, chance_lit: f64) -> Result<Self> {
        let (rows, cols) = grid.size();
        Ok(Self {
            config: GameConfig::new(rows, cols, chance_lit)?,
            state: GameState::new(grid),
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn size(&self) -> Coord2 {
        self.state.grid.size()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn has_won(&self) -> bool {
        self.state.has_won()
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.state.grid.get(coords).unwrap_or(false)
    }

    pub fn activate(&mut self, coords: Coord2) -> Result<ToggleOutcome> {
        use ToggleOutcome::*;

        self.check_playing()?;

        if !self.state.grid.contains(coords) {
            log::warn!("activation at {:?} is outside the board", coords);
            return Ok(NoChange);
        }

        self.state = self.state.apply_toggle(coords);
        log::debug!("toggled {:?}, {} lit", coords, self.state.grid.lit_count());

        Ok(if self.state.has_won {
            log::debug!("all lights are off");
            Won
        } else {
            Toggled
        })
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.phase().is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
