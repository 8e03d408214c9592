use super::*;

/// Generation strategy that lights every cell independently from a seeded random source.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> LightGrid {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let grid = create_grid(&config, || rng.random::<f64>());

        log::debug!(
            "generated {}x{} board from seed {}, {} of {} lit",
            config.rows(),
            config.cols(),
            self.seed,
            grid.lit_count(),
            config.total_cells()
        );
        if grid.all_off() {
            log::debug!("generated board is already solved");
        }
        grid
    }
}
