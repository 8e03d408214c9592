use lights_out_core::*;

#[test]
fn single_lit_cell_is_won_in_one_move() {
    let config = GameConfig::new(1, 1, 1.0).unwrap();
    let mut game = GameGrid::new(config, RandomBoardGenerator::new(0));

    assert_eq!(game.state().grid(), &LightGrid::from_rows(&[[true]]).unwrap());
    assert!(!game.has_won());
    assert_eq!(game.phase(), GamePhase::Playing);

    assert_eq!(game.activate((0, 0)), Ok(ToggleOutcome::Won));

    assert_eq!(game.state().grid(), &LightGrid::from_rows(&[[false]]).unwrap());
    assert!(game.has_won());
    assert_eq!(game.phase(), GamePhase::Won);
    assert_eq!(
        game.project(),
        BoardProjection::Won {
            message: WIN_MESSAGE
        }
    );
    assert_eq!(game.activate((0, 0)), Err(GameError::AlreadyEnded));
}

#[test]
fn solving_a_known_board_through_activations() {
    // a plus in the middle of an otherwise dark board is undone by its center
    let board = LightGrid::from_rows(&[
        [false, false, false, false, false],
        [false, false, true, false, false],
        [false, true, true, true, false],
        [false, false, true, false, false],
        [false, false, false, false, false],
    ])
    .unwrap();
    let mut game = GameGrid::from_grid(board, DEFAULT_CHANCE_LIT).unwrap();

    assert_eq!(game.activate((0, 4)), Ok(ToggleOutcome::Toggled));
    assert_eq!(game.activate((0, 4)), Ok(ToggleOutcome::Toggled));
    assert_eq!(game.activate((2, 2)), Ok(ToggleOutcome::Won));
    assert!(game.state().grid().all_off());
}

#[test]
fn projection_follows_every_toggle() {
    let config = GameConfig::new(3, 3, 0.0).unwrap();
    let mut game = GameGrid::new(config, RandomBoardGenerator::new(99));

    // an already dark board starts out won
    assert!(game.project().is_won());

    let state = game.state().apply_toggle((1, 1));
    let BoardProjection::Playing { rows } = state.project() else {
        panic!("toggling a dark board must light it");
    };
    let lit: Vec<Coord2> = rows
        .iter()
        .flatten()
        .filter(|cell| cell.is_lit)
        .map(|cell| cell.coords)
        .collect();
    assert_eq!(lit, [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);

    assert_eq!(game.activate((1, 1)), Err(GameError::AlreadyEnded));
}

#[test]
fn default_game_is_five_by_five() {
    let game = GameGrid::new(GameConfig::default(), RandomBoardGenerator::new(2024));

    assert_eq!(game.size(), DEFAULT_SIZE);
    assert_eq!(game.config().chance_lit(), DEFAULT_CHANCE_LIT);
}
