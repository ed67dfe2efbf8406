//! Scenario tests for placement, capture, suicide and ko adjudication.

use goban_rules::{BoardState, Game, MoveError, Player, Point, Stone, Topology};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Play moves alternately for Black and White, starting with Black.
/// `None` passes. Panics on an illegal move.
fn setup_game(size: usize, moves: &[Option<Point>]) -> Game {
    let mut game = Game::new(Topology::square(size));
    for mv in moves {
        match mv {
            Some((row, col)) => {
                if let Err(err) = game.play(*row, *col) {
                    panic!("illegal move ({row}, {col}) in setup: {err}");
                }
            }
            None => {
                game.pass();
            }
        }
    }
    game
}

/// Place stones directly for each colour without regard to turn order.
fn setpos(size: usize, black: &[Point], white: &[Point]) -> BoardState {
    let mut state = BoardState::new(Topology::square(size));
    for &(row, col) in black {
        state.place_stone(row, col, Player::Black).unwrap();
    }
    for &(row, col) in white {
        state.place_stone(row, col, Player::White).unwrap();
    }
    state
}

/// Black and White positions forming a ko in the upper left of a 5x5 board:
///
/// ```text
/// . X O . .
/// X O . O .
/// . X O . .
/// ```
fn ko_setup() -> Game {
    setup_game(
        5,
        &[
            Some((0, 1)),
            Some((0, 2)),
            Some((1, 0)),
            Some((1, 3)),
            Some((2, 1)),
            Some((2, 2)),
            Some((4, 4)),
            Some((1, 1)),
        ],
    )
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_single_stone_capture_with_black_passing() {
    let game = setup_game(
        5,
        &[
            Some((2, 2)),
            Some((1, 2)),
            None,
            Some((3, 2)),
            None,
            Some((2, 1)),
            None,
            Some((2, 3)),
        ],
    );
    let state = game.state();
    assert_eq!(state.stone_at((2, 2)), Stone::Empty);
    assert_eq!(state.captured().black, 1);
    assert_eq!(state.captured().white, 0);
    assert_eq!(state.move_log().len(), 5);
}

#[test]
fn test_group_capture_removes_every_stone() {
    // Black pair on the top edge, White surrounds it.
    let mut state = setpos(5, &[(0, 1), (0, 2)], &[(0, 0), (1, 1), (1, 2)]);
    assert_eq!(state.liberties((0, 1)), 1);

    let placed = state.place_stone(0, 3, Player::White).unwrap();
    let mut captured = placed.captured.clone();
    captured.sort();
    assert_eq!(captured, vec![(0, 1), (0, 2)]);
    assert_eq!(state.captured().black, 2);
    assert_eq!(state.stone_at((0, 1)), Stone::Empty);
    assert_eq!(state.stone_at((0, 2)), Stone::Empty);
}

#[test]
fn test_capture_of_two_separate_groups() {
    // White (0,1) plays between two single Black stones in atari.
    let mut state = setpos(4, &[(0, 0), (0, 2)], &[(1, 0), (1, 2), (0, 3)]);
    let placed = state.place_stone(0, 1, Player::White).unwrap();
    assert_eq!(placed.captured.len(), 2);
    assert_eq!(state.captured().black, 2);
}

#[test]
fn test_lone_stone_keeps_remaining_liberties() {
    // Black (1,1); White (1,0); White (2,1). Black still breathes at (0,1) and (1,2).
    let mut state = BoardState::new(Topology::square(5));
    state.place_stone(1, 1, Player::Black).unwrap();
    state.place_stone(1, 0, Player::White).unwrap();
    assert!(state.place_stone(2, 1, Player::White).is_ok());
    assert_eq!(state.stone_at((1, 1)), Stone::Black);
    assert_eq!(state.liberties((1, 1)), 2);
    assert_eq!(state.captured().black, 0);
}

#[test]
fn test_move_log_keeps_captured_stones() {
    let game = setup_game(
        5,
        &[
            Some((2, 2)),
            Some((1, 2)),
            None,
            Some((3, 2)),
            None,
            Some((2, 1)),
            None,
            Some((2, 3)),
        ],
    );
    let log = game.state().move_log();
    assert_eq!(log.len(), 5);
    assert_eq!(log[0].point, (2, 2));
    assert_eq!(log[0].player, Player::Black);
    assert_eq!(log[4].point, (2, 3));
    assert_eq!(log[4].player, Player::White);
}

// =============================================================================
// Suicide
// =============================================================================

#[test]
fn test_suicide_leaves_state_unchanged() {
    let mut state = setpos(5, &[(0, 1), (1, 0)], &[]);
    let before = state.snapshot();
    assert_eq!(
        state.place_stone(0, 0, Player::White),
        Err(MoveError::SuicideMove)
    );
    assert_eq!(state.snapshot(), before);
    assert_eq!(state.current_player(), before.current_player());
}

#[test]
fn test_multi_stone_suicide() {
    // White fills the last liberty of its own two-stone group.
    let mut state = setpos(4, &[(0, 2), (1, 0), (1, 1)], &[(0, 0)]);
    assert_eq!(
        state.place_stone(0, 1, Player::White),
        Err(MoveError::SuicideMove)
    );
    assert_eq!(state.stone_at((0, 0)), Stone::White);
    assert_eq!(state.stone_at((0, 1)), Stone::Empty);
}

// =============================================================================
// Ko
// =============================================================================

#[test]
fn test_ko_immediate_retake_rejected() {
    let mut game = ko_setup();
    let placed = game.play(1, 2).unwrap();
    assert_eq!(placed.captured, vec![(1, 1)]);
    assert_eq!(game.state().captured().white, 1);

    let before = game.state().snapshot();
    let history_len = game.history().len();
    assert_eq!(game.play(1, 1), Err(MoveError::KoViolation));
    assert_eq!(game.state().snapshot(), before);
    assert_eq!(game.history().len(), history_len);
}

#[test]
fn test_ko_retake_allowed_after_exchange() {
    let mut game = ko_setup();
    game.play(1, 2).unwrap();
    assert_eq!(game.play(1, 1), Err(MoveError::KoViolation));

    // White plays elsewhere, Black answers, now the retake is legal.
    game.play(4, 0).unwrap();
    game.play(3, 4).unwrap();
    let placed = game.play(1, 1).unwrap();
    assert_eq!(placed.captured, vec![(1, 2)]);
    assert_eq!(game.state().captured().black, 1);
}

#[test]
fn test_ko_check_ignores_passes() {
    // Passing does not clear the ko reference board: the retake still
    // recreates the position before Black's capture.
    let mut game = ko_setup();
    game.play(1, 2).unwrap();
    game.pass();
    game.pass();
    assert!(game.is_game_over());
    assert_eq!(game.play(1, 1), Err(MoveError::KoViolation));
}

// =============================================================================
// Irregular boards
// =============================================================================

#[test]
fn test_blocked_cells_reject_placement() {
    let topo = Topology::from_mask(&[vec![1, 1, 0], vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
    let mut game = Game::new(topo);
    assert_eq!(game.play(0, 2), Err(MoveError::InvalidPosition));
    assert_eq!(game.play(1, 1), Err(MoveError::InvalidPosition));
    assert_eq!(game.play(3, 0), Err(MoveError::InvalidPosition));
    assert!(game.state().move_log().is_empty());
}

#[test]
fn test_blocked_cells_are_not_liberties() {
    // The holes at (0,2) and (1,1) leave (0,1) with (0,0) as its only neighbour.
    let topo = Topology::from_mask(&[vec![1, 1, 0], vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
    let mut state = BoardState::new(topo);
    state.place_stone(0, 0, Player::Black).unwrap();
    state.place_stone(1, 0, Player::White).unwrap();
    assert_eq!(state.liberties((0, 0)), 1);

    let placed = state.place_stone(0, 1, Player::White).unwrap();
    assert_eq!(placed.captured, vec![(0, 0)]);
    assert_eq!(state.liberties((0, 1)), 1);
}

#[test]
fn test_single_cell_island_is_suicide() {
    let topo = Topology::from_mask(&[vec![1, 0, 1]]).unwrap();
    let mut game = Game::new(topo);
    assert_eq!(game.play(0, 0), Err(MoveError::SuicideMove));
}
