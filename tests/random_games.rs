//! Randomized games checking invariants that must hold after every request.
//!
//! Moves are drawn with a seeded `fastrand` generator, so failures are
//! reproducible from the seed in the assertion message.

use go_rules::board::{Color, Point, Stone};
use go_rules::error::MoveError;
use go_rules::game::{GameState, legal_moves, new_game, pass, place_stone, score};
use go_rules::group::{count_liberties, get_group};

const SEEDS: [u64; 6] = [1, 7, 42, 1234, 98765, 0xdead_beef];
const MAX_REQUESTS: usize = 600;

/// Every group on the board has at least one liberty.
fn assert_no_dead_groups(state: &GameState, seed: u64) {
    let board = state.board();
    for p in board.points() {
        if board[p] != Stone::Empty {
            let group = get_group(p, board);
            assert!(
                count_liberties(&group, board) > 0,
                "seed {seed}: group at {p:?} has no liberties\n{board}"
            );
        }
    }
}

/// Play one random game, checking invariants as it goes.
fn random_game(seed: u64, size: usize) -> GameState {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut state = new_game(size);
    let mut placed = [0u32; 2];

    for _ in 0..MAX_REQUESTS {
        if state.is_terminal() {
            break;
        }

        if rng.u32(..100) < 3 {
            state = pass(&state).unwrap();
            continue;
        }

        // Occasionally aim one past the edge to exercise the bounds check.
        let row = rng.usize(..=size);
        let col = rng.usize(..=size);
        let player = state.current_player();
        let before = state.clone();

        match place_stone(&state, row, col) {
            Ok(next) => {
                placed[player as usize] += 1;
                assert_eq!(next.current_player(), player.opponent());
                assert_eq!(next.consecutive_passes(), 0);
                if let Some(ko) = next.ko_point() {
                    assert_eq!(next.board()[ko], Stone::Empty, "seed {seed}");
                }
                state = next;
            }
            Err(e) => {
                assert_eq!(state, before, "seed {seed}: rejected move changed state");
                let pt = Point::new(row, col);
                match e {
                    MoveError::OutOfBounds => assert!(row >= size || col >= size),
                    MoveError::Occupied => assert_ne!(state.board()[pt], Stone::Empty),
                    // Both ko guards agree, so a ko rejection is always at the
                    // forbidden point.
                    MoveError::KoViolation => assert_eq!(state.ko_point(), Some(pt)),
                    MoveError::Suicide => {}
                    MoveError::GameAlreadyOver => panic!("seed {seed}: game not over yet"),
                }
            }
        }

        assert_no_dead_groups(&state, seed);

        // Stones on the board = stones placed - stones lost.
        let board = state.board();
        assert_eq!(
            board.count(Color::Black) as u32,
            placed[Color::Black as usize] - state.white_captures(),
            "seed {seed}"
        );
        assert_eq!(
            board.count(Color::White) as u32,
            placed[Color::White as usize] - state.black_captures(),
            "seed {seed}"
        );
    }
    state
}

#[test]
fn test_random_games_keep_invariants() {
    for seed in SEEDS {
        random_game(seed, 9);
    }
}

#[test]
fn test_random_games_small_boards() {
    for seed in SEEDS {
        for size in [1, 2, 3, 5] {
            random_game(seed, size);
        }
    }
}

#[test]
fn test_legal_moves_agree_with_place_stone() {
    for seed in SEEDS {
        let state = random_game(seed, 9);
        if state.is_terminal() {
            assert!(legal_moves(&state).is_empty());
            continue;
        }
        let legal = legal_moves(&state);
        for p in state.board().points() {
            let accepted = place_stone(&state, p.row, p.col).is_ok();
            assert_eq!(accepted, legal.contains(&p), "seed {seed}: {p:?}");
        }
    }
}

#[test]
fn test_finished_random_game_scores_consistently() {
    for seed in SEEDS {
        let mut state = random_game(seed, 9);
        while !state.is_terminal() {
            state = pass(&state).unwrap();
        }
        let result = score(&state).unwrap();
        let board = state.board();
        let stones = (board.count(Color::Black) + board.count(Color::White)) as u32;
        assert!(result.black_territory + result.white_territory + stones <= 81);
        assert_eq!(result.black_captures, state.black_captures());
        assert_eq!(result.white_captures, state.white_captures());
        assert_eq!(
            result.white_score,
            f64::from(result.white_territory + result.white_captures) + result.komi
        );
        assert_eq!(pass(&state), Err(MoveError::GameAlreadyOver));
    }
}
