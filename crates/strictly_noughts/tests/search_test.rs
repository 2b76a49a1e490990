//! Tests for the minimax opponent.

use std::collections::HashSet;
use strictly_noughts::{
    Board, GameConfig, GamePhase, GameState, Mark, Mode, Player, Position, SearchError,
    evaluate, minimax, move_values, select_computer_move,
};

/// Distinct boards reachable in a legal game.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![GameState::default()];
    while let Some(game) = stack.pop() {
        if !seen.insert(*game.board()) || game.phase().is_terminal() {
            continue;
        }
        for pos in game.board().empty_positions() {
            let mut next = game.clone();
            next.apply_move(pos.row(), pos.col())
                .expect("empty cell on a running board is legal");
            stack.push(next);
        }
    }
    seen.into_iter().collect()
}

#[test]
fn test_blocks_threat_before_own_row() {
    // O to move with both sides holding two in a row. Every O reply
    // eventually wins, so the first cell in row-major order is chosen:
    // the block at (0, 2) rather than completing row 1 at (1, 2).
    let board = Board::from_rows([
        [Mark::X, Mark::X, Mark::Empty],
        [Mark::O, Mark::O, Mark::Empty],
        [Mark::Empty, Mark::Empty, Mark::Empty],
    ]);
    let pos = select_computer_move(&board, Player::O).unwrap();
    assert_eq!((pos.row(), pos.col()), (0, 2));
}

#[test]
fn test_move_values_match_fresh_minimax_per_cell() {
    // Candidates share one scratch board; each must be scored as if the
    // earlier candidates had never been placed.
    for board in reachable_boards() {
        if board.filled() < 3 {
            continue;
        }
        for computer in [Player::X, Player::O] {
            let Ok(values) = move_values(&board, computer) else {
                continue;
            };
            let cells: Vec<Position> = values.iter().map(|(pos, _)| *pos).collect();
            assert_eq!(cells, board.empty_positions().collect::<Vec<_>>());

            for (pos, value) in values {
                let mut next = board;
                next.set(pos, computer.mark());
                assert_eq!(value, minimax(&next, false, computer), "{board}\nat {pos}");
            }
        }
    }
}

#[test]
fn test_search_is_repeatable() {
    let board = Board::parse("X../.O./...").unwrap();
    let first = select_computer_move(&board, Player::X);
    for _ in 0..3 {
        assert_eq!(select_computer_move(&board, Player::X), first);
    }
}

#[test]
fn test_search_returns_empty_cell() {
    for board in reachable_boards() {
        if board.filled() < 3 {
            continue;
        }
        if let Ok(pos) = select_computer_move(&board, Player::O) {
            assert!(board.is_empty(pos), "{board}\nchose {pos}");
        }
    }
}

#[test]
fn test_search_refuses_terminal_boards() {
    let won = Board::parse("OOO/XX./X.X").unwrap();
    assert_eq!(
        select_computer_move(&won, Player::X),
        Err(SearchError::GameOver(GamePhase::OWon))
    );
    let full = Board::parse("XOX/OXO/OXO").unwrap();
    assert_eq!(
        select_computer_move(&full, Player::O),
        Err(SearchError::BoardFull)
    );
}

#[test]
fn test_evaluate_flips_sign_under_mark_swap() {
    for board in reachable_boards() {
        for computer in [Player::X, Player::O] {
            assert_eq!(
                evaluate(&board.swapped(), computer),
                -evaluate(&board, computer)
            );
            assert_eq!(
                evaluate(&board.swapped(), computer.opponent()),
                evaluate(&board, computer)
            );
        }
    }
}

#[test]
fn test_perfect_self_play_draws() {
    let mut game = GameState::default();
    while game.phase() == GamePhase::Running {
        let pos = select_computer_move(game.board(), game.turn()).unwrap();
        game.apply_move(pos.row(), pos.col()).unwrap();
    }
    assert_eq!(game.phase(), GamePhase::Draw);
}

/// Plays every human line against the computer and returns the phases reached.
fn explore(game: GameState, endings: &mut HashSet<GamePhase>) {
    if game.phase().is_terminal() {
        endings.insert(game.phase());
        return;
    }
    if game.is_computers_turn() {
        let mut next = game;
        next.play_computer_turn().unwrap();
        explore(next, endings);
        return;
    }
    for pos in game.board().empty_positions() {
        let mut next = game.clone();
        next.apply_move(pos.row(), pos.col()).unwrap();
        explore(next, endings);
    }
}

#[test]
fn test_computer_never_loses_as_o() {
    let game = GameState::new(GameConfig::new().with_mode(Mode::SinglePlayer));
    let mut endings = HashSet::new();
    explore(game, &mut endings);
    assert!(!endings.contains(&GamePhase::XWon), "{endings:?}");
    assert!(endings.contains(&GamePhase::OWon));
}

#[test]
fn test_computer_never_loses_as_x() {
    let config = GameConfig::new()
        .with_mode(Mode::SinglePlayer)
        .with_computer(Player::X);
    let mut endings = HashSet::new();
    explore(GameState::new(config), &mut endings);
    assert!(!endings.contains(&GamePhase::OWon), "{endings:?}");
}

#[test]
fn test_takes_win_over_block_when_first() {
    // O can win at (0, 2); X threatens nothing on row 0.
    let board = Board::parse("OO./XX./X..").unwrap();
    assert_eq!(
        select_computer_move(&board, Player::O),
        Ok(Position::TopRight)
    );
}
