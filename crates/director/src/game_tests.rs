use super::*;
use draughts_core::sq;

fn double_jump_board() -> Board {
    // Black at (2,1) must jump (3,2), landing at (4,3) with a second jump
    // over (5,4) to (6,5).
    Board::from_diagram(
        "
        . . . . . . . .
        . . . . . . . .
        . b . . . . . .
        . . r . . . . .
        . . . . . . . .
        . . . . r . . .
        . . . . . . . .
        . . . . . . . .
        ",
    )
}

fn forced_capture_board() -> Board {
    // Black at (2,1) can jump; black at (2,5) can only step.
    Board::from_diagram(
        "
        . . . . . . . .
        . . . . . . . .
        . b . . . b . .
        . . r . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . r . . . . .
        ",
    )
}

#[test]
fn test_new_game_black_moves_first() {
    let game = GameDirector::default();
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.result(), GameResult::InProgress);
    assert_eq!(game.selected(), None);
    assert_eq!(game.hint(), None);
}

#[test]
fn test_select_requires_a_movable_piece() {
    let mut game = GameDirector::default();

    // Back-rank pieces are boxed in at the start.
    assert!(!game.select_origin(sq(0, 1).unwrap()));
    // Empty square, opponent piece.
    assert!(!game.select_origin(sq(4, 1).unwrap()));
    assert!(!game.select_origin(sq(5, 0).unwrap()));
    assert_eq!(game.phase(), Phase::AwaitingSelection);

    assert!(game.select_origin(sq(2, 1).unwrap()));
    assert_eq!(game.phase(), Phase::PieceSelected);
    assert_eq!(game.selected(), sq(2, 1));
    assert_eq!(game.selection_moves().len(), 2);
}

#[test]
fn test_reselect_and_deselect() {
    let mut game = GameDirector::default();
    let first = sq(2, 1).unwrap();
    let second = sq(2, 3).unwrap();

    assert!(game.select_origin(first));
    // Clicking another movable piece re-selects it.
    assert!(game.select_origin(second));
    assert_eq!(game.selected(), Some(second));
    // Clicking the selected piece again deselects.
    assert!(game.select_origin(second));
    assert_eq!(game.selected(), None);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
}

#[test]
fn test_choose_destination_ends_the_turn() {
    let mut game = GameDirector::default();
    let from = sq(2, 1).unwrap();
    let to = sq(3, 0).unwrap();

    assert!(game.select_origin(from));
    assert!(game.choose_destination(to));

    assert_eq!(game.board().piece_at(from), None);
    assert!(game.board().piece_at(to).is_some());
    assert_eq!(game.turn(), Color::Red);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.selected(), None);
}

#[test]
fn test_illegal_destination_is_a_noop() {
    let mut game = GameDirector::default();
    let before = game.board().clone();

    // Nothing selected yet.
    assert!(!game.choose_destination(sq(3, 0).unwrap()));

    assert!(game.select_origin(sq(2, 1).unwrap()));
    // Not among the selection's destinations.
    assert!(!game.choose_destination(sq(5, 0).unwrap()));

    assert_eq!(game.board(), &before);
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn test_forced_capture_blocks_quiet_piece_selection() {
    let mut game =
        GameDirector::from_position(forced_capture_board(), Color::Black, Config::default());

    // The piece with only simple steps is not selectable while a jump
    // exists anywhere.
    assert!(!game.select_origin(sq(2, 5).unwrap()));

    assert!(game.select_origin(sq(2, 1).unwrap()));
    assert!(game.selection_moves().iter().all(|m| m.is_capture()));
}

#[test]
fn test_capture_chain_keeps_the_turn() {
    let mut game =
        GameDirector::from_position(double_jump_board(), Color::Black, Config::default());

    assert!(game.select_origin(sq(2, 1).unwrap()));
    assert!(game.choose_destination(sq(4, 3).unwrap()));

    // Mid-chain: same side, piece stays selected on the landing square,
    // no reselection allowed.
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.phase(), Phase::AwaitingFurtherJump);
    assert_eq!(game.selected(), sq(4, 3));
    assert!(!game.select_origin(sq(4, 3).unwrap()));

    assert!(game.choose_destination(sq(6, 5).unwrap()));
    assert_eq!(game.turn(), Color::Red);
    assert_eq!(game.board().count(Color::Red), 0);
}

#[test]
fn test_undo_restores_the_previous_ply() {
    let mut game = GameDirector::default();
    let before = game.board().clone();

    assert!(game.select_origin(sq(2, 1).unwrap()));
    assert!(game.choose_destination(sq(3, 0).unwrap()));
    assert!(game.undo());

    assert_eq!(game.board(), &before);
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.result(), GameResult::InProgress);
    assert_eq!(game.hint(), None);
}

#[test]
fn test_undo_unwinds_a_chain_one_landing_at_a_time() {
    let mut game =
        GameDirector::from_position(double_jump_board(), Color::Black, Config::default());
    let start = game.board().clone();

    game.select_origin(sq(2, 1).unwrap());
    game.choose_destination(sq(4, 3).unwrap());
    let mid = game.board().clone();
    game.choose_destination(sq(6, 5).unwrap());

    assert!(game.undo());
    assert_eq!(game.board(), &mid);
    assert_eq!(game.turn(), Color::Black);

    assert!(game.undo());
    assert_eq!(game.board(), &start);
    assert!(!game.undo());
}

#[test]
fn test_undo_with_no_history_is_a_noop() {
    let mut game = GameDirector::default();
    assert!(!game.undo());
}

#[test]
fn test_ai_move_plays_the_full_chain() {
    let mut game =
        GameDirector::from_position(double_jump_board(), Color::Black, Config::default());

    let root = game.request_ai_move(2).expect("black has a forced jump");

    assert_eq!(root.from, sq(2, 1).unwrap());
    assert!(root.is_capture());
    // Both reds taken, turn passed, one snapshot per landing.
    assert_eq!(game.board().count(Color::Red), 0);
    assert_eq!(game.turn(), Color::Red);
    assert!(game.undo());
    assert!(game.undo());
    assert!(!game.undo());
}

#[test]
fn test_ai_move_on_finished_game_is_a_noop() {
    let mut game =
        GameDirector::from_position(double_jump_board(), Color::Black, Config::default());
    game.request_ai_move(2);
    // Black captured everything: the game is over.
    assert_eq!(game.result(), GameResult::BlackWins);
    assert_eq!(game.phase(), Phase::GameOver);

    assert_eq!(game.request_ai_move(2), None);
}

#[test]
fn test_hint_is_cached_and_does_not_mutate() {
    let mut game = GameDirector::default();
    let before = game.board().clone();

    let hint = game.request_hint(2).expect("moves exist at the start");

    assert_eq!(game.hint(), Some(hint));
    assert_eq!(game.board(), &before);
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.phase(), Phase::AwaitingSelection);

    // Applying a move discards the cached hint.
    game.select_origin(hint.from);
    game.choose_destination(hint.to);
    assert_eq!(game.hint(), None);
}

#[test]
fn test_game_over_locks_commands() {
    let mut game =
        GameDirector::from_position(double_jump_board(), Color::Black, Config::default());
    game.request_ai_move(2);
    assert_eq!(game.phase(), Phase::GameOver);

    assert!(!game.select_origin(sq(6, 5).unwrap()));
    assert!(!game.choose_destination(sq(7, 6).unwrap()));
    assert_eq!(game.request_hint(2), None);
}

#[test]
fn test_undo_after_game_over_resumes_play() {
    let mut game =
        GameDirector::from_position(double_jump_board(), Color::Black, Config::default());
    game.request_ai_move(2);
    assert_eq!(game.result(), GameResult::BlackWins);

    assert!(game.undo());
    assert_eq!(game.result(), GameResult::InProgress);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn test_reset_starts_over() {
    let mut game = GameDirector::default();
    game.select_origin(sq(2, 1).unwrap());
    game.choose_destination(sq(3, 0).unwrap());
    game.request_hint(2);

    game.reset();

    assert_eq!(game.board(), &Board::startpos());
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.hint(), None);
    assert!(!game.undo());
}

#[test]
fn test_ai_to_move_follows_mode() {
    let mut game = GameDirector::default();
    assert_eq!(game.config().mode, GameMode::HumanVsAi);
    // Black (the AI side) moves first.
    assert!(game.ai_to_move());

    game.set_config(Config {
        mode: GameMode::HumanVsHuman,
        depth: 4,
    });
    assert!(!game.ai_to_move());

    game.set_config(Config {
        mode: GameMode::Training,
        depth: 2,
    });
    assert!(game.ai_to_move());
}
