//! Tests for the session state machine through the public API.

mod common;

use common::{Event, Recorder, play, started_game};
use tictactoe::{
    Board, GameController, Ignored, Move, Outcome, Phase, Player, Position, Roster, Selection,
    SlotError, Symbol,
};

fn x_player() -> Player {
    Player::new("player1", Symbol::X)
}

fn o_player() -> Player {
    Player::new("player2", Symbol::O)
}

#[test]
fn test_lifecycle() {
    let roster = Roster::new("player1", "player2").unwrap();
    let mut game = GameController::new(Board::new(), roster, Recorder::default());
    assert_eq!(game.phase(), &Phase::NotStarted);

    game.start();
    assert_eq!(game.phase(), &Phase::InProgress);
    assert_eq!(game.active_player(), &x_player());
    assert_eq!(game.presentation().events, vec![Event::Reset]);

    let selection = game.select_slot(4);
    assert!(matches!(selection, Selection::Placed { next: Symbol::O, .. }));
    assert_eq!(game.active_player(), &o_player());
}

#[test]
fn test_x_wins_top_row() {
    let mut game = started_game();
    play(&mut game, &[0, 3, 1, 4]);
    assert!(!game.is_game_over());

    let selection = game.select_slot(2);

    assert_eq!(
        selection,
        Selection::Finished {
            placed: Move::new(Symbol::X, Position::TopRight),
            outcome: Outcome::Winner(x_player()),
        }
    );
    assert_eq!(game.phase(), &Phase::Finished(Outcome::Winner(x_player())));
    assert_eq!(game.presentation().announcements(), vec!["player1 is the Winner"]);
}

#[test]
fn test_o_wins_column() {
    let mut game = started_game();
    play(&mut game, &[0, 1, 3, 4, 8, 7]);
    assert_eq!(game.outcome(), Some(&Outcome::Winner(o_player())));
    assert_eq!(game.presentation().announcements(), vec!["player2 is the Winner"]);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = started_game();
    // X: 0 2 3 7 8, O: 1 4 5 6
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6]);
    assert!(!game.is_game_over());

    let selection = game.select_slot(8);

    assert!(matches!(
        selection,
        Selection::Finished {
            outcome: Outcome::Draw,
            ..
        }
    ));
    assert!(game.board().is_full());
    assert_eq!(game.presentation().announcements(), vec!["It's A Draw"]);
}

#[test]
fn test_x_on_main_diagonal_wins() {
    // X taking 0, 4 and 8 completes the main diagonal, so it cannot draw.
    let mut game = started_game();
    play(&mut game, &[0, 1, 4, 2, 8]);
    assert_eq!(game.outcome(), Some(&Outcome::Winner(x_player())));
}

#[test]
fn test_win_on_ninth_move_beats_draw() {
    let mut game = started_game();
    // X: 0 2 4 5 6 (6 completes 2-4-6 and fills the board), O: 1 3 7 8
    play(&mut game, &[0, 1, 2, 3, 4, 7, 5, 8]);
    assert!(!game.is_game_over());

    game.select_slot(6);

    assert!(game.board().is_full());
    assert_eq!(game.outcome(), Some(&Outcome::Winner(x_player())));
    assert_eq!(game.presentation().announcements(), vec!["player1 is the Winner"]);
}

#[test]
fn test_reselecting_marked_slot_is_noop() {
    let mut game = started_game();
    game.select_slot(0);
    let board = game.board().clone();
    let active = game.active_player().clone();
    let events = game.presentation().events.len();

    let selection = game.select_slot(0);

    assert_eq!(
        selection,
        Selection::Ignored(Ignored::Slot(SlotError::Occupied(Position::TopLeft)))
    );
    assert_eq!(game.board(), &board);
    assert_eq!(game.active_player(), &active);
    assert_eq!(game.presentation().events.len(), events);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_out_of_range_is_noop() {
    let mut game = started_game();
    let selection = game.select_slot(9);
    assert_eq!(selection, Selection::Ignored(Ignored::Slot(SlotError::OutOfRange(9))));
    assert_eq!(game.board().marked_count(), 0);
    assert_eq!(game.active_player(), &x_player());
}

#[test]
fn test_selection_after_game_over_is_noop() {
    let mut game = started_game();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let summary = game.summary();

    let selection = game.select_slot(8);

    assert_eq!(selection, Selection::Ignored(Ignored::GameOver));
    assert_eq!(game.summary(), summary);
    assert_eq!(game.presentation().announcements().len(), 1);
}

#[test]
fn test_turn_toggles_once_per_accepted_move() {
    let mut game = started_game();
    let mut expected = Symbol::X;
    for index in [4, 4, 0, 12, 8, 0, 2] {
        let selection = game.select_slot(index);
        if !selection.is_ignored() {
            expected = expected.opponent();
        }
        assert_eq!(game.active_player().symbol(), expected);
    }
}

#[test]
fn test_restart_from_every_phase() {
    let fresh = || {
        let roster = Roster::new("player1", "player2").unwrap();
        GameController::new(Board::new(), roster, Recorder::default())
    };

    let mut not_started = fresh();
    let mut in_progress = started_game();
    play(&mut in_progress, &[4, 0]);
    let mut finished = started_game();
    play(&mut finished, &[0, 3, 1, 4, 2]);

    for game in [&mut not_started, &mut in_progress, &mut finished] {
        game.restart();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.phase(), &Phase::InProgress);
        assert!(!game.is_game_over());
        assert_eq!(game.active_player(), &x_player());
        assert!(game.history().is_empty());
        assert_eq!(
            game.presentation().events.iter().rev().take(2).collect::<Vec<_>>(),
            vec![&Event::Reset, &Event::Dismiss]
        );
    }
}

#[test]
fn test_restart_twice_is_idempotent() {
    let mut game = started_game();
    play(&mut game, &[0, 1]);
    game.restart();
    let once = game.summary();
    game.restart();
    assert_eq!(game.summary(), once);
}

#[test]
fn test_marks_rendered_in_order() {
    let mut game = started_game();
    play(&mut game, &[4, 4, 0]);
    assert_eq!(
        game.presentation().events,
        vec![
            Event::Reset,
            Event::Mark(Position::Center, Symbol::X),
            Event::Mark(Position::TopLeft, Symbol::O),
        ]
    );
}

#[test]
fn test_independent_sessions() {
    let mut first = started_game();
    let mut second = started_game();
    first.select_slot(0);
    second.select_slot(8);
    assert_eq!(first.board().slot_at(8), second.board().slot_at(0));
    assert_eq!(first.history(), &[Move::new(Symbol::X, Position::TopLeft)]);
    assert_eq!(second.history(), &[Move::new(Symbol::X, Position::BottomRight)]);
}

#[test]
fn test_custom_names_in_announcement() {
    let roster = Roster::new("Ada", "Grace").unwrap();
    let mut game = GameController::new(Board::new(), roster, Recorder::default());
    game.start();
    play(&mut game, &[0, 3, 1, 4, 8, 5]);
    assert_eq!(game.presentation().announcements(), vec!["Grace is the Winner"]);
}
