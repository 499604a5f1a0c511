//! Property tests for the engine laws.

use gomoku::{check_win, suggest_move, Board, Mark, MoveOutcome, Pos, Rejection, TurnEngine};
use proptest::prelude::*;

/// Engine request used to build arbitrary histories.
#[derive(Debug, Clone, Copy)]
enum Action {
    Place(usize, usize),
    Timeout,
    Undo,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        8 => (0usize..9, 0usize..9).prop_map(|(r, c)| Action::Place(r, c)),
        1 => Just(Action::Timeout),
        1 => Just(Action::Undo),
    ]
}

fn run(engine: &mut TurnEngine, action: Action) {
    match action {
        Action::Place(r, c) => {
            engine.apply_move(r, c).unwrap();
        }
        Action::Timeout => {
            engine.expire_turn();
        }
        Action::Undo => {
            engine.undo_move();
        }
    }
}

fn nth_empty(board: &Board, n: usize) -> Option<Pos> {
    let empties: Vec<Pos> = board.empty_cells().collect();
    (!empties.is_empty()).then(|| empties[n % empties.len()])
}

/// Five-cell segments along every axis, as (start, step)
fn segment() -> impl Strategy<Value = Vec<Pos>> {
    let steps = prop_oneof![Just((0i32, 1i32)), Just((1, 0)), Just((1, 1)), Just((1, -1))];
    (0usize..9, 0usize..9, steps).prop_filter_map("segment leaves board", |(r, c, (dr, dc))| {
        let start = Pos::try_new(r, c).ok()?;
        (0..5)
            .map(|i| start.offset(dr * i, dc * i))
            .collect::<Option<Vec<Pos>>>()
    })
}

proptest! {
    #[test]
    fn ledger_matches_stone_count(actions in prop::collection::vec(action(), 0..120)) {
        let mut engine = TurnEngine::new();
        for a in actions {
            run(&mut engine, a);
            prop_assert_eq!(engine.ledger().len(), engine.board().stone_count() as usize);
        }
    }

    #[test]
    fn apply_then_undo_is_identity(
        actions in prop::collection::vec(action(), 0..40),
        pick in any::<usize>(),
    ) {
        let mut engine = TurnEngine::new();
        for a in actions {
            run(&mut engine, a);
        }
        prop_assume!(engine.is_round_active());
        let target = nth_empty(engine.board(), pick);
        prop_assume!(target.is_some());
        let target = target.unwrap();

        let board = engine.snapshot();
        let mark = engine.current_mark();
        let tallies = engine.tallies();
        let len = engine.ledger().len();

        let outcome = engine.play(target);
        prop_assert!(!outcome.is_rejected());
        prop_assert!(engine.undo_move());

        prop_assert_eq!(engine.snapshot(), board);
        prop_assert_eq!(engine.current_mark(), mark);
        prop_assert!(engine.is_round_active());
        prop_assert_eq!(engine.tallies(), tallies);
        prop_assert_eq!(engine.ledger().len(), len);
    }

    #[test]
    fn occupied_cell_is_rejected_twice(
        actions in prop::collection::vec(action(), 1..80),
        pick in any::<usize>(),
    ) {
        let mut engine = TurnEngine::new();
        for a in actions {
            run(&mut engine, a);
        }
        let occupied: Vec<Pos> = engine.board().stones(Mark::X).iter_ones()
            .chain(engine.board().stones(Mark::O).iter_ones())
            .collect();
        prop_assume!(!occupied.is_empty());
        let target = occupied[pick % occupied.len()];

        let before = engine.snapshot();
        let mark = engine.current_mark();
        for _ in 0..2 {
            let outcome = engine.play(target);
            prop_assert!(matches!(
                outcome,
                MoveOutcome::Rejected(Rejection::Occupied | Rejection::RoundOver)
            ));
            prop_assert_eq!(engine.snapshot(), before);
            prop_assert_eq!(engine.current_mark(), mark);
        }
    }

    #[test]
    fn marks_alternate_on_ordinary_moves(picks in prop::collection::vec(any::<usize>(), 1..40)) {
        let mut engine = TurnEngine::new();
        let mut expected = Mark::X;
        for pick in picks {
            let target = nth_empty(engine.board(), pick).unwrap();
            prop_assert_eq!(engine.current_mark(), expected);
            match engine.play(target) {
                MoveOutcome::Continued { next } => {
                    prop_assert_eq!(next, expected.opponent());
                    expected = next;
                }
                other => {
                    prop_assert!(other.ends_round());
                    break;
                }
            }
        }
    }

    #[test]
    fn five_in_line_is_detected(cells in segment(), mark_x in any::<bool>()) {
        let mark = if mark_x { Mark::X } else { Mark::O };
        let mut board = Board::new();
        for &p in &cells {
            board.place(p, mark);
        }
        let mut expected = cells.clone();
        expected.sort();
        for &p in &cells {
            let line = check_win(&board, p, mark);
            prop_assert!(line.is_some());
            let line = line.unwrap();
            prop_assert_eq!(line.cells(), expected.as_slice());
        }
    }

    #[test]
    fn hint_is_empty_and_board_untouched(
        actions in prop::collection::vec(action(), 0..80),
    ) {
        let mut engine = TurnEngine::new();
        for a in actions {
            run(&mut engine, a);
        }
        let board = *engine.board();
        if let Some(p) = suggest_move(&board, engine.current_mark()) {
            prop_assert!(board.is_empty(p));
        }
        prop_assert_eq!(*engine.board(), board);
    }
}
