use tracing::debug;

use crate::board_engine::{
    error::{BoardError, Result},
    models::{Board, CellCoord, RevealOutcome},
};

/// Advance one cell: Hidden shows the question, Question shows the answer,
/// Answer stays put and reports [`RevealOutcome::NoChange`].
///
/// Only the addressed clue is touched. Coordinates outside the board fail with
/// [`BoardError::IndexOutOfRange`].
pub fn activate_cell(
    board: &mut Board,
    category_index: usize,
    clue_index: usize,
) -> Result<RevealOutcome> {
    let coord = CellCoord::new(category_index, clue_index);
    let clue = board.clue_mut(coord).ok_or(BoardError::IndexOutOfRange {
        category_index,
        clue_index,
    })?;

    match clue.reveal_state().next() {
        Some(state) => {
            clue.set_reveal_state(state);
            Ok(RevealOutcome::Revealed {
                state,
                text: clue.display_text().to_string(),
            })
        }
        None => {
            debug!(%coord, "cell already shows its answer");
            Ok(RevealOutcome::NoChange)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_engine::models::{Category, Clue, RevealState};

    fn math_board() -> Board {
        Board::new(vec![Category::new("Math", vec![Clue::new("2+2", "4")])])
    }

    fn two_by_two() -> Board {
        Board::new(vec![
            Category::new("A", vec![Clue::new("qa0", "aa0"), Clue::new("qa1", "aa1")]),
            Category::new("B", vec![Clue::new("qb0", "ab0"), Clue::new("qb1", "ab1")]),
        ])
    }

    #[test]
    fn question_then_answer_then_nothing() {
        let mut board = math_board();
        let at = CellCoord::new(0, 0);

        let first = activate_cell(&mut board, 0, 0).unwrap();
        assert_eq!(first.text(), Some("2+2"));
        assert_eq!(board.clue(at).unwrap().reveal_state(), RevealState::Question);

        let second = activate_cell(&mut board, 0, 0).unwrap();
        assert_eq!(second.text(), Some("4"));
        assert_eq!(board.clue(at).unwrap().reveal_state(), RevealState::Answer);

        let third = activate_cell(&mut board, 0, 0).unwrap();
        assert_eq!(third, RevealOutcome::NoChange);
        assert!(!third.has_update());
        assert_eq!(board.clue(at).unwrap().reveal_state(), RevealState::Answer);
    }

    #[test]
    fn answered_cell_stays_answered() {
        let mut board = math_board();
        activate_cell(&mut board, 0, 0).unwrap();
        activate_cell(&mut board, 0, 0).unwrap();
        let snapshot = board.clone();
        for _ in 0..10 {
            assert_eq!(activate_cell(&mut board, 0, 0).unwrap(), RevealOutcome::NoChange);
        }
        assert_eq!(board, snapshot);
    }

    #[test]
    fn states_visited_in_order() {
        let mut board = two_by_two();
        let mut visited = vec![board.clue(CellCoord::new(1, 0)).unwrap().reveal_state()];
        for _ in 0..4 {
            if let RevealOutcome::Revealed { state, .. } = activate_cell(&mut board, 1, 0).unwrap() {
                visited.push(state);
            }
        }
        assert_eq!(
            visited,
            [RevealState::Hidden, RevealState::Question, RevealState::Answer]
        );
    }

    #[test]
    fn only_the_target_cell_changes() {
        let mut board = two_by_two();
        activate_cell(&mut board, 1, 1).unwrap();
        for coord in board.coords().collect::<Vec<_>>() {
            let expected = if coord == CellCoord::new(1, 1) {
                RevealState::Question
            } else {
                RevealState::Hidden
            };
            assert_eq!(board.clue(coord).unwrap().reveal_state(), expected, "at {coord}");
        }
    }

    #[test]
    fn out_of_range_is_an_error_and_changes_nothing() {
        let mut board = two_by_two();
        let before = board.clone();
        for (col, row) in [(2, 0), (0, 2), (9, 9)] {
            assert_eq!(
                activate_cell(&mut board, col, row),
                Err(BoardError::IndexOutOfRange { category_index: col, clue_index: row })
            );
        }
        assert_eq!(board, before);
    }
}
