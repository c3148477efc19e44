//! Candidate destination squares per piece type. Candidates are a superset of the
//! legal destinations; `can_move` decides which of them are reachable.

use smallvec::SmallVec;

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;

pub type TargetList = SmallVec<[Square; 20]>;

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ELEPHANT_STEPS: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];
const HORSE_STEPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn candidate_targets(piece: Piece, color: Color, from: Square) -> TargetList {
    let mut targets = TargetList::new();
    match piece {
        Piece::King => push_steps(&mut targets, from, &ORTHOGONAL),
        Piece::Advisor => push_steps(&mut targets, from, &DIAGONAL),
        Piece::Elephant => push_steps(&mut targets, from, &ELEPHANT_STEPS),
        Piece::Horse => push_steps(&mut targets, from, &HORSE_STEPS),
        Piece::Chariot | Piece::Cannon => {
            for &(d_row, d_col) in ORTHOGONAL.iter() {
                let mut square = from.offset(d_row, d_col);
                while square.is_on_board() {
                    targets.push(square);
                    square = square.offset(d_row, d_col);
                }
            }
        }
        Piece::Pawn => push_steps(
            &mut targets,
            from,
            &[(color.forward(), 0), (0, -1), (0, 1)],
        ),
    }
    targets
}

fn push_steps(targets: &mut TargetList, from: Square, steps: &[(i8, i8)]) {
    targets.extend(
        steps
            .iter()
            .map(|&(d_row, d_col)| from.offset(d_row, d_col))
            .filter(|square| square.is_on_board()),
    );
}
