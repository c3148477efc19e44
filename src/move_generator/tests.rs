use super::*;
use crate::xiangqi_position;

fn mv(text: &str) -> Move {
    Move::from_text(text).unwrap()
}

#[test]
fn test_starting_position_move_count() {
    let mut board = Board::starting_position();
    let moves = generate_moves(&mut board, Color::Red, true);
    // pawns 5, chariots 4, horses 4, elephants 4, advisors 2, king 1, cannons 24
    assert_eq!(moves.len(), 44);
    assert_eq!(generate_moves(&mut board, Color::Black, true).len(), 44);
}

#[test]
fn test_count_positions_depth_2() {
    let mut board = Board::starting_position();
    assert_eq!(count_positions(&mut board, 1), 44);
    assert_eq!(count_positions(&mut board, 2), 1920);
}

#[test]
fn test_horse_leg_blocks_move() {
    let board = Board::starting_position();
    let b0 = Square::new(9, 1);
    assert!(can_move(&board, b0, Square::new(7, 0)));
    assert!(can_move(&board, b0, Square::new(7, 2)));
    // the elephant on c0 blocks the leg toward d1
    assert!(!can_move(&board, b0, Square::new(8, 3)));
}

#[test]
fn test_cannon_needs_exactly_one_screen_to_capture() {
    let board = Board::starting_position();
    let h2 = Square::new(7, 7);
    // captures the horse on h9 over the black cannon
    assert!(can_move(&board, h2, Square::new(0, 7)));
    // no screen in front of the black cannon itself
    assert!(!can_move(&board, h2, Square::new(2, 7)));
    // quiet slide along the rank
    assert!(can_move(&board, h2, Square::new(7, 4)));
    // quiet moves may not jump
    assert!(!can_move(&board, h2, Square::new(1, 7)));
}

#[test]
fn test_elephant_stays_home() {
    let board = xiangqi_position! {
        ....k....
        .........
        .........
        .........
        .........
        ..B......
        .........
        .........
        .........
        ....K....
    };
    let c4 = Square::new(5, 2);
    assert!(!can_move(&board, c4, Square::new(3, 0)));
    assert!(!can_move(&board, c4, Square::new(3, 4)));
    assert!(can_move(&board, c4, Square::new(7, 0)));
    assert!(can_move(&board, c4, Square::new(7, 4)));
}

#[test]
fn test_elephant_eye_blocked() {
    let board = xiangqi_position! {
        ....k....
        .........
        .........
        .........
        .........
        ..B......
        ...p.....
        .........
        .........
        ....K....
    };
    assert!(!can_move(&board, Square::new(5, 2), Square::new(7, 4)));
}

#[test]
fn test_pawn_moves_sideways_only_after_crossing() {
    let board = xiangqi_position! {
        ...k.....
        .........
        .........
        .........
        ......P..
        .........
        ..P......
        .........
        .........
        ....K....
    };
    let home = Square::new(6, 2);
    assert!(can_move(&board, home, Square::new(5, 2)));
    assert!(!can_move(&board, home, Square::new(6, 1)));
    assert!(!can_move(&board, home, Square::new(7, 2)));

    let crossed = Square::new(4, 6);
    assert!(can_move(&board, crossed, Square::new(3, 6)));
    assert!(can_move(&board, crossed, Square::new(4, 5)));
    assert!(can_move(&board, crossed, Square::new(4, 7)));
    assert!(!can_move(&board, crossed, Square::new(5, 6)));
}

#[test]
fn test_king_and_advisor_stay_in_palace() {
    let board = xiangqi_position! {
        ....k....
        .........
        .........
        .........
        .........
        .........
        .........
        ...A.....
        .........
        ...K.....
    };
    assert!(!can_move(&board, Square::new(9, 3), Square::new(9, 2)));
    assert!(can_move(&board, Square::new(9, 3), Square::new(8, 3)));
    assert!(!can_move(&board, Square::new(7, 3), Square::new(6, 2)));
    assert!(can_move(&board, Square::new(7, 3), Square::new(8, 4)));
}

#[test]
fn test_flying_general_is_check() {
    let board = xiangqi_position! {
        ....k....
        .........
        .........
        .........
        .........
        .........
        .........
        .........
        .........
        ....K....
    };
    assert!(is_in_check(&board, Color::Red));
    assert!(is_in_check(&board, Color::Black));
}

#[test]
fn test_king_may_not_step_onto_open_file() {
    let mut board = xiangqi_position! {
        ....k....
        .........
        .........
        .........
        .........
        .........
        .........
        .........
        .........
        ...K.....
    };
    let moves = generate_moves(&mut board, Color::Red, true);
    assert!(!moves.contains(&mv("d0e0")));
    assert!(moves.contains(&mv("d0d1")));
}

#[test]
fn test_pinned_piece_cannot_leave_file() {
    let mut board = xiangqi_position! {
        ....k....
        .........
        .........
        .........
        .........
        .........
        .........
        .........
        ....R....
        ....K....
    };
    let moves = generate_moves(&mut board, Color::Red, true);
    assert!(!moves.contains(&mv("e1d1")));
    assert!(moves.contains(&mv("e1e5")));
}

#[test]
fn test_chariot_gives_check() {
    let board = xiangqi_position! {
        ....k....
        .........
        .........
        .........
        ....R....
        .........
        .........
        .........
        .........
        ...K.....
    };
    assert!(is_in_check(&board, Color::Red));
    assert!(!is_in_check(&board, Color::Black));
}

#[test]
fn test_generated_moves_never_leave_king_in_check() {
    let mut board = Board::starting_position();
    for first in generate_moves(&mut board, Color::Red, true) {
        board.make_move(first);
        let replies = generate_moves(&mut board, Color::Black, true);
        for reply in replies {
            board.make_move(reply);
            assert!(
                !is_in_check(&board, Color::Red),
                "{} {} leaves black in check",
                first,
                reply
            );
            board.unmake_move();
        }
        board.unmake_move();
    }
}

#[test]
fn test_check_detection_unchanged_by_generation() {
    let mut board = xiangqi_position! {
        ...k.....
        ....a....
        .........
        .........
        ...R.....
        .........
        .........
        .........
        .........
        ....K....
    };
    board.set_turn(Color::Black);
    let before = is_in_check(&board, Color::Red);
    let _ = generate_moves(&mut board, Color::Black, true);
    assert_eq!(before, is_in_check(&board, Color::Red));
    assert!(before);
}

#[test]
fn test_capture_only_generation() {
    let mut board = Board::starting_position();
    let captures = generate_moves(&mut board, Color::Red, false);
    assert_eq!(captures.len(), 2);
    assert!(captures.contains(&mv("b2b9")));
    assert!(captures.contains(&mv("h2h9")));
    for capture in captures {
        assert!(board.get(capture.to).is_some());
    }
}

#[test]
fn test_is_legal_move() {
    let mut board = Board::starting_position();
    assert!(is_legal_move(&mut board, mv("h2e2")));
    assert!(!is_legal_move(&mut board, mv("h7e7")));
    assert!(!is_legal_move(&mut board, mv("e0e2")));
    assert!(!is_legal_move(&mut board, Move::NULL));
}
