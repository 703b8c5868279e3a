extern crate caissa;
extern crate rand;

use rand::Rng;
use caissa::*;


// Plays random legal moves, checking after every one that the
// position still round-trips through its text form, then unwinds the
// whole game and expects the exact initial state back.
#[test]
fn test_random_playouts_unwind_to_the_start() {
    let mut rng = rand::thread_rng();
    for _ in 0..25 {
        let mut position = Position::new();
        let initial = position.clone();
        let mut played = 0;
        while played < 150 && !position.legal_moves().is_empty() && !position.is_draw() {
            let n = position.legal_moves().len();
            let m = position.legal_moves()[rng.gen_range(0..n)];
            position.do_move(m);
            played += 1;
            check_observable_state(&position);
        }
        while played > 0 {
            position.undo_move();
            played -= 1;
        }
        assert_eq!(position, initial);
        assert_eq!(position.fen(), START_FEN);
    }
}


fn check_observable_state(position: &Position) {
    // Reparsing the emitted text must reproduce the position exactly,
    // caches included.
    let fen = position.fen();
    let reparsed = Position::from_fen(&fen).expect("emitted text must parse");
    assert_eq!(&reparsed, position);
    assert_eq!(reparsed.fen(), fen);

    // Exactly one king per side, and no pawns on the end ranks.
    let mut white_kings = 0;
    let mut black_kings = 0;
    for square in 0..64 {
        let piece_there = position.get(square);
        if piece_there == piece(WHITE, KING) {
            white_kings += 1;
        }
        if piece_there == piece(BLACK, KING) {
            black_kings += 1;
        }
        if piece_there != PIECE_NONE && piece_type(piece_there) == PAWN {
            let rank = square >> 3;
            assert!(rank != 0 && rank != 7);
        }
    }
    assert_eq!(white_kings, 1);
    assert_eq!(black_kings, 1);
}
