//! Implements parsing and writing of position text.
//!
//! Everything crossing the text boundary lives here: algebraic
//! square notation and the six whitespace-separated fields of
//! Forsyth–Edwards Notation (FEN). The board-side types never carry
//! characters around -- `'w'`/`'b'` and the piece letters exist only
//! in this module.

use regex::Regex;
use bitsets::Bitboard;
use squares::*;
use files::*;
use ranks::*;
use pieces::*;
use castling_rights::*;


/// An error signalled for invalid position text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError;


/// Parses square's algebraic notation (lowercase only).
///
/// # Examples:
///
/// ```rust
/// # use caissa::*;
/// # use caissa::squares::*;
/// assert_eq!(parse_square("e4"), Ok(E4));
/// assert_eq!(parse_square("e9"), Err(ParseError));
/// ```
pub fn parse_square(s: &str) -> Result<Square, ParseError> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^[a-h][1-8]$").unwrap();
    }
    if RE.is_match(s) {
        let mut chars = s.chars();
        let file = (chars.next().unwrap().to_digit(18).unwrap() - 10) as File;
        let rank = (chars.next().unwrap().to_digit(9).unwrap() - 1) as Rank;
        Ok(square(file, rank))
    } else {
        Err(ParseError)
    }
}


/// Writes square's algebraic notation.
pub fn square_notation(square: Square) -> String {
    debug_assert!(square <= 63);
    let mut s = String::with_capacity(2);
    s.push((b'a' + file(square) as u8) as char);
    s.push((b'1' + rank(square) as u8) as char);
    s
}


/// Parses Forsyth–Edwards Notation (FEN).
///
/// Returns a tuple with the following elements: `0`) the fourteen
/// bitboards (twelve piece boards plus the two color aggregates),
/// `1`) the side to move, `2`) the castling rights, `3`) the
/// en-passant target square, `4`) halfmove clock, `5`) fullmove
/// number.
///
/// # Forsyth–Edwards Notation
///
/// A FEN string defines a particular position using only the ASCII
/// character set. A FEN string contains six fields separated by a
/// space. The fields are:
///
/// 1. Piece placement (from white's perspective). Each rank is
///    described, starting with rank 8 and ending with rank 1. Within
///    each rank, the contents of each square are described from file A
///    through file H. White pieces are designated using upper-case
///    letters ("PRNBQK") whilst black uses lowercase ("prnbqk").
///    Blank squares are noted using digits 1 through 8 (the number of
///    blank squares), and "/" separates ranks.
///
/// 2. Active color. "w" means white moves next, "b" means black.
///
/// 3. Castling availability. If neither side can castle, this is
///    "-". Otherwise, this has one or more letters: "K" (white can
///    castle kingside), "Q" (white can castle queenside), "k" (black
///    can castle kingside), and/or "q" (black can castle queenside).
///
/// 4. En-passant target square (in algebraic notation). If there's no
///    en-passant target square, this is "-". If a pawn has just made
///    a 2-square move, this is the position "behind" the pawn.
///
/// 5. Halfmove clock. This is the number of halfmoves since the last
///    pawn advance or capture. This is used to determine if a draw
///    can be claimed under the fifty-move rule.
///
/// 6. Fullmove number. The number of the full move. It starts at 1,
///    and is incremented after black's move.
pub fn parse_fen(s: &str)
                 -> Result<([Bitboard; 14], Color, CastlingRights, Option<Square>, u16, u16),
                           ParseError> {
    let fields: Vec<_> = s.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(ParseError);
    }
    let boards = parse_fen_piece_placement(fields[0])?;
    let to_move = parse_fen_active_color(fields[1])?;
    let castling_rights = parse_fen_castling_rights(fields[2])?;
    let enpassant_target = match parse_fen_enpassant_square(fields[3])? {
        Some(x) => {
            // The target square must lie behind a pawn the waiting
            // side has just pushed two ranks.
            match to_move {
                WHITE if rank(x) == RANK_6 => Some(x),
                BLACK if rank(x) == RANK_3 => Some(x),
                _ => return Err(ParseError),
            }
        }
        None => None,
    };
    let halfmove_clock = fields[4].parse::<u16>().map_err(|_| ParseError)?;
    let fullmove_number = fields[5].parse::<u16>().map_err(|_| ParseError)?;
    if fullmove_number == 0 {
        return Err(ParseError);
    }
    Ok((boards, to_move, castling_rights, enpassant_target, halfmove_clock, fullmove_number))
}


fn parse_fen_piece_placement(s: &str) -> Result<[Bitboard; 14], ParseError> {
    // FEN describes the board starting from A8 and going toward H1.
    let mut file = FILE_A;
    let mut rank = RANK_8;

    // We start with an empty board.
    let mut boards = [0u64; 14];

    // Then we read `s` character by character, updating `boards`.
    for c in s.chars() {
        match c {
            '/' => {
                if file == 8 && rank > RANK_1 {
                    file = 0;
                    rank -= 1;
                } else {
                    return Err(ParseError);
                }
            }
            n @ '1'..='8' => {
                file += n.to_digit(9).unwrap() as usize;
                if file > 8 {
                    return Err(ParseError);
                }
            }
            _ => {
                let piece = match piece_from_char(c) {
                    Some(x) => x,
                    None => return Err(ParseError),
                };
                if file > 7 {
                    return Err(ParseError);
                }
                let mask = 1 << square(file, rank);
                boards[piece] |= mask;
                boards[color_board(piece_color(piece))] |= mask;
                file += 1;
            }
        }
    }

    // Make sure that all squares were initialized.
    if file != 8 || rank != RANK_1 {
        return Err(ParseError);
    }
    Ok(boards)
}


fn parse_fen_active_color(s: &str) -> Result<Color, ParseError> {
    match s {
        "w" => Ok(WHITE),
        "b" => Ok(BLACK),
        _ => Err(ParseError),
    }
}


fn parse_fen_castling_rights(s: &str) -> Result<CastlingRights, ParseError> {
    let mut rights = CastlingRights::new(0);
    if s != "-" {
        if s.is_empty() {
            return Err(ParseError);
        }
        for c in s.chars() {
            let (color, side) = match c {
                'K' => (WHITE, KINGSIDE),
                'Q' => (WHITE, QUEENSIDE),
                'k' => (BLACK, KINGSIDE),
                'q' => (BLACK, QUEENSIDE),
                _ => return Err(ParseError),
            };
            if !rights.grant(color, side) {
                return Err(ParseError);
            }
        }
    }
    Ok(rights)
}


fn parse_fen_enpassant_square(s: &str) -> Result<Option<Square>, ParseError> {
    if s == "-" {
        Ok(None)
    } else {
        parse_square(s).map(|x| Some(x))
    }
}
