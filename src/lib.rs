//! This crate implements a rules-complete chess position.
//!
//! # Why a position library?
//!
//! Every program that plays, teaches, or referees chess needs the
//! same unglamorous core: a board representation that can parse and
//! write the standard position text, enumerate every strictly legal
//! move, play a move, take it back, and answer check, checkmate and
//! draw questions. This is also the part that is easiest to get
//! subtly wrong -- pinned pieces, discovered checks through an
//! en-passant capture, castling through an attacked square.
//!
//! This crate provides exactly that core and nothing else. There is
//! no search, no evaluation, no clock, and no user interface. A chess
//! engine, a game server, or a rendering front end are expected to
//! sit on top of [`Position`](struct.Position.html) and consume its
//! legal-move list.
//!
//! # Representation
//!
//! The board is kept as fourteen 64-bit *bitboards*: one board per
//! piece kind and colour, plus one occupancy aggregate per colour.
//! Slider attacks are computed with the classic ray/occupancy trick
//! (`occ ^ (occ - 2·from)`, see [`bitsets`](bitsets/index.html)),
//! negative directions by reflecting the board. Move legality is
//! decided without making the move on a scratch board: each candidate
//! is tested against a recomputed attack footprint that accounts for
//! the squares the move would vacate and occupy.
//!
//! # Usage
//!
//! ```rust
//! use caissa::*;
//! use caissa::squares::{E2, E4};
//!
//! let mut position = Position::new();
//! let m = position.create_move(E2, E4, None);
//! assert!(!m.is_invalid());
//! position.do_move(m);
//! assert_eq!(position.fen(),
//!            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
//! position.undo_move();
//! assert_eq!(position, Position::new());
//! ```

#[macro_use]
extern crate lazy_static;
extern crate regex;

pub mod bitsets;
pub mod squares;
pub mod files;
pub mod ranks;
pub mod utils;
mod pieces;
mod castling_rights;
mod attacks;
mod moves;
mod notation;
mod position;

pub use pieces::*;
pub use castling_rights::*;
pub use attacks::*;
pub use moves::*;
pub use notation::*;
pub use position::*;
