pub mod board;
pub mod game;
pub mod shell;

pub use board::{Color, Move, Piece, Position, Square, Status};
pub use game::Game;
