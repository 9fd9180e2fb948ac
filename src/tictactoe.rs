//! Board model for ultimate tic-tac-toe

pub mod board;
pub mod lines;
pub mod meta;

pub use board::{SubBoard, Token};
pub use lines::{Line, LineAnalyzer, WINNING_LINES, lines};
pub use meta::MetaBoard;
