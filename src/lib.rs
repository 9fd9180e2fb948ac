//! Heuristic player for networked ultimate tic-tac-toe
//!
//! This crate provides:
//! - Line geometry and win/threat detection for a 3x3 sub-board
//! - A stateless win / block / first-open-cell move selector
//! - Active sub-board resolution from the server's routing hint
//! - Wire types for the game server's JSON and a polling session loop
//! - An in-memory referee for offline play and tests

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod protocol;
pub mod render;
pub mod session;
pub mod strategy;
pub mod tictactoe;

pub use error::{Error, Result};
pub use strategy::{Decision, HeuristicSelector, MoveIntent, TokenPair};
pub use tictactoe::{LineAnalyzer, MetaBoard, SubBoard, Token};
