//! CLI infrastructure for the uttt client
//!
//! This module provides the command-line interface for inspecting saved
//! games, asking the engine for a move, and playing against the local robot.

pub mod commands;
pub mod output;
