//! Subcommands of the uttt binary

pub mod play;
pub mod show;
pub mod suggest;
