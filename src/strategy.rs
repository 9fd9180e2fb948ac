//! Move strategies for a single decision cycle

pub mod first_open;
pub mod selector;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use first_open::FirstOpenPolicy;
pub use selector::{Decision, HeuristicSelector, MoveIntent, Selection, TokenPair};

use crate::ports::MovePolicy;

/// Named policies selectable from the command line and configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Win, then block, then first open cell
    #[default]
    Heuristic,
    /// Always the first open cell
    FirstOpen,
}

impl PolicyKind {
    pub fn build(self) -> Box<dyn MovePolicy> {
        match self {
            PolicyKind::Heuristic => Box::new(HeuristicSelector::new()),
            PolicyKind::FirstOpen => Box::new(FirstOpenPolicy::new()),
        }
    }
}
