//! Ports (trait boundaries) for external collaborators.
//!
//! This module defines the interfaces between the engine and the outside
//! world. Following hexagonal architecture, these traits are owned by the
//! domain and implemented by adapters.

pub mod observer;
pub mod policy;
pub mod server;

pub use observer::{NullObserver, SessionObserver};
pub use policy::MovePolicy;
pub use server::GameServer;
