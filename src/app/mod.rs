//! Application layer: session configuration and dependency wiring.
//!
//! # Usage
//!
//! ```
//! use uttt::app::{App, ClientConfig};
//! use uttt::session::Session;
//! use uttt::ports::NullObserver;
//!
//! let app = App::builder().with_default_seed(42).build();
//! let config = ClientConfig::new("alice").with_auto_pair(true);
//! let mut server = app.create_server(&config);
//! let policy = app.create_policy();
//! let summary = Session::new(&mut server, policy.as_ref(), &config)
//!     .run(&mut NullObserver)?;
//! assert!(summary.is_finished());
//! # Ok::<(), uttt::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::ClientConfig;
pub use container::{App, AppBuilder};
