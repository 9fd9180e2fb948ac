//! Dependency container wiring servers and policies together.

use super::config::ClientConfig;
use crate::{adapters::LocalServer, ports::MovePolicy, strategy::PolicyKind};

/// Application with dependency injection.
///
/// Owns the choice of robot policy and default seed, and hands out servers
/// and player policies built from them.
///
/// # Examples
///
/// ```
/// use uttt::app::{App, ClientConfig};
/// use uttt::strategy::PolicyKind;
///
/// let app = App::builder()
///     .with_robot(PolicyKind::FirstOpen)
///     .with_default_seed(42)
///     .build();
/// let server = app.create_server(&ClientConfig::new("alice"));
/// assert_eq!(server.robot_name(), "first-open");
/// ```
pub struct App {
    /// Policy the local server's robot partner plays with
    robot: PolicyKind,
    /// Policy our own player uses
    player: PolicyKind,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults.
    ///
    /// Uses:
    /// - Heuristic policy for both the player and the robot
    /// - No default seed (non-deterministic secrets)
    pub fn new() -> Self {
        Self {
            robot: PolicyKind::Heuristic,
            player: PolicyKind::Heuristic,
            default_seed: None,
        }
    }

    /// Create a builder for constructing an app with custom dependencies.
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    /// Create an in-memory server for the given session configuration.
    ///
    /// The config seed takes precedence over the app default.
    pub fn create_server(&self, config: &ClientConfig) -> LocalServer {
        let server = match config.seed.or(self.default_seed) {
            Some(seed) => LocalServer::with_seed(seed),
            None => LocalServer::new(),
        };
        server.with_robot(self.robot.build())
    }

    /// Create the policy our own player uses.
    pub fn create_policy(&self) -> Box<dyn MovePolicy> {
        self.player.build()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an app with custom dependencies.
pub struct AppBuilder {
    robot: PolicyKind,
    player: PolicyKind,
    default_seed: Option<u64>,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self {
            robot: PolicyKind::Heuristic,
            player: PolicyKind::Heuristic,
            default_seed: None,
        }
    }

    /// Set the robot partner's policy.
    pub fn with_robot(mut self, robot: PolicyKind) -> Self {
        self.robot = robot;
        self
    }

    /// Set our own player's policy.
    pub fn with_player(mut self, player: PolicyKind) -> Self {
        self.player = player;
        self
    }

    /// Set a default random seed for all servers created by this container.
    ///
    /// Useful for creating deterministic tests.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app with the configured dependencies.
    pub fn build(self) -> App {
        App {
            robot: self.robot,
            player: self.player,
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_heuristic_everywhere() {
        let app = App::new();
        assert_eq!(app.create_policy().name(), "heuristic");
        let server = app.create_server(&ClientConfig::new("alice"));
        assert_eq!(server.robot_name(), "heuristic");
    }

    #[test]
    fn builder_overrides_player_policy() {
        let app = App::builder()
            .with_player(PolicyKind::FirstOpen)
            .build();
        assert_eq!(app.create_policy().name(), "first-open");
    }
}
