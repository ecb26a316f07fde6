//! Session configuration.

use crawl_core::Explorer;
use crawl_map::RenderConfig;

/// Configuration for a play session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Short description of the explorer created when a map has no player.
    pub fallback_name: String,
    /// Long description of that explorer.
    pub fallback_description: String,
    /// Starting health of that explorer.
    pub fallback_health: i32,
    /// Follow every successful move with a full `look`.
    pub echo_room: bool,
    /// How the `map` command draws the map.
    pub render: RenderConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fallback_name: "explorer".to_string(),
            fallback_description: "an intrepid explorer".to_string(),
            fallback_health: Explorer::MAX_HEALTH,
            echo_room: false,
            render: RenderConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback explorer's name and description.
    pub fn with_fallback_player(mut self, name: &str, description: &str) -> Self {
        self.fallback_name = name.to_string();
        self.fallback_description = description.to_string();
        self
    }

    /// Set the fallback explorer's starting health.
    pub fn with_fallback_health(mut self, health: i32) -> Self {
        self.fallback_health = health;
        self
    }

    /// Turn the room echo after moves on or off.
    pub fn with_echo_room(mut self, echo: bool) -> Self {
        self.echo_room = echo;
        self
    }

    /// Set the map renderer configuration.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SessionConfig::default();
        assert_eq!(config.fallback_name, "explorer");
        assert_eq!(config.fallback_health, 10);
        assert!(!config.echo_room);
    }

    #[test]
    fn config_builder() {
        let config = SessionConfig::new()
            .with_fallback_player("doris", "a tired explorer")
            .with_fallback_health(4)
            .with_echo_room(true)
            .with_render(RenderConfig::default().with_marker('*'));
        assert_eq!(config.fallback_name, "doris");
        assert_eq!(config.fallback_description, "a tired explorer");
        assert_eq!(config.fallback_health, 4);
        assert!(config.echo_room);
        assert_eq!(config.render.marker, '*');
    }
}
