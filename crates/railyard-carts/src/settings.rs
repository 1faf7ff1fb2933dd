//! Runtime cart settings derived from the loaded configuration.

use bevy_ecs::prelude::*;
use railyard_config::CartConfig;

/// Cart tuning values stored as a world resource.
///
/// Operations read it through [`CartSettings::of`], so a world built without
/// one behaves as if the defaults were installed.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CartSettings {
    /// Search inset used to recover a cart right after generic placement.
    pub spawn_search_sensitivity: f32,
    /// Height above a cart at which refused items are dropped.
    pub drop_offset_y: f64,
    /// Ticks before a dropped item can be picked up.
    pub drop_pickup_delay_ticks: u32,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self::from(&CartConfig::default())
    }
}

impl From<&CartConfig> for CartSettings {
    fn from(config: &CartConfig) -> Self {
        Self {
            spawn_search_sensitivity: config.spawn_search_sensitivity,
            drop_offset_y: f64::from(config.drop_offset_y),
            drop_pickup_delay_ticks: config.drop_pickup_delay_ticks,
        }
    }
}

impl CartSettings {
    /// The installed settings, or the defaults.
    pub fn of(world: &World) -> Self {
        world.get_resource::<Self>().copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_defaults() {
        let settings = CartSettings::default();
        assert_eq!(settings.spawn_search_sensitivity, 0.3);
        assert_eq!(settings.drop_offset_y, 1.0);
        assert_eq!(settings.drop_pickup_delay_ticks, 10);
    }

    #[test]
    fn test_of_falls_back_to_default() {
        let world = World::new();
        assert_eq!(CartSettings::of(&world), CartSettings::default());
    }

    #[test]
    fn test_of_reads_resource() {
        let mut world = World::new();
        let config = CartConfig {
            drop_offset_y: 2.5,
            ..Default::default()
        };
        world.insert_resource(CartSettings::from(&config));
        assert_eq!(CartSettings::of(&world).drop_offset_y, 2.5);
    }
}
