//! Error types surfaced by cart operations.

use bevy_ecs::entity::Entity;

/// Failures reading or writing cart state.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// The entity does not exist or carries no persistent data.
    #[error("entity {0:?} is not a cart with persistent data")]
    NoSuchCart(Entity),

    /// The entity exists but is not an actor.
    #[error("entity {0:?} is not an actor")]
    NoSuchActor(Entity),

    /// The stored owner id is not a valid UUID. Never defaulted to "no id".
    #[error("stored owner id `{raw}` is not a valid UUID")]
    MalformedOwnerId {
        /// The text found under the owner id key.
        raw: String,
        #[source]
        source: uuid::Error,
    },
}
