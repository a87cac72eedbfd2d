//! The host runtime seam.
//!
//! The game server owns every world, entity, and attribute instance. The
//! plugin never holds entity state of its own; it asks the host through
//! [`Host`] and mutates attribute instances the host lends out.
//!
//! All calls happen on the host's simulation thread, one at a time, so the
//! trait takes `&mut self` for mutation and needs no interior locking.

pub mod memory;

use crate::error::HostError;
use crate::types::{AttributeInstance, AttributeKey, EffectKind, EntityId, EntityView, StatusEffect, WorldId};

/// Queries and mutations the plugin needs from the game server.
pub trait Host {
    /// Look up an attribute symbol by name in this host version's capability table.
    ///
    /// `Ok(None)` means the name does not exist on this host version.
    ///
    /// # Errors
    /// Returns [`HostError::SymbolAccess`] if the name exists but cannot be read.
    fn lookup_attribute(&self, name: &str) -> Result<Option<AttributeKey>, HostError>;

    /// Look up a status-effect symbol by name.
    ///
    /// # Errors
    /// Returns [`HostError::SymbolAccess`] if the name exists but cannot be read.
    fn lookup_effect(&self, name: &str) -> Result<Option<EffectKind>, HostError>;

    /// Currently loaded worlds.
    fn worlds(&self) -> Vec<WorldId>;

    /// Entities currently loaded in `world`.
    fn entities_in(&self, world: WorldId) -> Vec<EntityId>;

    /// Snapshot of an entity's filterable fields, or `None` if it is gone.
    fn entity(&self, id: EntityId) -> Option<EntityView>;

    /// The active effect of `kind` on `id`, if any.
    fn active_effect(&self, id: EntityId, kind: &EffectKind) -> Option<StatusEffect>;

    /// Read access to one attribute instance of an entity.
    fn attribute(&self, id: EntityId, key: &AttributeKey) -> Option<&AttributeInstance>;

    /// Write access to one attribute instance of an entity.
    fn attribute_mut(&mut self, id: EntityId, key: &AttributeKey) -> Option<&mut AttributeInstance>;

    /// Every entity in every loaded world.
    fn loaded_entities(&self) -> Vec<EntityId> {
        self.worlds()
            .into_iter()
            .flat_map(|world| self.entities_in(world))
            .collect()
    }
}
