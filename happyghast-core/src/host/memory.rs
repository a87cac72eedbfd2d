//! In-memory reference host.
//!
//! Holds worlds, entities, effects, and attribute instances in plain
//! collections. Used as the test double for the plugin and as a template
//! for wiring a real server: anything that can answer these queries can
//! host the plugin.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::HostError;
use crate::host::Host;
use crate::types::{AttributeInstance, AttributeKey, EffectKind, EntityId, EntityView, StatusEffect, WorldId};

/// Symbols exposed by current host versions.
pub const MODERN_ATTRIBUTES: &[&str] = &["FLYING_SPEED", "MOVEMENT_SPEED"];
/// Effect symbols exposed by current host versions.
pub const MODERN_EFFECTS: &[&str] = &["SPEED", "SLOWNESS"];
/// Attribute symbols exposed by older host versions.
pub const LEGACY_ATTRIBUTES: &[&str] = &["GENERIC_FLYING_SPEED", "GENERIC_MOVEMENT_SPEED"];
/// Effect symbols exposed by older host versions.
pub const LEGACY_EFFECTS: &[&str] = &["SPEED", "SLOW"];

/// Description of an entity to spawn into an [`InMemoryHost`].
#[derive(Debug, Clone)]
pub struct Spawn {
    kind: String,
    living: bool,
    custom_name: Option<String>,
    tags: BTreeSet<String>,
}

impl Spawn {
    /// A living creature of `kind`.
    #[must_use]
    pub fn living(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            living: true,
            custom_name: None,
            tags: BTreeSet::new(),
        }
    }

    /// A non-living entity (item frame, arrow, ...).
    #[must_use]
    pub fn object(kind: impl Into<String>) -> Self {
        Self {
            living: false,
            ..Self::living(kind)
        }
    }

    /// Give the entity a custom display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.custom_name = Some(name.into());
        self
    }

    /// Add a tag.
    #[must_use]
    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }
}

#[derive(Debug, Clone)]
struct EntityRecord {
    view: EntityView,
    effects: Vec<StatusEffect>,
    attributes: Vec<AttributeInstance>,
}

/// A self-contained host backed by in-memory collections.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    attribute_symbols: HashMap<String, AttributeKey>,
    effect_symbols: HashMap<String, EffectKind>,
    inaccessible: HashMap<String, String>,
    worlds: BTreeMap<WorldId, Vec<EntityId>>,
    entities: HashMap<EntityId, EntityRecord>,
}

impl InMemoryHost {
    /// A host with an empty capability table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host exposing the current symbol names.
    #[must_use]
    pub fn modern() -> Self {
        Self::with_symbols(MODERN_ATTRIBUTES, MODERN_EFFECTS)
    }

    /// A host exposing the older `GENERIC_*` / `SLOW` symbol names.
    #[must_use]
    pub fn legacy() -> Self {
        Self::with_symbols(LEGACY_ATTRIBUTES, LEGACY_EFFECTS)
    }

    /// A host exposing exactly the given symbols.
    #[must_use]
    pub fn with_symbols(attributes: &[&str], effects: &[&str]) -> Self {
        let mut host = Self::new();
        for name in attributes {
            host.register_attribute(name);
        }
        for name in effects {
            host.register_effect(name);
        }
        host
    }

    /// Add an attribute symbol to the capability table.
    pub fn register_attribute(&mut self, name: &str) {
        self.attribute_symbols
            .insert(name.to_string(), AttributeKey::new(name));
    }

    /// Add an effect symbol to the capability table.
    pub fn register_effect(&mut self, name: &str) {
        self.effect_symbols
            .insert(name.to_string(), EffectKind::new(name));
    }

    /// Make lookups of `name` fail with [`HostError::SymbolAccess`].
    pub fn make_inaccessible(&mut self, name: &str, reason: &str) {
        self.inaccessible.insert(name.to_string(), reason.to_string());
    }

    /// Load a new, empty world.
    pub fn add_world(&mut self) -> WorldId {
        let world = WorldId::new();
        self.worlds.insert(world, Vec::new());
        world
    }

    /// Spawn an entity into `world`. Unknown worlds are created on demand.
    pub fn spawn(&mut self, world: WorldId, spawn: Spawn) -> EntityId {
        let id = EntityId::new();
        let view = EntityView {
            id,
            world,
            kind: spawn.kind,
            living: spawn.living,
            custom_name: spawn.custom_name,
            tags: spawn.tags,
        };
        self.worlds.entry(world).or_default().push(id);
        self.entities.insert(
            id,
            EntityRecord {
                view,
                effects: Vec::new(),
                attributes: Vec::new(),
            },
        );
        id
    }

    /// Remove an entity from its world.
    pub fn despawn(&mut self, id: EntityId) {
        if let Some(record) = self.entities.remove(&id) {
            if let Some(list) = self.worlds.get_mut(&record.view.world) {
                list.retain(|e| *e != id);
            }
        }
    }

    /// Give an entity an attribute instance keyed by `symbol`.
    ///
    /// # Errors
    /// Returns [`HostError::UnknownEntity`] if the entity does not exist.
    pub fn add_attribute(&mut self, id: EntityId, symbol: &str, base: f64) -> Result<(), HostError> {
        let record = self.entities.get_mut(&id).ok_or(HostError::UnknownEntity(id))?;
        record
            .attributes
            .push(AttributeInstance::new(AttributeKey::new(symbol), base));
        Ok(())
    }

    /// Attach (or replace) an active effect, returning the previous one.
    ///
    /// # Errors
    /// Returns [`HostError::UnknownEntity`] if the entity does not exist.
    pub fn set_effect(&mut self, id: EntityId, effect: StatusEffect) -> Result<Option<StatusEffect>, HostError> {
        let record = self.entities.get_mut(&id).ok_or(HostError::UnknownEntity(id))?;
        let previous = record
            .effects
            .iter()
            .position(|e| e.kind == effect.kind)
            .map(|idx| record.effects.remove(idx));
        record.effects.push(effect);
        Ok(previous)
    }

    /// Detach an active effect, returning it.
    ///
    /// # Errors
    /// Returns [`HostError::UnknownEntity`] if the entity does not exist.
    pub fn remove_effect(&mut self, id: EntityId, kind: &EffectKind) -> Result<Option<StatusEffect>, HostError> {
        let record = self.entities.get_mut(&id).ok_or(HostError::UnknownEntity(id))?;
        Ok(record
            .effects
            .iter()
            .position(|e| &e.kind == kind)
            .map(|idx| record.effects.remove(idx)))
    }

    /// Look up an attribute instance by raw symbol, for inspection.
    #[must_use]
    pub fn attribute_by_symbol(&self, id: EntityId, symbol: &str) -> Option<&AttributeInstance> {
        self.attribute(id, &AttributeKey::new(symbol))
    }

    /// Total modifiers attached across every attribute of an entity.
    #[must_use]
    pub fn modifier_count(&self, id: EntityId) -> usize {
        self.entities
            .get(&id)
            .map_or(0, |r| r.attributes.iter().map(|a| a.modifiers().len()).sum())
    }
}

impl Host for InMemoryHost {
    fn lookup_attribute(&self, name: &str) -> Result<Option<AttributeKey>, HostError> {
        if let Some(reason) = self.inaccessible.get(name) {
            return Err(HostError::SymbolAccess {
                symbol: name.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.attribute_symbols.get(name).cloned())
    }

    fn lookup_effect(&self, name: &str) -> Result<Option<EffectKind>, HostError> {
        if let Some(reason) = self.inaccessible.get(name) {
            return Err(HostError::SymbolAccess {
                symbol: name.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.effect_symbols.get(name).cloned())
    }

    fn worlds(&self) -> Vec<WorldId> {
        self.worlds.keys().copied().collect()
    }

    fn entities_in(&self, world: WorldId) -> Vec<EntityId> {
        self.worlds.get(&world).cloned().unwrap_or_default()
    }

    fn entity(&self, id: EntityId) -> Option<EntityView> {
        self.entities.get(&id).map(|r| r.view.clone())
    }

    fn active_effect(&self, id: EntityId, kind: &EffectKind) -> Option<StatusEffect> {
        self.entities
            .get(&id)?
            .effects
            .iter()
            .find(|e| &e.kind == kind)
            .cloned()
    }

    fn attribute(&self, id: EntityId, key: &AttributeKey) -> Option<&AttributeInstance> {
        self.entities
            .get(&id)?
            .attributes
            .iter()
            .find(|a| &a.key == key)
    }

    fn attribute_mut(&mut self, id: EntityId, key: &AttributeKey) -> Option<&mut AttributeInstance> {
        self.entities
            .get_mut(&id)?
            .attributes
            .iter_mut()
            .find(|a| &a.key == key)
    }
}
