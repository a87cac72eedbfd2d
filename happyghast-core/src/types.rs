//! Core type definitions shared between the host abstraction and the plugin.
//!
//! Entities and worlds are owned by the host runtime; this crate only ever
//! holds opaque handles to them plus small value snapshots.

use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Opaque handle to a live entity inside the host world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a loaded world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldId(pub Uuid);

impl WorldId {
    /// Create a new random world ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WorldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Resolved Host Symbols
// ---------------------------------------------------------------------------

/// A resolved attribute handle (e.g. the host's flying-speed attribute).
///
/// Only the host hands these out, through [`crate::host::Host::lookup_attribute`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeKey(String);

impl AttributeKey {
    /// Wrap a host-canonical attribute symbol.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The host's canonical name for this attribute.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved status-effect kind (e.g. the host's slowness effect).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectKind(String);

impl EffectKind {
    /// Wrap a host-canonical effect symbol.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The host's canonical name for this effect kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Status Effects
// ---------------------------------------------------------------------------

/// An effect currently active on an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEffect {
    /// Which effect this is.
    pub kind: EffectKind,
    /// Potency amplifier. `0` is level I, `1` is level II, and so on.
    pub amplifier: i32,
    /// Remaining duration in game ticks.
    pub duration_ticks: u32,
}

impl StatusEffect {
    /// Create a new status effect.
    #[must_use]
    pub fn new(kind: EffectKind, amplifier: i32, duration_ticks: u32) -> Self {
        Self {
            kind,
            amplifier,
            duration_ticks,
        }
    }
}

/// Whether a driving effect speeds the entity up or slows it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Speed boost — positive modifier.
    Boost,
    /// Slowness — negative modifier.
    Slow,
}

impl Polarity {
    /// `+1.0` for boost, `-1.0` for slow.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Boost => 1.0,
            Self::Slow => -1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Attribute Modifiers
// ---------------------------------------------------------------------------

/// How a modifier combines with the attribute's base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierOperation {
    /// Flat bonus added to the base value.
    AddNumber,
    /// Scale by `(1 + amount)`. Amounts of this class are summed before
    /// scaling, so two `+0.4` modifiers give `×1.8`, not `×1.96`.
    MultiplyScalar1,
}

/// A named, identified adjustment to an attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeModifier {
    /// Stable identity; the canonical key for find/replace/remove.
    pub id: Uuid,
    /// Display name; secondary key kept for compatibility.
    pub name: String,
    /// Signed amount.
    pub amount: f64,
    /// Combination rule.
    pub operation: ModifierOperation,
}

impl AttributeModifier {
    /// Create a new modifier.
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>, amount: f64, operation: ModifierOperation) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            operation,
        }
    }
}

/// A per-entity numeric stat carrying zero or more modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeInstance {
    /// Which attribute this is.
    pub key: AttributeKey,
    /// Unmodified value.
    pub base: f64,
    modifiers: Vec<AttributeModifier>,
}

impl AttributeInstance {
    /// Create an instance with no modifiers.
    #[must_use]
    pub fn new(key: AttributeKey, base: f64) -> Self {
        Self {
            key,
            base,
            modifiers: Vec::new(),
        }
    }

    /// Currently attached modifiers, in insertion order.
    #[must_use]
    pub fn modifiers(&self) -> &[AttributeModifier] {
        &self.modifiers
    }

    /// Attach a modifier.
    pub fn add_modifier(&mut self, modifier: AttributeModifier) {
        self.modifiers.push(modifier);
    }

    /// Remove every modifier matching `predicate`. Returns how many were removed.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&AttributeModifier) -> bool) -> usize {
        let before = self.modifiers.len();
        self.modifiers.retain(|m| !predicate(m));
        before - self.modifiers.len()
    }

    /// Effective value: `(base + Σ AddNumber) × (1 + Σ MultiplyScalar1)`.
    #[must_use]
    pub fn value(&self) -> f64 {
        let mut flat = self.base;
        let mut scalar = 0.0;
        for modifier in &self.modifiers {
            match modifier.operation {
                ModifierOperation::AddNumber => flat += modifier.amount,
                ModifierOperation::MultiplyScalar1 => scalar += modifier.amount,
            }
        }
        flat * (1.0 + scalar)
    }
}

// ---------------------------------------------------------------------------
// Entity Snapshot
// ---------------------------------------------------------------------------

/// Read-only snapshot of the entity fields the plugin filters on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityView {
    /// Entity handle.
    pub id: EntityId,
    /// World the entity lives in.
    pub world: WorldId,
    /// Declared kind tag, e.g. `"happy_ghast"`.
    pub kind: String,
    /// Whether the entity is a living creature (can carry effects/attributes).
    pub living: bool,
    /// Optional custom display name.
    pub custom_name: Option<String>,
    /// Scoreboard-style string tags.
    pub tags: BTreeSet<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
