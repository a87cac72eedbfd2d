//! Integration hooks for the host's potion-effect notifications.
//!
//! A host adapter calls one of these from its effect listener to build the
//! [`EffectChangeEvent`] handed to [`crate::plugin::SpeedPlugin::on_effect_change`].

use happyghast_core::types::{EntityId, StatusEffect};

use crate::events::{EffectAction, EffectChangeEvent};

/// The entity gained an effect it did not have.
#[must_use]
pub fn on_effect_added(entity: EntityId, effect: StatusEffect) -> EffectChangeEvent {
    EffectChangeEvent {
        entity,
        action: EffectAction::Added,
        modified: Some(effect.kind.clone()),
        old_effect: None,
        new_effect: Some(effect),
    }
}

/// An active effect was replaced by a new potency or duration.
#[must_use]
pub fn on_effect_changed(entity: EntityId, old: StatusEffect, new: StatusEffect) -> EffectChangeEvent {
    EffectChangeEvent {
        entity,
        action: EffectAction::Changed,
        modified: Some(new.kind.clone()),
        old_effect: Some(old),
        new_effect: Some(new),
    }
}

/// An effect expired or was removed individually.
#[must_use]
pub fn on_effect_removed(entity: EntityId, old: StatusEffect) -> EffectChangeEvent {
    EffectChangeEvent {
        entity,
        action: EffectAction::Removed,
        modified: Some(old.kind.clone()),
        old_effect: Some(old),
        new_effect: None,
    }
}

/// Every effect was wiped at once; the host raises one of these per effect.
#[must_use]
pub fn on_effects_cleared(entity: EntityId, old: StatusEffect) -> EffectChangeEvent {
    EffectChangeEvent {
        action: EffectAction::Cleared,
        ..on_effect_removed(entity, old)
    }
}
