//! Effect-change notifications delivered by the host.
//!
//! One event is raised per effect kind per change. Removal is signalled by
//! an absent `new_effect`, regardless of `action`.

use happyghast_core::types::{EffectKind, EntityId, StatusEffect};

/// What happened to the effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectAction {
    /// The entity did not have the effect before.
    Added,
    /// An existing effect was replaced (new amplifier or duration).
    Changed,
    /// All effects were wiped (milk bucket, death, command).
    Cleared,
    /// This one effect expired or was removed.
    Removed,
}

impl EffectAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Changed => "changed",
            Self::Cleared => "cleared",
            Self::Removed => "removed",
        }
    }
}

/// A change to one status effect on one entity.
#[derive(Debug, Clone)]
pub struct EffectChangeEvent {
    pub entity: EntityId,
    pub action: EffectAction,
    /// Kind that changed. Hosts may omit it for some custom causes.
    pub modified: Option<EffectKind>,
    pub old_effect: Option<StatusEffect>,
    pub new_effect: Option<StatusEffect>,
}

impl EffectChangeEvent {
    /// Whether the effect is gone after this change.
    #[must_use]
    pub fn is_removal(&self) -> bool {
        self.new_effect.is_none()
    }

    /// Amplifier of the incoming effect, if any.
    #[must_use]
    pub fn new_amplifier(&self) -> Option<i32> {
        self.new_effect.as_ref().map(|e| e.amplifier)
    }

    /// Amplifier of the effect being replaced or removed, if any.
    #[must_use]
    pub fn old_amplifier(&self) -> Option<i32> {
        self.old_effect.as_ref().map(|e| e.amplifier)
    }

    /// Remaining ticks of the incoming effect, if any.
    #[must_use]
    pub fn new_duration(&self) -> Option<u32> {
        self.new_effect.as_ref().map(|e| e.duration_ticks)
    }
}
