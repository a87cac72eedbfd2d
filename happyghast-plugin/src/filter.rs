//! Which entities count as happy ghasts.
//!
//! Hosts with a dedicated kind match it exactly. Older hosts and data-pack
//! backports simulate the creature on a plain ghast, marked either by a tag
//! or by a phrase in its custom name.

use happyghast_core::config::TargetConfig;
use happyghast_core::types::EntityView;

#[derive(Debug, Clone)]
pub struct TargetFilter {
    config: TargetConfig,
    phrase_lower: String,
}

impl TargetFilter {
    #[must_use]
    pub fn new(config: TargetConfig) -> Self {
        let phrase_lower = config.marker_phrase.to_lowercase();
        Self {
            config,
            phrase_lower,
        }
    }

    /// Only living entities can match.
    #[must_use]
    pub fn is_target(&self, entity: &EntityView) -> bool {
        if !entity.living {
            return false;
        }
        if entity.kind == self.config.kind {
            return true;
        }
        if entity.kind != self.config.fallback_kind {
            return false;
        }
        entity.tags.contains(&self.config.marker_tag)
            || entity
                .custom_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&self.phrase_lower))
    }
}

impl Default for TargetFilter {
    fn default() -> Self {
        Self::new(TargetConfig::default())
    }
}
