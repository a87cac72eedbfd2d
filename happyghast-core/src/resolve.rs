//! Version-tolerant symbol resolution.
//!
//! Host versions disagree on symbol names for the same concept. At startup
//! each concept is resolved by trying an ordered list of candidate names
//! against the host's capability table. An unresolved concept is an ordinary
//! `None` that downstream code handles as reduced capability.

use tracing::{info, warn};

use crate::config::SymbolConfig;
use crate::error::HostError;
use crate::host::Host;
use crate::types::{AttributeKey, EffectKind, EntityId, Polarity};

/// Symbols resolved against one running host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Preferred attribute to modify.
    pub flying_speed: Option<AttributeKey>,
    /// Fallback attribute when an entity has no flying speed.
    pub movement_speed: Option<AttributeKey>,
    /// Boost effect kind.
    pub speed_effect: Option<EffectKind>,
    /// Slow effect kind.
    pub slow_effect: Option<EffectKind>,
}

impl Capabilities {
    /// Resolve every concept against `host`, logging what was found.
    #[must_use]
    pub fn resolve<H: Host + ?Sized>(host: &H, symbols: &SymbolConfig) -> Self {
        let caps = Self {
            flying_speed: resolve_attribute(host, &symbols.flying_speed),
            movement_speed: resolve_attribute(host, &symbols.movement_speed),
            speed_effect: resolve_effect(host, &symbols.speed_effect),
            slow_effect: resolve_effect(host, &symbols.slow_effect),
        };

        for warning in caps.degradations() {
            warn!("{warning}");
        }
        caps
    }

    /// One operator-facing warning per missing capability.
    #[must_use]
    pub fn degradations(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.attributes_missing() {
            warnings.push("No speed attribute resolved; speed effects will be inert on this host");
        } else if self.movement_speed.is_none() {
            warnings.push("Could not resolve MOVEMENT_SPEED attribute; entities without flying speed are unaffected");
        }
        if self.speed_effect.is_none() {
            warnings.push("Speed effect unavailable; speed boosts will not be translated");
        }
        if self.slow_effect.is_none() {
            warnings.push("Slowness effect unavailable; only speed boosts will be translated");
        }
        warnings
    }

    /// Which polarity a changed effect kind drives, if it drives one at all.
    #[must_use]
    pub fn polarity_of(&self, kind: &EffectKind) -> Option<Polarity> {
        if self.speed_effect.as_ref() == Some(kind) {
            Some(Polarity::Boost)
        } else if self.slow_effect.as_ref() == Some(kind) {
            Some(Polarity::Slow)
        } else {
            None
        }
    }

    /// The attribute to modify on `entity`: flying speed if the entity has
    /// it, movement speed otherwise.
    #[must_use]
    pub fn speed_attribute<'a, H: Host + ?Sized>(&'a self, host: &H, entity: EntityId) -> Option<&'a AttributeKey> {
        self.flying_speed
            .iter()
            .chain(self.movement_speed.iter())
            .find(|key| host.attribute(entity, key).is_some())
    }

    /// True when neither speed attribute resolved; the plugin is then inert.
    #[must_use]
    pub fn attributes_missing(&self) -> bool {
        self.flying_speed.is_none() && self.movement_speed.is_none()
    }
}

/// Resolve the first available attribute among `candidates`.
#[must_use]
pub fn resolve_attribute<H: Host + ?Sized>(host: &H, candidates: &[String]) -> Option<AttributeKey> {
    resolve_first("Attribute", candidates, |name| host.lookup_attribute(name))
}

/// Resolve the first available effect kind among `candidates`.
#[must_use]
pub fn resolve_effect<H: Host + ?Sized>(host: &H, candidates: &[String]) -> Option<EffectKind> {
    resolve_first("PotionEffectType", candidates, |name| host.lookup_effect(name))
}

fn resolve_first<T>(
    category: &str,
    candidates: &[String],
    lookup: impl Fn(&str) -> Result<Option<T>, HostError>,
) -> Option<T> {
    for name in candidates {
        match lookup(name) {
            Ok(Some(found)) => {
                info!(category, symbol = %name, "Resolved host symbol");
                return Some(found);
            }
            Ok(None) => {}
            Err(e) => warn!(category, symbol = %name, error = %e, "Host symbol lookup failed"),
        }
    }
    warn!(
        category,
        candidates = %candidates.join(", "),
        "Could not resolve host symbol from candidates"
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::{InMemoryHost, Spawn};

    #[test]
    fn modern_host_resolves_second_candidates() {
        let host = InMemoryHost::modern();
        let caps = Capabilities::resolve(&host, &SymbolConfig::default());

        assert_eq!(caps.flying_speed, Some(AttributeKey::new("FLYING_SPEED")));
        assert_eq!(caps.movement_speed, Some(AttributeKey::new("MOVEMENT_SPEED")));
        assert_eq!(caps.speed_effect, Some(EffectKind::new("SPEED")));
        assert_eq!(caps.slow_effect, Some(EffectKind::new("SLOWNESS")));
    }

    #[test]
    fn legacy_host_resolves_first_candidates() {
        let host = InMemoryHost::legacy();
        let caps = Capabilities::resolve(&host, &SymbolConfig::default());

        assert_eq!(caps.flying_speed, Some(AttributeKey::new("GENERIC_FLYING_SPEED")));
        assert_eq!(caps.slow_effect, Some(EffectKind::new("SLOW")));
    }

    #[test]
    fn access_failure_falls_through_to_next_candidate() {
        let mut host = InMemoryHost::legacy();
        host.register_attribute("FLYING_SPEED");
        host.make_inaccessible("GENERIC_FLYING_SPEED", "field not public");

        let caps = Capabilities::resolve(&host, &SymbolConfig::default());
        assert_eq!(caps.flying_speed, Some(AttributeKey::new("FLYING_SPEED")));
    }

    #[test]
    fn empty_table_resolves_nothing() {
        let caps = Capabilities::resolve(&InMemoryHost::new(), &SymbolConfig::default());
        assert_eq!(caps, Capabilities::default());
        assert!(caps.attributes_missing());
    }

    #[test]
    fn missing_attributes_warn_once() {
        let caps = Capabilities::resolve(&InMemoryHost::new(), &SymbolConfig::default());
        let attribute_warnings = caps
            .degradations()
            .into_iter()
            .filter(|w| w.contains("attribute"))
            .count();
        assert_eq!(attribute_warnings, 1);
    }

    #[test]
    fn flying_only_host_warns_about_movement() {
        let host = InMemoryHost::with_symbols(&["FLYING_SPEED"], &["SPEED", "SLOWNESS"]);
        let caps = Capabilities::resolve(&host, &SymbolConfig::default());
        assert_eq!(caps.degradations().len(), 1);
        assert!(caps.degradations()[0].contains("MOVEMENT_SPEED"));
    }

    #[test]
    fn modern_host_has_no_degradations() {
        let caps = Capabilities::resolve(&InMemoryHost::modern(), &SymbolConfig::default());
        assert!(caps.degradations().is_empty());
    }

    #[test]
    fn polarity_follows_resolved_kinds() {
        let caps = Capabilities::resolve(&InMemoryHost::modern(), &SymbolConfig::default());
        assert_eq!(caps.polarity_of(&EffectKind::new("SPEED")), Some(Polarity::Boost));
        assert_eq!(caps.polarity_of(&EffectKind::new("SLOWNESS")), Some(Polarity::Slow));
        assert_eq!(caps.polarity_of(&EffectKind::new("JUMP_BOOST")), None);
    }

    #[test]
    fn speed_attribute_prefers_flying() {
        let mut host = InMemoryHost::modern();
        let world = host.add_world();
        let both = host.spawn(world, Spawn::living("happy_ghast"));
        host.add_attribute(both, "MOVEMENT_SPEED", 0.1).expect("attr");
        host.add_attribute(both, "FLYING_SPEED", 0.05).expect("attr");
        let walker = host.spawn(world, Spawn::living("happy_ghast"));
        host.add_attribute(walker, "MOVEMENT_SPEED", 0.1).expect("attr");
        let bare = host.spawn(world, Spawn::living("happy_ghast"));

        let caps = Capabilities::resolve(&host, &SymbolConfig::default());
        assert_eq!(caps.speed_attribute(&host, both), caps.flying_speed.as_ref());
        assert_eq!(caps.speed_attribute(&host, walker), caps.movement_speed.as_ref());
        assert_eq!(caps.speed_attribute(&host, bare), None);
    }
}
