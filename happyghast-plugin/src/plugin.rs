//! Plugin lifecycle — enable, disable, and the effect-change handler.
//!
//! The host drives all three from its main thread:
//!
//! ```text
//! server start  → SpeedPlugin::enable()           resolve symbols, refresh loaded ghasts
//! effect change → SpeedPlugin::on_effect_change() apply / replace / clear
//! server stop   → SpeedPlugin::disable()          sweep every world
//! ```

use happyghast_core::config::HappyGhastConfig;
use happyghast_core::host::Host;
use happyghast_core::resolve::Capabilities;
use happyghast_core::types::{EntityId, Polarity};
use tracing::{debug, info, warn};

use crate::events::EffectChangeEvent;
use crate::filter::TargetFilter;
use crate::systems::{apply_speed_change, clear_speed_modifier};

/// Why an event produced no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The plugin is not enabled.
    Disabled,
    /// The host no longer knows the entity.
    UnknownEntity,
    /// The entity is not a happy ghast.
    NotTarget,
    /// The changed effect is neither speed nor (resolved) slowness.
    UnrelatedEffect,
    /// The entity exposes no speed attribute on this host version.
    NoSpeedAttribute,
}

/// What the handler did with one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectOutcome {
    Ignored(IgnoreReason),
    Applied { amount: f64 },
    Cleared { removed: usize },
}

/// The effect-to-attribute translator.
pub struct SpeedPlugin {
    config: HappyGhastConfig,
    filter: TargetFilter,
    /// `Some` while enabled.
    capabilities: Option<Capabilities>,
}

impl SpeedPlugin {
    #[must_use]
    pub fn new(config: HappyGhastConfig) -> Self {
        let filter = TargetFilter::new(config.target.clone());
        Self {
            config,
            filter,
            capabilities: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &HappyGhastConfig {
        &self.config
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.capabilities.is_some()
    }

    /// Symbols resolved at enable time.
    #[must_use]
    pub fn capabilities(&self) -> Option<&Capabilities> {
        self.capabilities.as_ref()
    }

    /// Resolve host symbols and refresh every already-loaded happy ghast.
    ///
    /// Returns how many entities received a modifier during the refresh.
    pub fn enable<H: Host + ?Sized>(&mut self, host: &mut H) -> usize {
        if self.is_enabled() {
            warn!("HappyGhastSpeed already enabled; ignoring");
            return 0;
        }
        if !self.config.general.enabled {
            info!("HappyGhastSpeed disabled by configuration");
            return 0;
        }

        let caps = Capabilities::resolve(&*host, &self.config.symbols);

        let refreshed = self.refresh_loaded(host, &caps);
        self.capabilities = Some(caps);

        info!(refreshed, "HappyGhastSpeed enabled");
        refreshed
    }

    /// Remove the owned modifier from every living entity in every world.
    ///
    /// Returns how many modifiers were removed.
    pub fn disable<H: Host + ?Sized>(&mut self, host: &mut H) -> usize {
        let Some(caps) = self.capabilities.take() else {
            debug!("HappyGhastSpeed disable requested while not enabled");
            return 0;
        };

        let mut removed = 0;
        for entity in host.loaded_entities() {
            let living = host.entity(entity).is_some_and(|view| view.living);
            if living {
                removed += clear_speed_modifier(host, &caps, &self.config.modifier, entity);
            }
        }

        info!(removed, "HappyGhastSpeed disabled");
        removed
    }

    /// React to one effect-change notification.
    pub fn on_effect_change<H: Host + ?Sized>(&self, host: &mut H, event: &EffectChangeEvent) -> EffectOutcome {
        let Some(caps) = self.capabilities.as_ref() else {
            return EffectOutcome::Ignored(IgnoreReason::Disabled);
        };
        let Some(view) = host.entity(event.entity) else {
            return EffectOutcome::Ignored(IgnoreReason::UnknownEntity);
        };
        if !self.filter.is_target(&view) {
            return EffectOutcome::Ignored(IgnoreReason::NotTarget);
        }
        let Some(polarity) = event.modified.as_ref().and_then(|kind| caps.polarity_of(kind)) else {
            return EffectOutcome::Ignored(IgnoreReason::UnrelatedEffect);
        };

        debug!(
            entity = %event.entity,
            action = event.action.as_str(),
            ?polarity,
            old_amplifier = ?event.old_amplifier(),
            amplifier = ?event.new_amplifier(),
            duration_ticks = ?event.new_duration(),
            "Speed effect changed"
        );

        match &event.new_effect {
            None => {
                let removed = clear_speed_modifier(host, caps, &self.config.modifier, event.entity);
                EffectOutcome::Cleared { removed }
            }
            Some(effect) => {
                match apply_speed_change(host, caps, &self.config.modifier, event.entity, effect.amplifier, polarity) {
                    Some(amount) => EffectOutcome::Applied { amount },
                    None => EffectOutcome::Ignored(IgnoreReason::NoSpeedAttribute),
                }
            }
        }
    }

    fn refresh_loaded<H: Host + ?Sized>(&self, host: &mut H, caps: &Capabilities) -> usize {
        let mut refreshed = 0;
        for entity in host.loaded_entities() {
            let is_target = host.entity(entity).is_some_and(|view| self.filter.is_target(&view));
            if is_target && self.refresh_entity(host, caps, entity) {
                refreshed += 1;
            }
        }
        refreshed
    }

    /// Re-derive the modifier from effects already active on `entity`.
    /// Slowness is applied after speed, so it wins when both are present.
    fn refresh_entity<H: Host + ?Sized>(&self, host: &mut H, caps: &Capabilities, entity: EntityId) -> bool {
        let mut applied = false;
        let drivers = [
            (caps.speed_effect.as_ref(), Polarity::Boost),
            (caps.slow_effect.as_ref(), Polarity::Slow),
        ];
        for (kind, polarity) in drivers {
            let Some(effect) = kind.and_then(|k| host.active_effect(entity, k)) else {
                continue;
            };
            applied |= apply_speed_change(host, caps, &self.config.modifier, entity, effect.amplifier, polarity).is_some();
        }
        applied
    }
}

impl Default for SpeedPlugin {
    fn default() -> Self {
        Self::new(HappyGhastConfig::default())
    }
}
