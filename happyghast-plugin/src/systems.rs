//! Apply and clear procedures for the owned speed modifier.
//!
//! Both locate the entity's flying-speed attribute, falling back to movement
//! speed, and do nothing if neither is present. An entity carries at most one
//! owned modifier: apply always clears before adding.

use happyghast_core::config::ModifierConfig;
use happyghast_core::host::Host;
use happyghast_core::resolve::Capabilities;
use happyghast_core::speed;
use happyghast_core::types::{AttributeModifier, EntityId, ModifierOperation, Polarity};
use tracing::debug;

/// Replace the owned modifier on `entity` with one sized for `amplifier`.
///
/// Returns the signed amount applied, or `None` if the entity has no speed
/// attribute this host version exposes.
pub fn apply_speed_change<H: Host + ?Sized>(
    host: &mut H,
    caps: &Capabilities,
    modifier: &ModifierConfig,
    entity: EntityId,
    amplifier: i32,
    polarity: Polarity,
) -> Option<f64> {
    let key = caps.speed_attribute(&*host, entity)?;
    let inst = host.attribute_mut(entity, key)?;

    inst.remove_where(|m| is_owned(m, modifier));

    let amount = speed::signed_magnitude(amplifier, polarity);
    inst.add_modifier(AttributeModifier::new(
        modifier.id,
        modifier.name.clone(),
        amount,
        ModifierOperation::MultiplyScalar1,
    ));

    debug!(entity = %entity, attribute = %key, amplifier, amount, "Applied speed modifier");
    Some(amount)
}

/// Remove every owned modifier from `entity`. Returns how many were removed.
pub fn clear_speed_modifier<H: Host + ?Sized>(
    host: &mut H,
    caps: &Capabilities,
    modifier: &ModifierConfig,
    entity: EntityId,
) -> usize {
    let Some(key) = caps.speed_attribute(&*host, entity) else {
        return 0;
    };
    let Some(inst) = host.attribute_mut(entity, key) else {
        return 0;
    };

    let removed = inst.remove_where(|m| is_owned(m, modifier));
    if removed > 0 {
        debug!(entity = %entity, attribute = %key, removed, "Cleared speed modifier");
    }
    removed
}

/// Whether `m` belongs to this plugin. The id is the canonical key; the name
/// match catches modifiers written by builds that used a different id.
pub fn is_owned(m: &AttributeModifier, modifier: &ModifierConfig) -> bool {
    m.id == modifier.id || m.name == modifier.name
}
