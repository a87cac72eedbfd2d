//! End-to-end plugin scenarios against the in-memory host.
//!
//! Each test drives the plugin exactly as a server would: enable, a
//! sequence of effect notifications, disable.

use happyghast_core::host::memory::{InMemoryHost, Spawn};
use happyghast_core::host::Host;
use happyghast_core::types::{EffectKind, EntityId, StatusEffect, WorldId};
use happyghast_plugin::hooks;
use happyghast_plugin::{EffectOutcome, IgnoreReason, SpeedPlugin};

fn effect(kind: &str, amplifier: i32) -> StatusEffect {
    StatusEffect::new(EffectKind::new(kind), amplifier, 600)
}

fn spawn_with_flight(host: &mut InMemoryHost, world: WorldId, spawn: Spawn) -> EntityId {
    let e = host.spawn(world, spawn);
    host.add_attribute(e, "FLYING_SPEED", 0.05).expect("attr");
    host.add_attribute(e, "MOVEMENT_SPEED", 0.1).expect("attr");
    e
}

fn owned_amounts(host: &InMemoryHost, plugin: &SpeedPlugin, e: EntityId) -> Vec<f64> {
    let id = plugin.config().modifier.id;
    ["FLYING_SPEED", "MOVEMENT_SPEED"]
        .iter()
        .filter_map(|symbol| host.attribute_by_symbol(e, symbol))
        .flat_map(|inst| inst.modifiers().iter().filter(|m| m.id == id).map(|m| m.amount))
        .collect()
}

// ---------------------------------------------------------------------------
// Boost lifecycle: gain level I → upgrade to II → lose it
// ---------------------------------------------------------------------------

#[test]
fn boost_gain_upgrade_and_loss() {
    let mut host = InMemoryHost::modern();
    let world = host.add_world();
    let e = spawn_with_flight(&mut host, world, Spawn::living("happy_ghast"));
    let mut plugin = SpeedPlugin::default();
    plugin.enable(&mut host);

    // Level I
    let first = effect("SPEED", 0);
    host.set_effect(e, first.clone()).expect("effect");
    let outcome = plugin.on_effect_change(&mut host, &hooks::on_effect_added(e, first.clone()));
    assert_eq!(outcome, EffectOutcome::Applied { amount: 0.40 });
    assert_eq!(owned_amounts(&host, &plugin, e), vec![0.40]);

    // Level II replaces it
    let second = effect("SPEED", 1);
    host.set_effect(e, second.clone()).expect("effect");
    plugin.on_effect_change(&mut host, &hooks::on_effect_changed(e, first, second.clone()));
    assert_eq!(owned_amounts(&host, &plugin, e), vec![0.80]);

    let flying = host.attribute_by_symbol(e, "FLYING_SPEED").expect("flying");
    assert!((flying.value() - 0.05 * 1.8).abs() < 1e-12);

    // Removed
    host.remove_effect(e, &second.kind).expect("remove");
    let outcome = plugin.on_effect_change(&mut host, &hooks::on_effect_removed(e, second));
    assert_eq!(outcome, EffectOutcome::Cleared { removed: 1 });
    assert!(owned_amounts(&host, &plugin, e).is_empty());
}

#[test]
fn unrelated_kind_is_never_mutated() {
    let mut host = InMemoryHost::modern();
    let world = host.add_world();
    let pig = spawn_with_flight(&mut host, world, Spawn::living("pig"));
    let plain = spawn_with_flight(&mut host, world, Spawn::living("ghast"));
    let mut plugin = SpeedPlugin::default();
    plugin.enable(&mut host);

    for e in [pig, plain] {
        let events = [
            hooks::on_effect_added(e, effect("SPEED", 0)),
            hooks::on_effect_changed(e, effect("SPEED", 0), effect("SPEED", 1)),
            hooks::on_effect_added(e, effect("SLOWNESS", 2)),
            hooks::on_effect_removed(e, effect("SPEED", 1)),
        ];
        for event in &events {
            assert_eq!(
                plugin.on_effect_change(&mut host, event),
                EffectOutcome::Ignored(IgnoreReason::NotTarget)
            );
        }
        assert_eq!(host.modifier_count(e), 0);
    }
}

#[test]
fn marked_ghasts_are_targets() {
    let mut host = InMemoryHost::modern();
    let world = host.add_world();
    let tagged = spawn_with_flight(&mut host, world, Spawn::living("ghast").tagged("happy_ghast"));
    let named = spawn_with_flight(&mut host, world, Spawn::living("ghast").named("Happy Ghast #2"));
    let mut plugin = SpeedPlugin::default();
    plugin.enable(&mut host);

    for e in [tagged, named] {
        plugin.on_effect_change(&mut host, &hooks::on_effect_added(e, effect("SPEED", 2)));
        assert_eq!(owned_amounts(&host, &plugin, e), vec![0.40 * 3.0]);
    }
}

// ---------------------------------------------------------------------------
// Degraded hosts
// ---------------------------------------------------------------------------

#[test]
fn host_without_slowness_is_boost_only() {
    let mut host = InMemoryHost::with_symbols(&["FLYING_SPEED", "MOVEMENT_SPEED"], &["SPEED"]);
    let world = host.add_world();
    let e = spawn_with_flight(&mut host, world, Spawn::living("happy_ghast"));
    let mut plugin = SpeedPlugin::default();
    plugin.enable(&mut host);

    assert!(plugin.capabilities().expect("enabled").slow_effect.is_none());

    // Whatever name a mod uses for slowness, it was never resolved.
    for name in ["SLOW", "SLOWNESS"] {
        let outcome = plugin.on_effect_change(&mut host, &hooks::on_effect_added(e, effect(name, 1)));
        assert_eq!(outcome, EffectOutcome::Ignored(IgnoreReason::UnrelatedEffect));
    }
    assert_eq!(host.modifier_count(e), 0);

    let outcome = plugin.on_effect_change(&mut host, &hooks::on_effect_added(e, effect("SPEED", 1)));
    assert_eq!(outcome, EffectOutcome::Applied { amount: 0.80 });
}

#[test]
fn legacy_host_symbols_work_end_to_end() {
    let mut host = InMemoryHost::legacy();
    let world = host.add_world();
    let e = host.spawn(world, Spawn::living("happy_ghast"));
    host.add_attribute(e, "GENERIC_MOVEMENT_SPEED", 0.1).expect("attr");
    let mut plugin = SpeedPlugin::default();
    plugin.enable(&mut host);

    plugin.on_effect_change(&mut host, &hooks::on_effect_added(e, effect("SLOW", 0)));
    let movement = host.attribute_by_symbol(e, "GENERIC_MOVEMENT_SPEED").expect("movement");
    assert_eq!(movement.modifiers().len(), 1);
    assert_eq!(movement.modifiers()[0].amount, -0.40);
}

#[test]
fn host_without_attributes_stays_inert() {
    let mut host = InMemoryHost::with_symbols(&[], &["SPEED", "SLOWNESS"]);
    let world = host.add_world();
    let e = spawn_with_flight(&mut host, world, Spawn::living("happy_ghast"));
    let mut plugin = SpeedPlugin::default();
    plugin.enable(&mut host);

    let outcome = plugin.on_effect_change(&mut host, &hooks::on_effect_added(e, effect("SPEED", 0)));
    assert_eq!(outcome, EffectOutcome::Ignored(IgnoreReason::NoSpeedAttribute));
    let outcome = plugin.on_effect_change(&mut host, &hooks::on_effect_removed(e, effect("SPEED", 0)));
    assert_eq!(outcome, EffectOutcome::Cleared { removed: 0 });
    assert_eq!(host.modifier_count(e), 0);
}

// ---------------------------------------------------------------------------
// Startup refresh and shutdown sweep
// ---------------------------------------------------------------------------

#[test]
fn enable_refreshes_preexisting_ghasts() {
    let mut host = InMemoryHost::modern();
    let world = host.add_world();
    let boosted = spawn_with_flight(&mut host, world, Spawn::living("happy_ghast"));
    let slowed = spawn_with_flight(&mut host, world, Spawn::living("ghast").tagged("happy_ghast"));
    let idle = spawn_with_flight(&mut host, world, Spawn::living("happy_ghast"));
    let pig = spawn_with_flight(&mut host, world, Spawn::living("pig"));
    host.set_effect(boosted, effect("SPEED", 1)).expect("effect");
    host.set_effect(slowed, effect("SLOWNESS", 0)).expect("effect");
    host.set_effect(pig, effect("SPEED", 1)).expect("effect");

    let mut plugin = SpeedPlugin::default();
    assert_eq!(plugin.enable(&mut host), 2);

    assert_eq!(owned_amounts(&host, &plugin, boosted), vec![0.80]);
    assert_eq!(owned_amounts(&host, &plugin, slowed), vec![-0.40]);
    assert!(owned_amounts(&host, &plugin, idle).is_empty());
    assert_eq!(host.modifier_count(pig), 0);
}

#[test]
fn disable_sweeps_every_world() {
    let mut host = InMemoryHost::modern();
    let overworld = host.add_world();
    let nether = host.add_world();
    let a = spawn_with_flight(&mut host, overworld, Spawn::living("happy_ghast"));
    let b = spawn_with_flight(&mut host, overworld, Spawn::living("happy_ghast"));
    let c = spawn_with_flight(&mut host, nether, Spawn::living("ghast").named("happy ghast"));

    let mut plugin = SpeedPlugin::default();
    plugin.enable(&mut host);
    for (e, kind) in [(a, "SPEED"), (b, "SLOWNESS"), (c, "SPEED")] {
        plugin.on_effect_change(&mut host, &hooks::on_effect_added(e, effect(kind, 0)));
    }
    assert_eq!(host.loaded_entities().iter().map(|e| host.modifier_count(*e)).sum::<usize>(), 3);

    assert_eq!(plugin.disable(&mut host), 3);
    for e in [a, b, c] {
        assert_eq!(host.modifier_count(e), 0);
    }
    assert!(!plugin.is_enabled());
}

#[test]
fn despawned_entity_is_ignored() {
    let mut host = InMemoryHost::modern();
    let world = host.add_world();
    let e = spawn_with_flight(&mut host, world, Spawn::living("happy_ghast"));
    let mut plugin = SpeedPlugin::default();
    plugin.enable(&mut host);

    host.despawn(e);
    let outcome = plugin.on_effect_change(&mut host, &hooks::on_effect_added(e, effect("SPEED", 0)));
    assert_eq!(outcome, EffectOutcome::Ignored(IgnoreReason::UnknownEntity));
}

#[test]
fn clear_all_event_removes_modifier() {
    let mut host = InMemoryHost::modern();
    let world = host.add_world();
    let e = spawn_with_flight(&mut host, world, Spawn::living("happy_ghast"));
    let mut plugin = SpeedPlugin::default();
    plugin.enable(&mut host);

    plugin.on_effect_change(&mut host, &hooks::on_effect_added(e, effect("SLOWNESS", 3)));
    assert_eq!(owned_amounts(&host, &plugin, e), vec![-(0.40 * 4.0)]);

    let outcome = plugin.on_effect_change(&mut host, &hooks::on_effects_cleared(e, effect("SLOWNESS", 3)));
    assert_eq!(outcome, EffectOutcome::Cleared { removed: 1 });
}
