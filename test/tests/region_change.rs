use roster_server::RosterConfig;
use roster_shared::{PlayerInfoAction, PropertyKey};
use roster_test::{assert_display_seen, assert_nothing_sent, TestHarness, TestSource};

const MODERN: u8 = 47;

#[test]
fn entering_exempt_region_clears_once() {
    let source = TestSource::new();
    source.set_global_template(PropertyKey::TabPrefix, "%rank% ");
    source.set_value("%rank%", "[A]");
    let mut harness = TestHarness::with_source(TestHarness::arena_config(), source.clone());
    let alice = harness.join(1, "Alice", "lobby", MODERN);
    let bob = harness.join(2, "Bob", "lobby", MODERN);
    let old = harness.join(3, "Old", "lobby", 5);
    harness.deliver();

    harness.move_to(&alice, "arena");
    let sent = harness.deliver();
    assert_eq!(sent.len(), 2);
    for (receiver, packet) in &sent {
        assert_ne!(*receiver, old);
        assert_eq!(packet.action(), PlayerInfoAction::UpdateDisplayName);
        assert_eq!(packet.len(), 1);
        assert_eq!(packet.entry(&alice).unwrap().display_name, None);
    }
    assert_display_seen!(harness, bob, alice, None);

    // no formatting for her while she stays exempt
    source.set_player_value(alice, "%rank%", "[B]");
    harness.refresh_all();
    assert_eq!(harness.refresh(&alice, true), 0);
    assert_nothing_sent!(harness);
}

#[test]
fn moving_between_exempt_regions_sends_nothing() {
    let config = RosterConfig {
        disabled_regions: vec!["arena*".to_string()],
        ..RosterConfig::default()
    };
    let mut harness = TestHarness::new(config);
    let alice = harness.join(1, "Alice", "arena_1", MODERN);
    harness.join(2, "Bob", "lobby", MODERN);
    harness.deliver();

    harness.move_to(&alice, "arena_2");
    assert_nothing_sent!(harness);
}

#[test]
fn leaving_exempt_region_restores_formatting() {
    let source = TestSource::new();
    source.set_global_template(PropertyKey::TabSuffix, " <3");
    let mut harness = TestHarness::with_source(TestHarness::arena_config(), source);
    let alice = harness.join(1, "Alice", "arena", MODERN);
    let bob = harness.join(2, "Bob", "lobby", MODERN);
    harness.deliver();
    assert_eq!(harness.display_seen(&bob, &alice), Some(None));

    harness.move_to(&alice, "lobby");
    harness.deliver();
    assert_display_seen!(harness, bob, alice, Some("Alice <3"));
    assert_display_seen!(harness, alice, alice, Some("Alice <3"));
}

#[test]
fn moving_between_eligible_regions_repushes() {
    let source = TestSource::new();
    source.set_global_template(PropertyKey::TabPrefix, "[%region%] ");
    let mut harness = TestHarness::with_source(TestHarness::arena_config(), source.clone());
    let alice = harness.join(1, "Alice", "lobby", MODERN);
    source.set_player_value(alice, "%region%", "lobby");
    harness.refresh(&alice, true);
    harness.deliver();
    assert_display_seen!(harness, alice, alice, Some("[lobby] Alice"));

    source.set_player_value(alice, "%region%", "hub");
    harness.move_to(&alice, "hub");
    harness.deliver();
    assert_display_seen!(harness, alice, alice, Some("[hub] Alice"));
}
