use roster_server::{Alignment, RosterCollaborators, RosterConfig, RosterServerError};
use roster_shared::{PlayerId, PropertyKey, RegistryError};
use roster_test::{assert_display_seen, assert_nothing_sent, TestAlignment, TestHarness, TestSource};

const MODERN: u8 = 47;

#[test]
fn unchanged_properties_send_nothing() {
    let mut harness = TestHarness::new(RosterConfig::default());
    let alice = harness.join(1, "Alice", "lobby", MODERN);
    harness.join(2, "Bob", "lobby", MODERN);
    harness.deliver();

    assert_eq!(harness.refresh(&alice, false), 0);
    harness.refresh_all();
    assert_nothing_sent!(harness);
}

#[test]
fn placeholder_change_is_pushed_to_every_viewer() {
    let source = TestSource::new();
    source.set_global_template(PropertyKey::TabPrefix, "%rank% ");
    source.set_value("%rank%", "[Member]");

    let mut harness = TestHarness::with_source(RosterConfig::default(), source.clone());
    let alice = harness.join(1, "Alice", "lobby", MODERN);
    let bob = harness.join(2, "Bob", "lobby", MODERN);
    harness.deliver();
    assert_display_seen!(harness, bob, alice, Some("[Member] Alice"));

    source.set_player_value(alice, "%rank%", "[Admin]");
    assert_eq!(harness.refresh(&alice, false), 2);
    assert_eq!(harness.refresh(&bob, false), 0);
    harness.deliver();

    assert_display_seen!(harness, alice, alice, Some("[Admin] Alice"));
    assert_display_seen!(harness, bob, alice, Some("[Admin] Alice"));
    assert_display_seen!(harness, alice, bob, Some("[Member] Bob"));
}

#[test]
fn forced_refresh_reloads_templates() {
    let source = TestSource::new();
    let mut harness = TestHarness::with_source(RosterConfig::default(), source.clone());
    let alice = harness.join(1, "Alice", "lobby", MODERN);
    harness.deliver();

    source.set_template(alice, PropertyKey::TabSuffix, " [AFK]");
    // the raw template is only re-read on a forced refresh
    assert_eq!(harness.refresh(&alice, false), 0);
    assert_eq!(harness.refresh(&alice, true), 1);
    harness.deliver();
    assert_display_seen!(harness, alice, alice, Some("Alice [AFK]"));
}

#[test]
fn forced_refresh_always_sends() {
    let mut harness = TestHarness::new(RosterConfig::default());
    let alice = harness.join(1, "Alice", "lobby", MODERN);
    harness.join(2, "Bob", "lobby", MODERN);
    harness.join(3, "Old", "lobby", 5);
    harness.deliver();

    // two capable viewers, the legacy one is skipped
    assert_eq!(harness.refresh(&alice, true), 2);
}

#[test]
fn exempt_player_is_never_refreshed() {
    let source = TestSource::new();
    source.set_global_template(PropertyKey::TabPrefix, "%rank% ");
    source.set_value("%rank%", "[A]");
    let mut harness = TestHarness::with_source(TestHarness::arena_config(), source.clone());
    let bob = harness.join(2, "Bob", "arena", MODERN);
    harness.join(1, "Alice", "lobby", MODERN);
    harness.deliver();

    source.set_value("%rank%", "[B]");
    assert_eq!(harness.refresh(&bob, false), 0);
    assert_eq!(harness.refresh(&bob, true), 0);
}

#[test]
fn unknown_player_refresh_fails_softly() {
    let mut harness = TestHarness::new(RosterConfig::default());
    let ghost = PlayerId::from_u64(404);

    let result = harness
        .server
        .try_refresh(&mut harness.players, &mut harness.outbound, &ghost, true);
    assert_eq!(
        result,
        Err(RosterServerError::Registry(RegistryError::UnknownPlayer { player: ghost }))
    );

    harness
        .server
        .refresh(&mut harness.players, &mut harness.outbound, &ghost, true);
    assert_nothing_sent!(harness);
}

#[test]
fn relational_text_differs_per_viewer() {
    let source = TestSource::new();
    source.set_global_template(PropertyKey::TabSuffix, " (seen by %rel_viewer%)");
    let mut harness = TestHarness::with_source(RosterConfig::default(), source);
    let alice = harness.join(1, "Alice", "lobby", MODERN);
    let bob = harness.join(2, "Bob", "lobby", MODERN);
    harness.deliver();

    assert_display_seen!(harness, alice, bob, Some("Bob (seen by Alice)"));
    assert_display_seen!(harness, bob, bob, Some("Bob (seen by Bob)"));
}

#[test]
fn alignment_shapes_pushed_values() {
    let source = TestSource::new();
    source.set_global_template(PropertyKey::TabSuffix, "*");
    let alignment = TestAlignment::new(8);
    let collaborators = RosterCollaborators {
        alignment: Alignment::transform(alignment.clone()),
        nametags_active: false,
    };
    let mut harness =
        TestHarness::with_collaborators(RosterConfig::default(), source, collaborators);
    let alice = harness.join(1, "Alice", "lobby", MODERN);
    let bob = harness.join(2, "Bob", "lobby", MODERN);
    harness.deliver();

    assert_display_seen!(harness, bob, alice, Some("Alice   |*"));
    assert_display_seen!(harness, alice, bob, Some("Bob     |*"));
    assert_eq!(harness.format_for(&alice, &bob), Some("Alice   |*".to_string()));

    // refresh pushes go through the leader-tracking path, batches do not
    let leaders = alignment.leader_updates();
    assert_eq!(leaders, vec![alice, bob, bob]);
}

#[test]
fn load_formats_players_connected_before_the_feature() {
    let mut harness = TestHarness::new(TestHarness::arena_config());
    let alice = harness.connect(1, "Alice", "lobby", MODERN);
    let bob = harness.connect(2, "Bob", "arena", MODERN);
    assert_eq!(harness.format_for(&alice, &bob), None);

    harness.load();
    harness.deliver();

    assert_display_seen!(harness, bob, alice, Some("Alice"));
    assert_eq!(harness.display_seen(&alice, &bob), None);
    assert!(harness.players.get(&bob).unwrap().has_loaded_properties());
}

#[test]
fn every_changed_property_is_picked_up_in_one_refresh() {
    let source = TestSource::new();
    source.set_global_template(PropertyKey::TabPrefix, "%rank% ");
    source.set_global_template(PropertyKey::TabSuffix, " %tag%");
    source.set_value("%rank%", "[Member]");
    source.set_value("%tag%", "(new)");

    let mut harness = TestHarness::with_source(RosterConfig::default(), source.clone());
    let alice = harness.join(1, "Alice", "lobby", MODERN);
    harness.deliver();
    assert_display_seen!(harness, alice, alice, Some("[Member] Alice (new)"));

    // prefix and suffix change together; both caches must be refreshed
    source.set_player_value(alice, "%rank%", "[Admin]");
    source.set_player_value(alice, "%tag%", "(afk)");
    assert_eq!(harness.refresh(&alice, false), 1);
    harness.deliver();
    assert_display_seen!(harness, alice, alice, Some("[Admin] Alice (afk)"));

    assert_eq!(harness.refresh(&alice, false), 0);
    assert_nothing_sent!(harness);
}
