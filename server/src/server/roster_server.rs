use std::collections::{HashMap, HashSet};

use log::{debug, info};

use roster_shared::{
    OutgoingPacket, Player, PlayerId, PlayerInfoAction, PlayerInfoData, PlayerInfoPacket,
    Players, PropertyKey, PropertySource, RegionDenylist,
};

use crate::{
    events::RosterEvents,
    override_guard::{GuardContext, OverrideGuard},
    FeatureState, FormatComposer, PacketSender, RosterCollaborators, RosterConfig,
    RosterServerError, TaskKey, TaskQueue,
};

/// Work deferred to a later tick, carrying only identities so it stays
/// valid whatever happens in between
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelayedTask {
    /// Re-announce a joiner's names in case the host's own `AddPlayer`
    /// packet overtook the first announcement
    JoinResend { player: PlayerId },
}

/// Keeps presence-list display names of every player in sync across all
/// viewers
pub struct RosterServer {
    pub(crate) config: RosterConfig,
    pub(crate) denylist: RegionDenylist,
    pub(crate) source: Box<dyn PropertySource>,
    pub(crate) composer: FormatComposer,
    pub(crate) guard: Option<OverrideGuard>,
    pub(crate) state: FeatureState,
    pub(crate) tasks: TaskQueue<DelayedTask>,
    pub(crate) pending_resends: HashMap<PlayerId, TaskKey>,
    events: RosterEvents,
    pub(crate) used_placeholders: HashSet<String>,
}

impl RosterServer {
    /// Create a new RosterServer
    pub fn new<S: PropertySource + 'static>(
        config: RosterConfig,
        source: S,
        collaborators: RosterCollaborators,
    ) -> Self {
        let denylist = RegionDenylist::new(&config.disabled_regions);
        let anti_override_names = config.anti_override.usernames && config.packet_injection;
        let anti_override_tablist = config.anti_override.tablist_names && config.packet_injection;

        // without the guard nothing rewrites packets sent by other code
        let guard = anti_override_tablist
            .then(|| OverrideGuard::new(anti_override_names, collaborators.nametags_active));

        debug!(
            "Loaded roster names with parameters disabled_regions={:?}, anti_override_tablist={}, anti_override_names={}, alignment={}",
            denylist.patterns(),
            anti_override_tablist,
            anti_override_names,
            collaborators.alignment.is_enabled()
        );

        let mut server = Self {
            config,
            denylist,
            source: Box::new(source),
            composer: FormatComposer::new(collaborators.alignment),
            guard,
            state: FeatureState::Active,
            tasks: TaskQueue::new(),
            pending_resends: HashMap::new(),
            events: RosterEvents::new(),
            used_placeholders: HashSet::new(),
        };
        server.used_placeholders = server.global_used_placeholders();
        server
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn denylist(&self) -> &RegionDenylist {
        &self.denylist
    }

    pub fn state(&self) -> FeatureState {
        self.state
    }

    /// True if outbound presence-list packets are rewritten on send
    pub fn is_guard_enabled(&self) -> bool {
        self.guard.is_some()
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Drains the diagnostics gathered since the last call
    pub fn take_events(&mut self) -> RosterEvents {
        self.events.take()
    }

    pub(crate) fn supports_display_names(&self, viewer: &Player) -> bool {
        viewer.version() >= self.config.min_display_name_version
    }

    /// Loads all three name properties from their configured templates
    pub(crate) fn load_properties(source: &dyn PropertySource, player: &mut Player) -> bool {
        let canonical_name = player.name().to_owned();
        let prefix = player.load_property_from_config(source, PropertyKey::TabPrefix, "");
        let name =
            player.load_property_from_config(source, PropertyKey::CustomTabName, &canonical_name);
        let suffix = player.load_property_from_config(source, PropertyKey::TabSuffix, "");
        prefix || name || suffix
    }

    // Formatting

    /// Display value of `subject` as `viewer` should see it, or None if
    /// either is unknown or the subject's properties are not loaded
    pub fn format_for(
        &self,
        players: &Players,
        subject: &PlayerId,
        viewer: &PlayerId,
    ) -> Option<String> {
        self.try_format_for(players, subject, viewer).ok()
    }

    pub fn try_format_for(
        &self,
        players: &Players,
        subject: &PlayerId,
        viewer: &PlayerId,
    ) -> Result<String, RosterServerError> {
        let subject = players.try_get(subject)?;
        let viewer = players.try_get(viewer)?;
        Ok(self.composer.try_compose(self.source.as_ref(), subject, viewer)?)
    }

    // Refresh

    /// Pushes `player`'s display value to every capable viewer. Forced
    /// refreshes reload the properties from config and always push;
    /// otherwise the properties are re-resolved and values are pushed only
    /// if one of them changed.
    pub fn refresh(
        &mut self,
        players: &mut Players,
        sender: &mut dyn PacketSender,
        player_id: &PlayerId,
        force: bool,
    ) {
        if let Err(err) = self.try_refresh(players, sender, player_id, force) {
            info!("skipping refresh of {}: {}", player_id, err);
        }
    }

    /// Like [`refresh`](Self::refresh), returning how many packets were sent
    pub fn try_refresh(
        &mut self,
        players: &mut Players,
        sender: &mut dyn PacketSender,
        player_id: &PlayerId,
        force: bool,
    ) -> Result<usize, RosterServerError> {
        if self.state.is_disabling() {
            return Ok(0);
        }

        let player = players.try_get_mut(player_id)?;
        if self.denylist.is_denied(player.region()) {
            return Ok(0);
        }

        let changed = if force {
            Self::load_properties(self.source.as_ref(), player);
            true
        } else {
            // every update refreshes its property's cache, so none may be skipped
            let source = self.source.as_ref();
            let prefix = player.update_property(source, PropertyKey::TabPrefix);
            let name = player.update_property(source, PropertyKey::CustomTabName);
            let suffix = player.update_property(source, PropertyKey::TabSuffix);
            prefix || name || suffix
        };
        if !changed {
            return Ok(0);
        }

        let subject = players.try_get(player_id)?;
        let mut sent = 0;
        for viewer in players.iter() {
            if !self.supports_display_names(viewer) {
                continue;
            }
            let Some(display_name) =
                self.composer
                    .compose_and_update_leader(self.source.as_ref(), subject, viewer)
            else {
                continue;
            };
            sender.send(
                viewer.id(),
                PlayerInfoPacket::single(
                    PlayerInfoAction::UpdateDisplayName,
                    PlayerInfoData::display_name(subject.id(), Some(display_name)),
                ),
            );
            sent += 1;
        }

        Ok(sent)
    }

    /// Periodic non-forced refresh of every connected player
    pub fn refresh_all(&mut self, players: &mut Players, sender: &mut dyn PacketSender) {
        if self.state.is_disabling() {
            return;
        }
        for player_id in players.ids() {
            self.refresh(players, sender, &player_id, false);
        }
    }

    // Interception

    /// Runs on every outbound packet right before it is sent. Packets other
    /// than presence-list updates come back untouched.
    pub fn on_packet_send(
        &mut self,
        players: &Players,
        receiver: &PlayerId,
        packet: OutgoingPacket,
    ) -> OutgoingPacket {
        match packet {
            OutgoingPacket::PlayerInfo(info) => {
                OutgoingPacket::PlayerInfo(self.on_player_info_send(players, receiver, info))
            }
            other => other,
        }
    }

    pub fn on_player_info_send(
        &mut self,
        players: &Players,
        receiver: &PlayerId,
        packet: PlayerInfoPacket,
    ) -> PlayerInfoPacket {
        if self.state.is_disabling() {
            return packet;
        }
        let Some(guard) = &self.guard else {
            return packet;
        };
        let Some(viewer) = players.get(receiver) else {
            return packet;
        };

        let context = GuardContext {
            players,
            denylist: &self.denylist,
            composer: &self.composer,
            source: self.source.as_ref(),
        };
        guard.inspect(&context, viewer, packet, &mut self.events)
    }

    // Placeholders

    /// Recomputes the placeholder identifiers referenced by the global
    /// templates and by every connected player's current templates
    pub fn refresh_used_placeholders(&mut self, players: &Players) {
        self.used_placeholders = self.collect_used_placeholders(players, None);
    }

    /// Placeholder identifiers in use, sorted
    pub fn used_placeholders(&self) -> Vec<String> {
        let mut used: Vec<String> = self.used_placeholders.iter().cloned().collect();
        used.sort();
        used
    }

    pub fn is_placeholder_used(&self, identifier: &str) -> bool {
        self.used_placeholders.contains(identifier)
    }

    pub(crate) fn track_used_placeholders(&mut self, player: &Player) {
        let used = self.player_used_placeholders(player);
        self.used_placeholders.extend(used);
    }

    /// Identifiers of the global templates plus those of every player but
    /// `leaving`
    pub(crate) fn collect_used_placeholders(
        &self,
        players: &Players,
        leaving: Option<&PlayerId>,
    ) -> HashSet<String> {
        let mut used = self.global_used_placeholders();
        for player in players.iter() {
            if Some(&player.id()) == leaving {
                continue;
            }
            used.extend(self.player_used_placeholders(player));
        }
        used
    }

    fn global_used_placeholders(&self) -> HashSet<String> {
        let templates: Vec<String> = PropertyKey::ALL
            .iter()
            .flat_map(|key| self.source.global_templates(*key))
            .collect();
        let templates: Vec<&str> = templates.iter().map(String::as_str).collect();
        self.source.used_identifiers_recursive(&templates)
    }

    fn player_used_placeholders(&self, player: &Player) -> HashSet<String> {
        let templates: Vec<&str> = PropertyKey::ALL
            .iter()
            .filter_map(|key| player.property(*key))
            .map(|property| property.raw_value())
            .collect();
        self.source.used_identifiers_recursive(&templates)
    }
}
