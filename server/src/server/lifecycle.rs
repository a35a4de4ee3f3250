use log::{debug, info, warn};

use roster_shared::{
    Player, PlayerId, PlayerInfoAction, PlayerInfoData, PlayerInfoPacket, Players,
};

use crate::{DelayedTask, FeatureState, PacketSender, RosterServer};

impl RosterServer {
    /// Feature (re)load: formats every connected player for every viewer
    pub fn on_load(&mut self, players: &mut Players, sender: &mut dyn PacketSender) {
        if self.state.is_disabling() {
            info!("re-enabling roster names");
            self.state = FeatureState::Active;
        }

        for player_id in players.ids() {
            if let Some(player) = players.get_mut(&player_id) {
                // exempt players still need well-formed properties for later queries
                if self.denylist.is_denied(player.region()) {
                    Self::load_properties(self.source.as_ref(), player);
                }
            }
            self.refresh(players, sender, &player_id, true);
        }

        self.refresh_used_placeholders(players);
    }

    /// A player joined: announce its name to everyone, and everyone's name
    /// to it. When the packet guard is off, the announcement is repeated
    /// after `join_resend_delay` ticks because the host's own `AddPlayer`
    /// packet for the joiner may go out after ours.
    pub fn on_join(
        &mut self,
        players: &mut Players,
        sender: &mut dyn PacketSender,
        player_id: &PlayerId,
    ) {
        if self.state.is_disabling() {
            debug!("ignoring join of {} while disabling", player_id);
            return;
        }
        let Some(player) = players.get_mut(player_id) else {
            warn!("join of unknown player {}", player_id);
            return;
        };
        if self.denylist.is_denied(player.region()) {
            Self::load_properties(self.source.as_ref(), player);
        }

        self.announce_join(players, sender, player_id);

        if let Some(player) = players.get(player_id) {
            self.track_used_placeholders(player);
        }

        if self.guard.is_none() {
            let task = DelayedTask::JoinResend { player: *player_id };
            let key = self.tasks.schedule(self.config.join_resend_delay, task);
            if let Some(previous) = self.pending_resends.insert(*player_id, key) {
                self.tasks.cancel(&previous);
            }
        }
    }

    /// A player disconnected: its pending join resend is no longer needed,
    /// and placeholders only its templates referenced are dropped. May run
    /// before or after the host removes the player from `players`.
    pub fn on_quit(&mut self, players: &Players, player_id: &PlayerId) {
        if let Some(key) = self.pending_resends.remove(player_id) {
            self.tasks.cancel(&key);
        }
        self.used_placeholders = self.collect_used_placeholders(players, Some(player_id));
    }

    /// A player moved from region `from` to `to`. The host updates the
    /// player's region before calling this.
    pub fn on_region_change(
        &mut self,
        players: &mut Players,
        sender: &mut dyn PacketSender,
        player_id: &PlayerId,
        from: &str,
        to: &str,
    ) {
        if self.state.is_disabling() {
            return;
        }

        if self.denylist.is_denied(to) {
            if self.denylist.is_eligible(from) {
                self.broadcast_cleared(players, sender, vec![*player_id]);
            }
        } else {
            self.refresh(players, sender, player_id, true);
        }
    }

    /// Feature shutdown: stops rewriting and restores the identity labels of
    /// every player that had a rewritten display value
    pub fn on_unload(&mut self, players: &Players, sender: &mut dyn PacketSender) {
        if self.state.is_disabling() {
            return;
        }
        self.state = FeatureState::Disabling;

        let dropped = self.tasks.clear();
        self.pending_resends.clear();
        if dropped > 0 {
            debug!("dropped {} pending join resends on unload", dropped);
        }

        let restored: Vec<PlayerId> = players
            .iter()
            .filter(|player| self.denylist.is_eligible(player.region()))
            .map(Player::id)
            .collect();
        self.broadcast_cleared(players, sender, restored);
    }

    /// Advances delayed work by one tick
    pub fn tick(&mut self, players: &mut Players, sender: &mut dyn PacketSender) {
        for task in self.tasks.advance() {
            match task {
                DelayedTask::JoinResend { player } => {
                    self.run_join_resend(players, sender, &player)
                }
            }
        }
    }

    fn run_join_resend(
        &mut self,
        players: &mut Players,
        sender: &mut dyn PacketSender,
        player_id: &PlayerId,
    ) {
        self.pending_resends.remove(player_id);
        if self.state.is_disabling() {
            debug!("dropping stale join resend for {}", player_id);
            return;
        }
        if !players.contains(player_id) {
            debug!("player {} left before its join resend", player_id);
            return;
        }
        self.announce_join(players, sender, player_id);
    }

    fn announce_join(
        &mut self,
        players: &mut Players,
        sender: &mut dyn PacketSender,
        joined_id: &PlayerId,
    ) {
        self.refresh(players, sender, joined_id, true);

        let Some(joined) = players.get(joined_id) else {
            return;
        };
        if !self.supports_display_names(joined) {
            return;
        }

        let mut packet = PlayerInfoPacket::new(PlayerInfoAction::UpdateDisplayName, Vec::new());
        for other in players.iter() {
            if other.id() == joined.id() {
                continue;
            }
            if self.denylist.is_denied(other.region()) {
                packet.push(PlayerInfoData::cleared(other.id()));
                continue;
            }
            match self.composer.compose(self.source.as_ref(), other, joined) {
                Some(display_name) => {
                    packet.push(PlayerInfoData::display_name(other.id(), Some(display_name)))
                }
                None => debug!(
                    "not showing {} to {} yet, properties not loaded",
                    other.name(),
                    joined.name()
                ),
            }
        }

        if !packet.is_empty() {
            sender.send(joined.id(), packet);
        }
    }

    /// Sends one packet clearing the display values of `cleared` to every
    /// capable viewer
    fn broadcast_cleared(
        &self,
        players: &Players,
        sender: &mut dyn PacketSender,
        cleared: Vec<PlayerId>,
    ) {
        if cleared.is_empty() {
            return;
        }
        let entries = cleared.into_iter().map(PlayerInfoData::cleared).collect();
        let packet = PlayerInfoPacket::new(PlayerInfoAction::UpdateDisplayName, entries);

        for viewer in players.iter() {
            if !self.supports_display_names(viewer) {
                continue;
            }
            sender.send(viewer.id(), packet.clone());
        }
    }
}
