use log::warn;

use roster_shared::{
    Player, PlayerInfoAction, PlayerInfoPacket, Players, PropertySource, RegionDenylist,
};

use crate::{events::RosterEvents, FormatComposer, OverrideAttemptEvent};

/// Everything the guard reads while rewriting one packet
pub(crate) struct GuardContext<'a> {
    pub players: &'a Players,
    pub denylist: &'a RegionDenylist,
    pub composer: &'a FormatComposer,
    pub source: &'a dyn PropertySource,
}

/// Rewrites presence-list packets right before they are sent: every
/// managed entry gets the composed display value for the receiving
/// viewer, and renamed `AddPlayer` entries get their canonical name back.
pub struct OverrideGuard {
    anti_override_names: bool,
    nametags_active: bool,
}

impl OverrideGuard {
    pub fn new(anti_override_names: bool, nametags_active: bool) -> Self {
        Self {
            anti_override_names,
            nametags_active,
        }
    }

    /// True if renamed `AddPlayer` entries are reverted
    pub fn reverts_names(&self) -> bool {
        self.anti_override_names && self.nametags_active
    }

    pub(crate) fn inspect(
        &self,
        context: &GuardContext<'_>,
        viewer: &Player,
        mut packet: PlayerInfoPacket,
        events: &mut RosterEvents,
    ) -> PlayerInfoPacket {
        let action = packet.action();
        if !action.carries_display_name() {
            return packet;
        }

        for entry in packet.entries_mut() {
            // not ours: a non-player entry or an identity that already left
            let Some(subject) = context.players.get(&entry.id) else {
                continue;
            };
            if context.denylist.is_denied(subject.region()) {
                continue;
            }

            if let Some(display_name) = context.composer.compose(context.source, subject, viewer) {
                entry.display_name = Some(display_name);
            }

            if action != PlayerInfoAction::AddPlayer || !self.reverts_names() {
                continue;
            }
            let Some(label) = entry.name.as_deref() else {
                continue;
            };
            if label == subject.name() {
                continue;
            }

            warn!(
                "A plugin tried to change name of {} to \"{}\" for viewer {}",
                subject.name(),
                label,
                viewer.name()
            );
            events.push_override_attempt(OverrideAttemptEvent {
                player: subject.id(),
                player_name: subject.name().to_owned(),
                attempted_name: label.to_owned(),
                viewer: viewer.id(),
                viewer_name: viewer.name().to_owned(),
            });
            entry.name = Some(subject.name().to_owned());
        }

        packet
    }
}
