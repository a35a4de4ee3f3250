use roster_shared::{PlayerId, PlayerInfoPacket};

/// Hands packets to the host's transport. Fire-and-forget: there is no
/// delivery acknowledgement.
pub trait PacketSender {
    fn send(&mut self, receiver: PlayerId, packet: PlayerInfoPacket);
}

/// Collects outgoing packets in send order until the host flushes them
#[derive(Clone, Debug, Default)]
pub struct OutboundQueue {
    packets: Vec<(PlayerId, PlayerInfoPacket)>,
}

impl OutboundQueue {
    pub fn new() -> Self {
        Self {
            packets: Vec::new(),
        }
    }

    pub fn packets(&self) -> &[(PlayerId, PlayerInfoPacket)] {
        &self.packets
    }

    /// Packets queued for one receiver, in send order
    pub fn packets_for(&self, receiver: &PlayerId) -> Vec<&PlayerInfoPacket> {
        self.packets
            .iter()
            .filter(|(to, _)| to == receiver)
            .map(|(_, packet)| packet)
            .collect()
    }

    pub fn take(&mut self) -> Vec<(PlayerId, PlayerInfoPacket)> {
        std::mem::take(&mut self.packets)
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }
}

impl PacketSender for OutboundQueue {
    fn send(&mut self, receiver: PlayerId, packet: PlayerInfoPacket) {
        self.packets.push((receiver, packet));
    }
}
