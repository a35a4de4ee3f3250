use crate::PlayerInfoPacket;

/// A packet on its way to one client, handed through the interception
/// stage by value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutgoingPacket {
    PlayerInfo(PlayerInfoPacket),
    /// Any packet kind the roster engine does not inspect
    Other { packet_id: u8, payload: Vec<u8> },
}

impl OutgoingPacket {
    pub fn as_player_info(&self) -> Option<&PlayerInfoPacket> {
        match self {
            OutgoingPacket::PlayerInfo(packet) => Some(packet),
            OutgoingPacket::Other { .. } => None,
        }
    }

    pub fn into_player_info(self) -> Option<PlayerInfoPacket> {
        match self {
            OutgoingPacket::PlayerInfo(packet) => Some(packet),
            OutgoingPacket::Other { .. } => None,
        }
    }
}

impl From<PlayerInfoPacket> for OutgoingPacket {
    fn from(packet: PlayerInfoPacket) -> Self {
        OutgoingPacket::PlayerInfo(packet)
    }
}
