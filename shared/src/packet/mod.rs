pub mod outgoing_packet;
pub mod player_info;
