pub mod player;
pub mod players;
