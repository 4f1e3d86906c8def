pub mod pairing;
pub mod standings;
pub mod types;

pub use pairing::swiss_pairings;
pub use standings::compute_standings;
pub use types::{MatchResult, Outcome, Pairing, Player, PlayerId, SeatResult, StandingsEntry};
