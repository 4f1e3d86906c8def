pub mod tournament;

pub use tournament::{HistoryLine, PlayerHistory, TournamentInfo, TournamentService};
