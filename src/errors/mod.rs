use thiserror::Error;

use crate::swiss::types::{MatchId, PlayerId, TournamentId};

pub type TournamentResult<T> = Result<T, TournamentError>;

/// Failures surfaced by the tournament service and the Swiss core.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// The store could not be reached or a query against it failed.
    #[error("store unavailable: {0:#}")]
    StoreUnavailable(#[from] anyhow::Error),

    /// A recorded match names a player that is not registered.
    #[error("match {match_id} references unknown player {player_id}")]
    DanglingReference { match_id: MatchId, player_id: PlayerId },

    #[error("cannot pair an uneven number of players ({0})")]
    UnevenPlayerCount(usize),

    #[error("invalid match outcome: {0:?} (expected player1, player2 or tie)")]
    InvalidOutcome(String),

    #[error("player {0} is not registered")]
    UnknownPlayer(PlayerId),

    #[error("tournament {0} does not exist")]
    UnknownTournament(TournamentId),

    #[error("player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    #[error("player name must not be empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anyhow_errors_become_store_unavailable() {
        fn failing() -> TournamentResult<()> {
            let store: anyhow::Result<()> = Err(anyhow::anyhow!("disk I/O error"));
            store?;
            Ok(())
        }

        let err = failing().unwrap_err();
        assert!(matches!(err, TournamentError::StoreUnavailable(_)));
        assert!(err.to_string().contains("disk I/O error"));
    }

    #[test]
    fn test_precondition_messages() {
        let err = TournamentError::UnevenPlayerCount(5);
        assert_eq!(err.to_string(), "cannot pair an uneven number of players (5)");

        let err = TournamentError::DanglingReference { match_id: 7, player_id: 42 };
        assert_eq!(err.to_string(), "match 7 references unknown player 42");
    }
}
