use serde::{Deserialize, Serialize};

use crate::domain::{Number, PlayerId};
use crate::engine::{LeaderboardEntry, Session};
use crate::infra::mapping::{map_player_to_dto, map_session_to_dto};

use super::dto::{PlayerViewDto, SessionViewDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "query")]
pub enum Query {
    /// Полный снапшот сессии.
    GetSession,

    /// Один игрок.
    #[serde(rename_all = "camelCase")]
    GetPlayer { player_id: PlayerId },

    /// Таблица лидеров.
    Leaderboard,

    /// Вызванные номера в порядке вызова.
    CalledNumbers,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "type", content = "data")]
pub enum QueryResponse {
    Session(SessionViewDto),
    Player(PlayerViewDto),
    Leaderboard(Vec<LeaderboardEntry>),
    CalledNumbers(Vec<Number>),
}

/// Выполнить запрос. Сессия не меняется.
pub fn run_query(session: &Session, query: &Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetSession => Ok(QueryResponse::Session(map_session_to_dto(session))),
        Query::GetPlayer { player_id } => {
            let player = session
                .player(*player_id)
                .ok_or(ApiError::PlayerNotFound {
                    player_id: *player_id,
                })?;
            Ok(QueryResponse::Player(map_player_to_dto(
                player,
                session.ledger(),
            )))
        }
        Query::Leaderboard => Ok(QueryResponse::Leaderboard(session.leaderboard())),
        Query::CalledNumbers => Ok(QueryResponse::CalledNumbers(
            session.pool().called().to_vec(),
        )),
    }
}
