use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::engine::SessionError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest { message: String },

    /// Игрок не найден в сессии.
    PlayerNotFound { player_id: PlayerId },

    /// Команда отклонена движком: состояние не изменилось.
    Rejected { code: String, message: String },
}

impl ApiError {
    /// Машиночитаемый код.
    pub fn code(&self) -> &str {
        match self {
            ApiError::BadRequest { .. } => "bad_request",
            ApiError::PlayerNotFound { .. } => "player_not_found",
            ApiError::Rejected { code, .. } => code.as_str(),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::PlayerNotFound(player_id) => ApiError::PlayerNotFound { player_id },
            other => ApiError::Rejected {
                code: other.code().to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest {
            message: err.to_string(),
        }
    }
}
