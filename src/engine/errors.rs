use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{GamePhase, Number, Pattern, PlayerId, SessionGeneration};

/// Входящие действия сессии (для сообщений об отказе).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SessionAction {
    SetupSession,
    BeginRound,
    PauseRound,
    ResumeRound,
    CallNumber,
    MarkNumber,
    ClaimPattern,
}

impl SessionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::SetupSession => "setupSession",
            SessionAction::BeginRound => "beginRound",
            SessionAction::PauseRound => "pauseRound",
            SessionAction::ResumeRound => "resumeRound",
            SessionAction::CallNumber => "callNextNumber",
            SessionAction::MarkNumber => "markNumber",
            SessionAction::ClaimPattern => "claimPattern",
        }
    }
}

impl core::fmt::Display for SessionAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Отказы сессии.
///
/// Ни один из них не фатален: состояние сессии при отказе не меняется.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Действие {action} недоступно в фазе {phase}")]
    WrongPhase {
        action: SessionAction,
        phase: GamePhase,
    },

    #[error("Игрок {0} не найден")]
    PlayerNotFound(PlayerId),

    #[error("Номер {0} вне диапазона 1..=90")]
    InvalidNumber(Number),

    #[error("Номер {0} ещё не вызывался")]
    NumberNotCalled(Number),

    #[error("Номера {number} нет на билете игрока {player_id}")]
    NumberNotOnTicket { player_id: PlayerId, number: Number },

    #[error("Игрок {player_id} уже отметил номер {number}")]
    AlreadyMarked { player_id: PlayerId, number: Number },

    #[error("Паттерн {0} уже выигран в этой сессии")]
    PatternAlreadyClaimed(Pattern),

    #[error("Игрок {player_id} дисквалифицирован по паттерну {pattern}")]
    DisqualifiedForPattern { player_id: PlayerId, pattern: Pattern },

    #[error("Неизвестный паттерн: {0:?}")]
    UnknownPattern(String),

    #[error("Устаревший показ номера (поколение {reveal}, сессия {current})")]
    StaleReveal {
        reveal: SessionGeneration,
        current: SessionGeneration,
    },

    #[error("Показ номера опоздал: начат после {expected} вызовов, сейчас вызвано {actual}")]
    RevealOvertaken { expected: usize, actual: usize },
}

impl SessionError {
    /// Машиночитаемый код причины отказа.
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::WrongPhase { .. } => "wrong_phase",
            SessionError::PlayerNotFound(_) => "player_not_found",
            SessionError::InvalidNumber(_) => "invalid_number",
            SessionError::NumberNotCalled(_) => "number_not_called",
            SessionError::NumberNotOnTicket { .. } => "number_not_on_ticket",
            SessionError::AlreadyMarked { .. } => "already_marked",
            SessionError::PatternAlreadyClaimed(_) => "pattern_already_claimed",
            SessionError::DisqualifiedForPattern { .. } => "disqualified_for_pattern",
            SessionError::UnknownPattern(_) => "unknown_pattern",
            SessionError::StaleReveal { .. } => "stale_reveal",
            SessionError::RevealOvertaken { .. } => "reveal_overtaken",
        }
    }
}
