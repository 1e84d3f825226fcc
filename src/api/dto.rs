use serde::{Deserialize, Serialize};

use crate::domain::{GamePhase, Number, Pattern, PlayerId, Points, SessionGeneration, Ticket};
use crate::engine::{CallOutcome, ClaimOutcome, SessionEvent, Winner};

/// DTO игрока: билет, отметки, паттерны.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub player_id: PlayerId,
    pub name: String,
    pub ticket: Ticket,
    /// Отмеченные номера по возрастанию.
    pub marked: Vec<Number>,
    pub won_patterns: Vec<Pattern>,
    pub points: Points,
    pub disqualified: bool,
    pub disqualified_patterns: Vec<Pattern>,
    /// Что игрок может заявить прямо сейчас (подсветка в UI).
    pub claimable_patterns: Vec<Pattern>,
}

/// DTO всей сессии (read-only снапшот).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub generation: SessionGeneration,
    pub phase: GamePhase,
    pub current_number: Option<Number>,
    pub current_nickname: Option<String>,
    /// Вызванные номера в порядке вызова.
    pub called_numbers: Vec<Number>,
    pub remaining: usize,
    pub players: Vec<PlayerViewDto>,
    pub claimed_patterns: Vec<Pattern>,
    pub winners: Vec<Winner>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Билеты розданы.
    SessionSetup { player_count: usize },

    /// Результат вызова номера.
    Call { outcome: CallOutcome },

    /// Результат заявки.
    Claim { outcome: ClaimOutcome },
}

/// Ответ + уведомления, накопленные за команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandResult {
    pub response: CommandResponse,
    pub events: Vec<SessionEvent>,
}
