use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Number, PlayerId};
use crate::engine::{RandomSource, Session};

use super::dto::{CommandResponse, CommandResult};
use super::errors::ApiError;

/// Входящие команды UI/CLI.
///
/// JSON: `{"command": "markNumber", "player_id": 1, "number": 22}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "command")]
pub enum Command {
    /// Раздать билеты (количество зажимается в 2..=10).
    SetupSession { player_count: usize },

    BeginRound,
    PauseRound,
    ResumeRound,
    ResetSession,
    CallNextNumber,

    MarkNumber { player_id: PlayerId, number: Number },

    /// Паттерн передаётся строкой, неизвестное имя — отказ без изменений.
    ClaimPattern { player_id: PlayerId, pattern: String },
}

/// Разобрать команду из JSON.
pub fn parse_command(json: &str) -> Result<Command, ApiError> {
    Ok(serde_json::from_str(json)?)
}

/// Выполнить команду над сессией и забрать накопленные события.
pub fn execute_command<R: RandomSource>(
    session: &mut Session,
    command: Command,
    rng: &mut R,
) -> Result<CommandResult, ApiError> {
    debug!(?command, "executing command");

    let response = match command {
        Command::SetupSession { player_count } => {
            let player_count = session.setup_session(player_count, rng)?;
            CommandResponse::SessionSetup { player_count }
        }
        Command::BeginRound => {
            session.begin_round()?;
            CommandResponse::Ok
        }
        Command::PauseRound => {
            session.pause_round()?;
            CommandResponse::Ok
        }
        Command::ResumeRound => {
            session.resume_round()?;
            CommandResponse::Ok
        }
        Command::ResetSession => {
            session.reset_session();
            CommandResponse::Ok
        }
        Command::CallNextNumber => CommandResponse::Call {
            outcome: session.call_next_number(rng)?,
        },
        Command::MarkNumber { player_id, number } => {
            session.mark_number(player_id, number)?;
            CommandResponse::Ok
        }
        Command::ClaimPattern { player_id, pattern } => CommandResponse::Claim {
            outcome: session.claim_pattern_by_name(player_id, &pattern)?,
        },
    };

    Ok(CommandResult {
        response,
        events: session.drain_events(),
    })
}
