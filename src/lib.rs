//! Движок тамболы (Housie / Bingo-90).
//!
//! Слои:
//! - `domain` — билеты, номера, паттерны, игроки, мешок, конфиг;
//! - `engine` — генерация билетов, вызов номеров, правила паттернов, сессия;
//! - `infra` — RNG, seed'ы, маппинг в DTO;
//! - `api` — команды/запросы/DTO для UI или CLI.
//!
//! UI (озвучка, анимации, тосты) живёт снаружи и общается с движком через
//! `api::Command` / `api::Query` и события `engine::SessionEvent`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{execute_command, run_query, ApiError, Command, CommandResult, Query, QueryResponse};
pub use domain::{GamePhase, Pattern, Player, SessionConfig, Ticket};
pub use engine::{CallOutcome, ClaimOutcome, RandomSource, Session, SessionError};
