//! Движок тамболы: генерация билетов, вызов номеров, проверка паттернов,
//! заявки и фазы сессии.
//!
//! Высокоуровневый объект: `Session`
//! Основные операции:
//!   - `setup_session` / `begin_round` / `pause_round` / `resume_round` / `reset_session`
//!   - `call_next_number` (или `begin_reveal` + `commit_reveal`)
//!   - `mark_number`
//!   - `claim_pattern`

pub mod caller;
pub mod claims;
pub mod errors;
pub mod events;
pub mod leaderboard;
pub mod rules;
pub mod session;
pub mod ticket_gen;

pub use caller::{call_next, reveal_candidates, CallOutcome};
pub use claims::{ClaimLedger, ClaimOutcome, Winner};
pub use errors::{SessionAction, SessionError};
pub use events::{EventLog, SessionEvent, SessionEventKind};
pub use leaderboard::{build_leaderboard, LeaderboardEntry};
pub use rules::{completed_patterns, is_claimable, is_pattern_complete, verify};
pub use session::{PendingReveal, Session};
pub use ticket_gen::{generate_ticket, generate_tickets};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерная перестановка (Fisher–Yates).
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерный индекс в `0..len`. `len` должен быть > 0.
    fn pick_index(&mut self, len: usize) -> usize;
}
