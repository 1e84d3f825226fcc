//! Доменная модель тамболы: билеты, номера, паттерны, игроки, пул вызовов.

pub mod config;
pub mod nicknames;
pub mod number;
pub mod pattern;
pub mod phase;
pub mod player;
pub mod points;
pub mod pool;
pub mod ticket;

/// Идентификатор игрока внутри одной сессии (1..=player_count).
pub type PlayerId = u32;

/// Поколение сессии: растёт при каждой раздаче билетов и при сбросе.
pub type SessionGeneration = u64;

pub use config::*;
pub use nicknames::nickname;
pub use number::*;
pub use pattern::*;
pub use phase::*;
pub use player::*;
pub use points::*;
pub use pool::*;
pub use ticket::*;
