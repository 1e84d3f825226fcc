use serde::{Deserialize, Serialize};

/// Фаза игровой сессии.
///
/// Переходы:
///   setup -> waiting -> playing <-> paused
///   playing -> ended (пул исчерпан)
///   любая -> setup (сброс)
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    /// Выбираем количество игроков, билетов ещё нет.
    #[default]
    Setup,
    /// Билеты розданы, раунд ещё не начат.
    Waiting,
    /// Идёт игра: вызов номеров, отметки, заявки.
    Playing,
    /// Ручная пауза.
    Paused,
    /// Все 90 номеров вызваны.
    Ended,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Setup => "setup",
            GamePhase::Waiting => "waiting",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::Ended => "ended",
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

impl core::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
