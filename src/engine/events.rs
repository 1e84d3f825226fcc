use serde::{Deserialize, Serialize};

use crate::domain::{Number, Pattern, PlayerId, Points, SessionGeneration};

/// Тип исходящего уведомления для UI (тосты, озвучка, перерисовка).
///
/// Сам движок ничего не озвучивает и не рисует.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum SessionEventKind {
    /// Билеты розданы.
    TicketsGenerated {
        generation: SessionGeneration,
        player_count: usize,
    },

    RoundStarted,
    RoundPaused,
    RoundResumed,

    /// Вызван номер (с традиционным прозвищем, если оно есть).
    NumberCalled {
        number: Number,
        nickname: Option<String>,
    },

    NumberMarked {
        player_id: PlayerId,
        number: Number,
    },

    /// Паттерн выигран.
    PatternWon {
        player_id: PlayerId,
        player_name: String,
        pattern: Pattern,
        points: Points,
    },

    /// Ложная заявка: игрок снят с паттерна.
    FalseClaim {
        player_id: PlayerId,
        player_name: String,
        pattern: Pattern,
    },

    /// Все 90 номеров вызваны.
    GameEnded,

    SessionReset {
        generation: SessionGeneration,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionEvent {
    pub index: u32,
    pub kind: SessionEventKind,
}

/// Очередь исходящих событий.
///
/// Индексы сквозные: `drain` забирает накопленное, нумерация продолжается.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventLog {
    pending: Vec<SessionEvent>,
    next_index: u32,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: SessionEventKind) {
        let index = self.next_index;
        self.next_index += 1;
        self.pending.push(SessionEvent { index, kind });
    }

    /// События, которые UI ещё не забрал.
    pub fn pending(&self) -> &[SessionEvent] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending)
    }
}
