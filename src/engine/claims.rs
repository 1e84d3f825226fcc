use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Pattern, PlayerId, Points};

/// Запись о выигрыше паттерна.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Winner {
    pub pattern: Pattern,
    pub player_id: PlayerId,
    pub player_name: String,
    pub points: Points,
}

/// Результат принятой к рассмотрению заявки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ClaimOutcome {
    /// Паттерн собран: очки начислены.
    Won { pattern: Pattern, points: Points },
    /// Ложная заявка: игрок снят только с этого паттерна.
    FalseClaim { pattern: Pattern },
}

/// Глобальный журнал заявок сессии.
///
/// Каждый паттерн выигрывается не больше одного раза за сессию.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimLedger {
    claimed: BTreeSet<Pattern>,
    winners: Vec<Winner>,
}

impl ClaimLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self, pattern: Pattern) -> bool {
        self.claimed.contains(&pattern)
    }

    pub fn claimed(&self) -> &BTreeSet<Pattern> {
        &self.claimed
    }

    /// Победители в порядке выигрыша.
    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }

    /// Записать выигрыш. Повторная запись того же паттерна игнорируется.
    pub(crate) fn record(&mut self, winner: Winner) -> bool {
        if !self.claimed.insert(winner.pattern) {
            return false;
        }
        self.winners.push(winner);
        true
    }
}
