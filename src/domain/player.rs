use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::number::Number;
use crate::domain::pattern::Pattern;
use crate::domain::points::Points;
use crate::domain::ticket::Ticket;
use crate::domain::PlayerId;

/// Игрок сессии: билет, отметки, выигранные паттерны, очки и дисквалификации.
///
/// Пишет в игрока только `Session`; наружу он отдаётся по `&Player`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub ticket: Ticket,
    /// Отмеченные номера (только с билета и только вызванные).
    pub marked: BTreeSet<Number>,
    /// Паттерны, которые этот игрок выиграл.
    pub won_patterns: BTreeSet<Pattern>,
    pub points: Points,
    /// Был ли у игрока хоть один ложный клейм (для отображения).
    pub disqualified: bool,
    /// Паттерны, на которые игрок больше не может претендовать.
    pub disqualified_patterns: BTreeSet<Pattern>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, ticket: Ticket) -> Self {
        Self {
            id,
            name: name.into(),
            ticket,
            marked: BTreeSet::new(),
            won_patterns: BTreeSet::new(),
            points: Points::ZERO,
            disqualified: false,
            disqualified_patterns: BTreeSet::new(),
        }
    }

    pub fn is_marked(&self, number: Number) -> bool {
        self.marked.contains(&number)
    }

    pub fn has_won(&self, pattern: Pattern) -> bool {
        self.won_patterns.contains(&pattern)
    }

    pub fn is_disqualified_for(&self, pattern: Pattern) -> bool {
        self.disqualified_patterns.contains(&pattern)
    }

    /// Сколько номеров билета уже отмечено.
    pub fn marked_on_ticket(&self) -> usize {
        self.ticket.numbers().filter(|n| self.marked.contains(n)).count()
    }
}
