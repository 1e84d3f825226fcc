use serde::{Deserialize, Serialize};

use crate::domain::number::{Number, MAX_NUMBER, MIN_NUMBER, TOTAL_NUMBERS};

/// Мешок с бочонками 1..=90.
///
/// Инварианты: `called` и `available` не пересекаются, вместе дают 1..=90,
/// `called` без повторов и только растёт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallPool {
    called: Vec<Number>,
    available: Vec<Number>,
}

impl CallPool {
    /// Полный мешок, ничего не вызвано.
    pub fn new() -> Self {
        Self {
            called: Vec::with_capacity(TOTAL_NUMBERS),
            available: (MIN_NUMBER..=MAX_NUMBER).collect(),
        }
    }

    /// Вызванные номера в порядке вызова.
    pub fn called(&self) -> &[Number] {
        &self.called
    }

    /// Оставшиеся номера (порядок не значим).
    pub fn available(&self) -> &[Number] {
        &self.available
    }

    pub fn is_called(&self, number: Number) -> bool {
        self.called.contains(&number)
    }

    pub fn remaining(&self) -> usize {
        self.available.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.available.is_empty()
    }

    pub fn last_called(&self) -> Option<Number> {
        self.called.last().copied()
    }

    /// Перенести номер с позиции `index` из `available` в `called`.
    pub(crate) fn take(&mut self, index: usize) -> Option<Number> {
        if index >= self.available.len() {
            return None;
        }
        let number = self.available.swap_remove(index);
        self.called.push(number);
        Some(number)
    }
}

impl Default for CallPool {
    fn default() -> Self {
        Self::new()
    }
}
