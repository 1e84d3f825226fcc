use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::number::{column_band, Number, COLUMN_COUNT};

/// Количество строк билета.
pub const ROW_COUNT: usize = 3;

/// Сколько номеров должно стоять в каждой строке.
pub const NUMBERS_PER_ROW: usize = 5;

/// Сколько номеров на всём билете.
pub const NUMBERS_PER_TICKET: usize = ROW_COUNT * NUMBERS_PER_ROW;

/// Одна строка билета: 9 ячеек, каждая либо номер, либо пусто.
pub type TicketRow = [Option<Number>; COLUMN_COUNT];

/// Нарушения структуры билета.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TicketError {
    #[error("В строке {row} стоит {count} номеров, нужно ровно 5")]
    WrongRowCount { row: usize, count: usize },

    #[error("На билете {0} номеров, нужно ровно 15")]
    WrongTotal(usize),

    #[error("Номер {number} в колонке {column} вне её диапазона")]
    OutOfBand { column: usize, number: Number },

    #[error("Номер {0} встречается на билете дважды")]
    Duplicate(Number),
}

/// Билет тамболы 3x9.
///
/// После генерации содержимое ячеек не меняется; отметки живут у игрока.
/// В JSON это голая сетка 3x9; при чтении проходит ту же проверку, что `from_rows`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "[TicketRow; ROW_COUNT]", into = "[TicketRow; ROW_COUNT]")]
pub struct Ticket {
    rows: [TicketRow; ROW_COUNT],
}

impl Ticket {
    /// Пустая сетка. Используется генератором как заготовка.
    pub(crate) fn blank() -> Self {
        Self {
            rows: [[None; COLUMN_COUNT]; ROW_COUNT],
        }
    }

    /// Собрать билет из готовых строк с полной проверкой инвариантов.
    pub fn from_rows(rows: [TicketRow; ROW_COUNT]) -> Result<Self, TicketError> {
        let ticket = Self { rows };
        ticket.validate()?;
        Ok(ticket)
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, value: Option<Number>) {
        self.rows[row][column] = value;
    }

    pub fn rows(&self) -> &[TicketRow; ROW_COUNT] {
        &self.rows
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Number> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .flatten()
    }

    /// Номера строки слева направо.
    pub fn row_numbers(&self, row: usize) -> impl Iterator<Item = Number> + '_ {
        self.rows
            .get(row)
            .into_iter()
            .flat_map(|r| r.iter().flatten().copied())
    }

    /// Номера колонки сверху вниз.
    pub fn column_numbers(&self, column: usize) -> impl Iterator<Item = Number> + '_ {
        self.rows
            .iter()
            .filter_map(move |r| r.get(column).copied().flatten())
    }

    /// Все номера билета построчно.
    pub fn numbers(&self) -> impl Iterator<Item = Number> + '_ {
        self.rows.iter().flat_map(|r| r.iter().flatten().copied())
    }

    pub fn row_filled_count(&self, row: usize) -> usize {
        self.row_numbers(row).count()
    }

    pub fn filled_count(&self) -> usize {
        self.numbers().count()
    }

    pub fn contains(&self, number: Number) -> bool {
        self.numbers().any(|n| n == number)
    }

    /// Углы в порядке: (0,0), (0,8), (2,0), (2,8).
    pub fn corners(&self) -> [Option<Number>; 4] {
        let last_row = ROW_COUNT - 1;
        let last_col = COLUMN_COUNT - 1;
        [
            self.rows[0][0],
            self.rows[0][last_col],
            self.rows[last_row][0],
            self.rows[last_row][last_col],
        ]
    }

    /// Проверка всех структурных инвариантов билета.
    pub fn validate(&self) -> Result<(), TicketError> {
        let mut seen = BTreeSet::new();

        for (row_idx, row) in self.rows.iter().enumerate() {
            for (column, cell) in row.iter().enumerate() {
                if let Some(number) = *cell {
                    if !column_band(column).contains(&number) {
                        return Err(TicketError::OutOfBand { column, number });
                    }
                    if !seen.insert(number) {
                        return Err(TicketError::Duplicate(number));
                    }
                }
            }

            let count = self.row_filled_count(row_idx);
            if count != NUMBERS_PER_ROW {
                return Err(TicketError::WrongRowCount { row: row_idx, count });
            }
        }

        if seen.len() != NUMBERS_PER_TICKET {
            return Err(TicketError::WrongTotal(seen.len()));
        }

        Ok(())
    }
}

impl TryFrom<[TicketRow; ROW_COUNT]> for Ticket {
    type Error = TicketError;

    fn try_from(rows: [TicketRow; ROW_COUNT]) -> Result<Self, Self::Error> {
        Ticket::from_rows(rows)
    }
}

impl From<Ticket> for [TicketRow; ROW_COUNT] {
    fn from(ticket: Ticket) -> Self {
        ticket.rows
    }
}
