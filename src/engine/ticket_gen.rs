//! Генератор билетов 3x9.
//!
//! Два прохода:
//!   1. по колонкам: в каждую колонку кладём 1..=3 случайных номера её диапазона
//!      в случайные строки;
//!   2. балансировка строк: добиваем короткие строки до 5 и срезаем длинные.
//!
//! Второй проход трогает только свою строку, поэтому уже выровненные строки
//! не ломаются. Диапазон колонки (10 номеров) всегда больше высоты колонки (3),
//! так что свободный номер для добивки находится всегда.

use tracing::warn;

use crate::domain::{column_band, Number, Ticket, COLUMN_COUNT, NUMBERS_PER_ROW, ROW_COUNT};
use crate::engine::RandomSource;

/// Сгенерировать один валидный билет.
pub fn generate_ticket<R: RandomSource>(rng: &mut R) -> Ticket {
    let mut ticket = Ticket::blank();
    place_columns(&mut ticket, rng);
    for row in 0..ROW_COUNT {
        balance_row(&mut ticket, row, rng);
    }
    ticket
}

/// Сгенерировать `count` независимых билетов.
pub fn generate_tickets<R: RandomSource>(count: usize, rng: &mut R) -> Vec<Ticket> {
    (0..count).map(|_| generate_ticket(rng)).collect()
}

/// Проход по колонкам.
fn place_columns<R: RandomSource>(ticket: &mut Ticket, rng: &mut R) {
    for column in 0..COLUMN_COUNT {
        let mut band: Vec<Number> = column_band(column).collect();
        rng.shuffle(&mut band);

        let take = 1 + rng.pick_index(ROW_COUNT);

        let mut rows: [usize; ROW_COUNT] = [0, 1, 2];
        rng.shuffle(&mut rows);

        for (&row, &number) in rows.iter().take(take).zip(band.iter()) {
            ticket.set(row, column, Some(number));
        }
    }
}

fn balance_row<R: RandomSource>(ticket: &mut Ticket, row: usize, rng: &mut R) {
    let count = ticket.row_filled_count(row);
    if count < NUMBERS_PER_ROW {
        fill_row(ticket, row, NUMBERS_PER_ROW - count, rng);
    } else if count > NUMBERS_PER_ROW {
        trim_row(ticket, row, rng);
    }
}

/// Добить строку до 5 номерами из пустых колонок (в случайном порядке).
fn fill_row<R: RandomSource>(ticket: &mut Ticket, row: usize, mut missing: usize, rng: &mut R) {
    let mut empty_columns: Vec<usize> = (0..COLUMN_COUNT)
        .filter(|&column| ticket.cell(row, column).is_none())
        .collect();
    rng.shuffle(&mut empty_columns);

    for column in empty_columns {
        if missing == 0 {
            break;
        }

        let used: Vec<Number> = ticket.column_numbers(column).collect();
        let free: Vec<Number> = column_band(column)
            .filter(|n| !used.contains(n))
            .collect();

        if free.is_empty() {
            // Диапазон колонки исчерпан: ячейку оставляем пустой и идём дальше.
            warn!(row, column, "no free number left in column band");
            continue;
        }

        let number = free[rng.pick_index(free.len())];
        ticket.set(row, column, Some(number));
        missing -= 1;
    }

    if missing > 0 {
        warn!(row, missing, "row left short after balancing");
    }
}

/// Срезать лишние номера строки, выбирая случайные заполненные колонки.
fn trim_row<R: RandomSource>(ticket: &mut Ticket, row: usize, rng: &mut R) {
    let mut filled: Vec<usize> = (0..COLUMN_COUNT)
        .filter(|&column| ticket.cell(row, column).is_some())
        .collect();

    while filled.len() > NUMBERS_PER_ROW {
        let idx = rng.pick_index(filled.len());
        let column = filled.swap_remove(idx);
        ticket.set(row, column, None);
    }
}
