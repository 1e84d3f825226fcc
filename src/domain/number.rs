use core::ops::RangeInclusive;

/// Номер бочонка (1..=90).
pub type Number = u8;

pub const MIN_NUMBER: Number = 1;
pub const MAX_NUMBER: Number = 90;

/// Сколько всего номеров в мешке.
pub const TOTAL_NUMBERS: usize = MAX_NUMBER as usize;

/// Число колонок билета (и числовых диапазонов).
pub const COLUMN_COUNT: usize = 9;

/// Числовой диапазон колонки: колонка `c` владеет `c*10+1 ..= c*10+10`.
///
/// Колонка 0 -> 1..=10, колонка 8 -> 81..=90.
pub fn column_band(column: usize) -> RangeInclusive<Number> {
    let start = (column * 10 + 1) as Number;
    start..=start + 9
}

/// В какой колонке живёт номер. `None` для номеров вне 1..=90.
pub fn column_of(number: Number) -> Option<usize> {
    if is_valid_number(number) {
        Some(((number - 1) / 10) as usize)
    } else {
        None
    }
}

#[inline]
pub fn is_valid_number(number: Number) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&number)
}
