//! Правила паттернов: чистые предикаты над (билет, отметки).

use std::collections::BTreeSet;

use crate::domain::{Number, Pattern, Player, Ticket, NUMBERS_PER_TICKET};
use crate::engine::claims::ClaimLedger;

/// Сколько номеров нужно для Early Five.
pub const EARLY_FIVE_COUNT: usize = 5;

/// Собран ли паттерн на билете при данных отметках.
///
/// Не учитывает, кто и что уже выиграл: это делает `verify`.
pub fn is_pattern_complete(ticket: &Ticket, marked: &BTreeSet<Number>, pattern: Pattern) -> bool {
    match pattern {
        Pattern::EarlyFive => {
            ticket.numbers().filter(|n| marked.contains(n)).count() >= EARLY_FIVE_COUNT
        }

        Pattern::TopLine | Pattern::MiddleLine | Pattern::BottomLine => {
            let row = match pattern.line_row() {
                Some(row) => row,
                None => return false,
            };
            let mut numbers = ticket.row_numbers(row).peekable();
            numbers.peek().is_some() && numbers.all(|n| marked.contains(&n))
        }

        // Пустой угол делает паттерн недостижимым для этого билета.
        Pattern::FourCorners => ticket
            .corners()
            .iter()
            .all(|corner| matches!(corner, Some(n) if marked.contains(n))),

        Pattern::FullHouse => {
            let total = ticket.filled_count();
            total == NUMBERS_PER_TICKET && ticket.numbers().all(|n| marked.contains(&n))
        }
    }
}

/// Может ли игрок вообще претендовать на паттерн.
///
/// Нет, если паттерн уже выигран (кем угодно) или игрок по нему дисквалифицирован.
pub fn is_claimable(player: &Player, ledger: &ClaimLedger, pattern: Pattern) -> bool {
    !player.has_won(pattern)
        && !ledger.is_claimed(pattern)
        && !player.is_disqualified_for(pattern)
}

/// Проверка заявки: паттерн доступен игроку и действительно собран.
pub fn verify(player: &Player, ledger: &ClaimLedger, pattern: Pattern) -> bool {
    is_claimable(player, ledger, pattern)
        && is_pattern_complete(&player.ticket, &player.marked, pattern)
}

/// Все паттерны, которые игрок может заявить прямо сейчас с гарантией выигрыша.
pub fn completed_patterns(player: &Player, ledger: &ClaimLedger) -> Vec<Pattern> {
    Pattern::ALL
        .iter()
        .copied()
        .filter(|&p| verify(player, ledger, p))
        .collect()
}
