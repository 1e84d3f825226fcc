use serde::{Deserialize, Serialize};

use crate::domain::{CallPool, Number};
use crate::engine::RandomSource;

/// Результат попытки вызвать номер.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CallOutcome {
    /// Номер вытащен и записан в `called`.
    Called(Number),
    /// Мешок пуст, ничего не изменилось.
    Exhausted,
}

impl CallOutcome {
    pub fn number(&self) -> Option<Number> {
        match self {
            CallOutcome::Called(n) => Some(*n),
            CallOutcome::Exhausted => None,
        }
    }
}

/// Вытащить следующий номер равномерно из оставшихся.
pub fn call_next<R: RandomSource>(pool: &mut CallPool, rng: &mut R) -> CallOutcome {
    if pool.is_exhausted() {
        return CallOutcome::Exhausted;
    }

    let index = rng.pick_index(pool.remaining());
    match pool.take(index) {
        Some(number) => CallOutcome::Called(number),
        None => CallOutcome::Exhausted,
    }
}

/// "Мигающие" кандидаты для показа перед настоящим вызовом.
///
/// Только для UI: мешок не трогается, повторы допустимы.
pub fn reveal_candidates<R: RandomSource>(pool: &CallPool, rng: &mut R, flashes: u8) -> Vec<Number> {
    let available = pool.available();
    if available.is_empty() {
        return Vec::new();
    }

    (0..flashes)
        .map(|_| available[rng.pick_index(available.len())])
        .collect()
}
