use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Очки за паттерны. Обёртка над u32, чтобы не путать с номерами и id.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(pub u32);

impl Points {
    pub const ZERO: Points = Points(0);

    pub fn new(amount: u32) -> Self {
        Points(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Self::Output {
        Points(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl core::fmt::Display for Points {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
