use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::points::Points;

/// Выигрышный паттерн.
///
/// На проводе (JSON, команды) используется camelCase-имя: `earlyFive`, `topLine`, ...
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Pattern {
    /// Любые пять отмеченных номеров.
    EarlyFive,
    /// Вся верхняя строка.
    TopLine,
    /// Вся средняя строка.
    MiddleLine,
    /// Вся нижняя строка.
    BottomLine,
    /// Четыре угловые ячейки.
    FourCorners,
    /// Весь билет.
    FullHouse,
}

/// Неизвестное имя паттерна в заявке.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Неизвестный паттерн: {0:?}")]
pub struct ParsePatternError(pub String);

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::EarlyFive,
        Pattern::TopLine,
        Pattern::MiddleLine,
        Pattern::BottomLine,
        Pattern::FourCorners,
        Pattern::FullHouse,
    ];

    /// Фиксированная стоимость паттерна.
    pub fn points(&self) -> Points {
        match self {
            Pattern::EarlyFive => Points(10),
            Pattern::TopLine | Pattern::MiddleLine | Pattern::BottomLine => Points(15),
            Pattern::FourCorners => Points(20),
            Pattern::FullHouse => Points(25),
        }
    }

    /// Имя для отображения / озвучки.
    pub fn display_name(&self) -> &'static str {
        match self {
            Pattern::EarlyFive => "Early Five",
            Pattern::TopLine => "Top Line",
            Pattern::MiddleLine => "Middle Line",
            Pattern::BottomLine => "Bottom Line",
            Pattern::FourCorners => "Four Corners",
            Pattern::FullHouse => "Full House",
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Pattern::EarlyFive => "earlyFive",
            Pattern::TopLine => "topLine",
            Pattern::MiddleLine => "middleLine",
            Pattern::BottomLine => "bottomLine",
            Pattern::FourCorners => "fourCorners",
            Pattern::FullHouse => "fullHouse",
        }
    }

    /// Для линий: индекс строки билета.
    pub fn line_row(&self) -> Option<usize> {
        match self {
            Pattern::TopLine => Some(0),
            Pattern::MiddleLine => Some(1),
            Pattern::BottomLine => Some(2),
            _ => None,
        }
    }
}

impl FromStr for Pattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Pattern::ALL
            .iter()
            .copied()
            .find(|p| p.wire_name() == s)
            .ok_or_else(|| ParsePatternError(s.to_string()))
    }
}

impl core::fmt::Display for Pattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}
