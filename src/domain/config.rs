use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PlayerId;

/// Минимум игроков в сессии.
pub const MIN_PLAYERS: usize = 2;
/// Максимум игроков в сессии.
pub const MAX_PLAYERS: usize = 10;

pub const DEFAULT_PLAYER_COUNT: usize = 5;

/// Стандартные имена игроков по местам.
pub const DEFAULT_PLAYER_NAMES: [&str; MAX_PLAYERS] = [
    "Ravi", "Priya", "Amit", "Sneha", "Rajesh", "Pooja", "Vikram", "Deepa", "Arjun", "Kavya",
];
pub const DEFAULT_REVEAL_FLASHES: u8 = 6;

/// Ошибки загрузки конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Битый JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Настройки сессии.
///
/// Все поля необязательны в JSON: недостающие берутся из `Default`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Сколько игроков раздавать по умолчанию (зажимается в 2..=10).
    pub player_count: usize,
    /// Сколько "мигающих" кандидатов показать перед финальным номером.
    pub reveal_flashes: u8,
    /// Seed для воспроизводимых игр. `None` — системный RNG.
    pub seed: Option<u64>,
    /// Имена игроков по порядку мест. Пустые места берутся из стандартного списка.
    pub player_names: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            reveal_flashes: DEFAULT_REVEAL_FLASHES,
            seed: None,
            player_names: Vec::new(),
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Имя игрока по id (1-based): из конфига, иначе стандартное, иначе "Player N".
    pub fn player_name(&self, player_id: PlayerId) -> String {
        let idx = (player_id as usize).saturating_sub(1);
        self.player_names
            .get(idx)
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .or_else(|| DEFAULT_PLAYER_NAMES.get(idx).map(|s| s.to_string()))
            .unwrap_or_else(|| format!("Player {}", player_id))
    }

    /// Количество игроков после зажима в допустимые границы.
    pub fn clamped_player_count(&self) -> usize {
        clamp_player_count(self.player_count)
    }
}

/// Зажать количество игроков в 2..=10. Некорректный ввод не ошибка.
pub fn clamp_player_count(count: usize) -> usize {
    count.clamp(MIN_PLAYERS, MAX_PLAYERS)
}
