use serde::{Deserialize, Serialize};

use crate::domain::{Pattern, Player, PlayerId, Points};

/// Строка таблицы лидеров.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Место, начиная с 1.
    pub rank: u32,
    pub player_id: PlayerId,
    pub name: String,
    pub points: Points,
    pub won_patterns: Vec<Pattern>,
    pub disqualified: bool,
}

/// Таблица лидеров: по очкам по убыванию, при равенстве — порядок мест.
pub fn build_leaderboard(players: &[Player]) -> Vec<LeaderboardEntry> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    // sort_by стабильный.
    sorted.sort_by(|a, b| b.points.cmp(&a.points));

    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, p)| LeaderboardEntry {
            rank: idx as u32 + 1,
            player_id: p.id,
            name: p.name.clone(),
            points: p.points,
            won_patterns: p.won_patterns.iter().copied().collect(),
            disqualified: p.disqualified,
        })
        .collect()
}
