use crate::api::dto::{PlayerViewDto, SessionViewDto};
use crate::domain::{nickname, Player};
use crate::engine::{completed_patterns, ClaimLedger, Session};

/// Маппинг Player -> PlayerViewDto.
///
/// `claimable_patterns` считается по текущему журналу заявок.
pub fn map_player_to_dto(player: &Player, ledger: &ClaimLedger) -> PlayerViewDto {
    PlayerViewDto {
        player_id: player.id,
        name: player.name.clone(),
        ticket: player.ticket.clone(),
        marked: player.marked.iter().copied().collect(),
        won_patterns: player.won_patterns.iter().copied().collect(),
        points: player.points,
        disqualified: player.disqualified,
        disqualified_patterns: player.disqualified_patterns.iter().copied().collect(),
        claimable_patterns: completed_patterns(player, ledger),
    }
}

/// Маппинг Session -> SessionViewDto.
pub fn map_session_to_dto(session: &Session) -> SessionViewDto {
    let current_number = session.current_number();

    SessionViewDto {
        generation: session.generation(),
        phase: session.phase(),
        current_number,
        current_nickname: current_number
            .and_then(nickname)
            .map(str::to_string),
        called_numbers: session.pool().called().to_vec(),
        remaining: session.pool().remaining(),
        players: session
            .players()
            .iter()
            .map(|p| map_player_to_dto(p, session.ledger()))
            .collect(),
        claimed_patterns: session.ledger().claimed().iter().copied().collect(),
        winners: session.winners().to_vec(),
    }
}
