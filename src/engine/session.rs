// src/engine/session.rs

use tracing::{debug, info, warn};

use crate::domain::{
    clamp_player_count, is_valid_number, nickname, CallPool, GamePhase, Number, Pattern, Player,
    PlayerId, SessionConfig, SessionGeneration,
};
use crate::engine::caller::{call_next, reveal_candidates, CallOutcome};
use crate::engine::claims::{ClaimLedger, ClaimOutcome, Winner};
use crate::engine::errors::{SessionAction, SessionError};
use crate::engine::events::{EventLog, SessionEvent, SessionEventKind};
use crate::engine::leaderboard::{build_leaderboard, LeaderboardEntry};
use crate::engine::rules::{completed_patterns, is_pattern_complete};
use crate::engine::ticket_gen::generate_ticket;
use crate::engine::RandomSource;

/// Отложенный показ номера.
///
/// UI получает кандидатов для "мигания", а настоящий номер выбирается только
/// в `Session::commit_reveal`. Если между `begin_reveal` и `commit_reveal`
/// сессию сбросили или вызвали другой номер, коммит отклоняется.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingReveal {
    generation: SessionGeneration,
    calls_made: usize,
    candidates: Vec<Number>,
}

impl PendingReveal {
    /// Номера для промежуточного показа (повторы возможны).
    pub fn candidates(&self) -> &[Number] {
        &self.candidates
    }

    pub fn generation(&self) -> SessionGeneration {
        self.generation
    }
}

/// Игровая сессия: единственный владелец и писатель всего состояния игры.
///
/// Все операции синхронные; наружу состояние отдаётся только по `&`.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    phase: GamePhase,
    generation: SessionGeneration,
    players: Vec<Player>,
    pool: CallPool,
    ledger: ClaimLedger,
    current_number: Option<Number>,
    events: EventLog,
}

impl Session {
    /// Новая сессия в фазе `setup`.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            phase: GamePhase::Setup,
            generation: 0,
            players: Vec::new(),
            pool: CallPool::new(),
            ledger: ClaimLedger::new(),
            current_number: None,
            events: EventLog::new(),
        }
    }

    // ---------------------------------------------------------------------
    // Чтение
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn generation(&self) -> SessionGeneration {
        self.generation
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn pool(&self) -> &CallPool {
        &self.pool
    }

    pub fn ledger(&self) -> &ClaimLedger {
        &self.ledger
    }

    pub fn winners(&self) -> &[Winner] {
        self.ledger.winners()
    }

    /// Последний вызванный номер.
    pub fn current_number(&self) -> Option<Number> {
        self.current_number
    }

    /// Паттерны, которые игрок может прямо сейчас выиграть.
    pub fn completed_patterns(&self, player_id: PlayerId) -> Result<Vec<Pattern>, SessionError> {
        let player = self
            .player(player_id)
            .ok_or(SessionError::PlayerNotFound(player_id))?;
        Ok(completed_patterns(player, &self.ledger))
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        build_leaderboard(&self.players)
    }

    pub fn pending_events(&self) -> &[SessionEvent] {
        self.events.pending()
    }

    /// Забрать накопленные уведомления для UI.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain()
    }

    // ---------------------------------------------------------------------
    // Фазы
    // ---------------------------------------------------------------------

    /// Раздать билеты: `setup`/`waiting` -> `waiting`.
    ///
    /// Количество игроков зажимается в 2..=10. Возвращает итоговое количество.
    pub fn setup_session<R: RandomSource>(
        &mut self,
        player_count: usize,
        rng: &mut R,
    ) -> Result<usize, SessionError> {
        if !matches!(self.phase, GamePhase::Setup | GamePhase::Waiting) {
            return Err(self.wrong_phase(SessionAction::SetupSession));
        }

        let count = clamp_player_count(player_count);
        if count != player_count {
            debug!(requested = player_count, clamped = count, "player count clamped");
        }

        self.generation += 1;
        self.players = (1..=count as PlayerId)
            .map(|id| Player::new(id, self.config.player_name(id), generate_ticket(rng)))
            .collect();
        self.pool = CallPool::new();
        self.ledger = ClaimLedger::new();
        self.current_number = None;
        self.phase = GamePhase::Waiting;

        info!(generation = self.generation, players = count, "tickets generated");
        self.events.push(SessionEventKind::TicketsGenerated {
            generation: self.generation,
            player_count: count,
        });

        Ok(count)
    }

    /// `waiting` -> `playing`.
    pub fn begin_round(&mut self) -> Result<(), SessionError> {
        self.transition(SessionAction::BeginRound, GamePhase::Waiting, GamePhase::Playing)?;
        info!(generation = self.generation, "round started");
        self.events.push(SessionEventKind::RoundStarted);
        Ok(())
    }

    /// `playing` -> `paused`.
    pub fn pause_round(&mut self) -> Result<(), SessionError> {
        self.transition(SessionAction::PauseRound, GamePhase::Playing, GamePhase::Paused)?;
        info!("round paused");
        self.events.push(SessionEventKind::RoundPaused);
        Ok(())
    }

    /// `paused` -> `playing`.
    pub fn resume_round(&mut self) -> Result<(), SessionError> {
        self.transition(SessionAction::ResumeRound, GamePhase::Paused, GamePhase::Playing)?;
        info!("round resumed");
        self.events.push(SessionEventKind::RoundResumed);
        Ok(())
    }

    /// Любая фаза -> `setup`. Игроки, мешок, заявки и победители очищаются.
    ///
    /// Поколение растёт, поэтому все выданные `PendingReveal` становятся устаревшими.
    pub fn reset_session(&mut self) {
        self.generation += 1;
        self.players.clear();
        self.pool = CallPool::new();
        self.ledger = ClaimLedger::new();
        self.current_number = None;
        self.phase = GamePhase::Setup;

        info!(generation = self.generation, "session reset");
        self.events.push(SessionEventKind::SessionReset {
            generation: self.generation,
        });
    }

    // ---------------------------------------------------------------------
    // Вызов номеров
    // ---------------------------------------------------------------------

    /// Вызвать следующий номер.
    ///
    /// Пустой мешок -> фаза `ended`, событие `GameEnded`, `CallOutcome::Exhausted`.
    pub fn call_next_number<R: RandomSource>(
        &mut self,
        rng: &mut R,
    ) -> Result<CallOutcome, SessionError> {
        self.require_playing(SessionAction::CallNumber)?;

        let outcome = call_next(&mut self.pool, rng);
        match outcome {
            CallOutcome::Called(number) => {
                self.current_number = Some(number);
                let nick = nickname(number);
                info!(number, remaining = self.pool.remaining(), nickname = ?nick, "number called");
                self.events.push(SessionEventKind::NumberCalled {
                    number,
                    nickname: nick.map(str::to_string),
                });
            }
            CallOutcome::Exhausted => {
                self.phase = GamePhase::Ended;
                info!(generation = self.generation, "pool exhausted, game ended");
                self.events.push(SessionEventKind::GameEnded);
            }
        }

        Ok(outcome)
    }

    /// Начать косметический показ: кандидаты без изменения мешка.
    pub fn begin_reveal<R: RandomSource>(&self, rng: &mut R) -> Result<PendingReveal, SessionError> {
        self.require_playing(SessionAction::CallNumber)?;

        Ok(PendingReveal {
            generation: self.generation,
            calls_made: self.pool.called().len(),
            candidates: reveal_candidates(&self.pool, rng, self.config.reveal_flashes),
        })
    }

    /// Завершить показ настоящим вызовом номера.
    ///
    /// Отклоняется, если с момента `begin_reveal` сессию сбрасывали/перераздавали
    /// или успели вызвать другой номер.
    pub fn commit_reveal<R: RandomSource>(
        &mut self,
        reveal: PendingReveal,
        rng: &mut R,
    ) -> Result<CallOutcome, SessionError> {
        if reveal.generation != self.generation {
            warn!(
                reveal_generation = reveal.generation,
                current_generation = self.generation,
                "stale reveal rejected"
            );
            return Err(SessionError::StaleReveal {
                reveal: reveal.generation,
                current: self.generation,
            });
        }

        let calls_now = self.pool.called().len();
        if reveal.calls_made != calls_now {
            warn!(
                expected = reveal.calls_made,
                actual = calls_now,
                "reveal overtaken by another call"
            );
            return Err(SessionError::RevealOvertaken {
                expected: reveal.calls_made,
                actual: calls_now,
            });
        }

        self.call_next_number(rng)
    }

    // ---------------------------------------------------------------------
    // Отметки и заявки
    // ---------------------------------------------------------------------

    /// Отметить вызванный номер на билете игрока.
    pub fn mark_number(&mut self, player_id: PlayerId, number: Number) -> Result<(), SessionError> {
        self.require_playing(SessionAction::MarkNumber)?;

        if !is_valid_number(number) {
            return Err(SessionError::InvalidNumber(number));
        }
        if !self.pool.is_called(number) {
            return Err(SessionError::NumberNotCalled(number));
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(SessionError::PlayerNotFound(player_id))?;

        if !player.ticket.contains(number) {
            return Err(SessionError::NumberNotOnTicket { player_id, number });
        }
        if !player.marked.insert(number) {
            return Err(SessionError::AlreadyMarked { player_id, number });
        }

        debug!(player_id, number, "number marked");
        self.events
            .push(SessionEventKind::NumberMarked { player_id, number });
        Ok(())
    }

    /// Заявка на паттерн.
    ///
    /// - паттерн уже выигран / игрок по нему снят -> отказ без изменений;
    /// - паттерн собран -> очки, запись в журнал, `PatternWon`;
    /// - не собран -> игрок снимается только с этого паттерна, `FalseClaim`.
    pub fn claim_pattern(
        &mut self,
        player_id: PlayerId,
        pattern: Pattern,
    ) -> Result<ClaimOutcome, SessionError> {
        self.require_playing(SessionAction::ClaimPattern)?;

        if self.ledger.is_claimed(pattern) {
            return Err(SessionError::PatternAlreadyClaimed(pattern));
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(SessionError::PlayerNotFound(player_id))?;

        if player.is_disqualified_for(pattern) {
            return Err(SessionError::DisqualifiedForPattern { player_id, pattern });
        }

        if is_pattern_complete(&player.ticket, &player.marked, pattern) {
            let points = pattern.points();
            player.won_patterns.insert(pattern);
            player.points += points;

            let player_name = player.name.clone();
            self.ledger.record(Winner {
                pattern,
                player_id,
                player_name: player_name.clone(),
                points,
            });

            info!(player_id, %pattern, %points, "pattern won");
            self.events.push(SessionEventKind::PatternWon {
                player_id,
                player_name,
                pattern,
                points,
            });

            Ok(ClaimOutcome::Won { pattern, points })
        } else {
            player.disqualified = true;
            player.disqualified_patterns.insert(pattern);

            let player_name = player.name.clone();
            warn!(player_id, %pattern, "false claim, player disqualified from pattern");
            self.events.push(SessionEventKind::FalseClaim {
                player_id,
                player_name,
                pattern,
            });

            Ok(ClaimOutcome::FalseClaim { pattern })
        }
    }

    /// Заявка по имени паттерна с провода (`"earlyFive"`, ...).
    pub fn claim_pattern_by_name(
        &mut self,
        player_id: PlayerId,
        pattern_name: &str,
    ) -> Result<ClaimOutcome, SessionError> {
        let pattern: Pattern = pattern_name
            .parse()
            .map_err(|_| SessionError::UnknownPattern(pattern_name.to_string()))?;
        self.claim_pattern(player_id, pattern)
    }

    // ---------------------------------------------------------------------
    // Внутреннее
    // ---------------------------------------------------------------------

    fn wrong_phase(&self, action: SessionAction) -> SessionError {
        debug!(%action, phase = %self.phase, "action rejected in current phase");
        SessionError::WrongPhase {
            action,
            phase: self.phase,
        }
    }

    fn require_playing(&self, action: SessionAction) -> Result<(), SessionError> {
        if self.phase.is_playing() {
            Ok(())
        } else {
            Err(self.wrong_phase(action))
        }
    }

    fn transition(
        &mut self,
        action: SessionAction,
        from: GamePhase,
        to: GamePhase,
    ) -> Result<(), SessionError> {
        if self.phase != from {
            return Err(self.wrong_phase(action));
        }
        self.phase = to;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
