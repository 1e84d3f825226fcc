//
// tests/session_tests.rs
//
// Сессия целиком: фазы, вызовы, отметки, заявки, дисквалификация, сброс.
//
// Все сценарии гоняются на DeterministicRng, а условия ("у игрока 3 отметки",
// "верхняя строка собрана") проверяются предикатами, поэтому не зависят от
// конкретного содержимого билетов.

use tambola_engine::domain::{GamePhase, Number, Pattern, Points, SessionConfig};
use tambola_engine::engine::{
    is_pattern_complete, CallOutcome, ClaimOutcome, Session, SessionAction, SessionError,
    SessionEventKind,
};
use tambola_engine::infra::DeterministicRng;

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ ФУНКЦИИ
// -----------------------------

fn playing_session(players: usize, seed: u64) -> (Session, DeterministicRng) {
    let mut rng = DeterministicRng::from_seed(seed);
    let mut session = Session::new(SessionConfig::default());
    session.setup_session(players, &mut rng).unwrap();
    session.begin_round().unwrap();
    session.drain_events();
    (session, rng)
}

/// Вызвать номер и отметить его у всех игроков из `markers`, у кого он есть на билете.
fn call_and_mark(session: &mut Session, rng: &mut DeterministicRng, markers: &[u32]) -> Option<Number> {
    let number = session.call_next_number(rng).unwrap().number()?;
    for &pid in markers {
        let on_ticket = session.player(pid).unwrap().ticket.contains(number);
        if on_ticket {
            session.mark_number(pid, number).unwrap();
        }
    }
    Some(number)
}

/// Вызывать номера, пока не выполнится условие (или не кончится мешок).
fn call_until(
    session: &mut Session,
    rng: &mut DeterministicRng,
    markers: &[u32],
    done: impl Fn(&Session) -> bool,
) {
    while !done(session) {
        if call_and_mark(session, rng, markers).is_none() {
            panic!("pool exhausted before condition was met");
        }
    }
}

fn pattern_ready(session: &Session, pid: u32, pattern: Pattern) -> bool {
    let p = session.player(pid).unwrap();
    is_pattern_complete(&p.ticket, &p.marked, pattern)
}

// -----------------------------
// ФАЗЫ
// -----------------------------

#[test]
fn new_session_starts_in_setup() {
    let session = Session::default();
    assert_eq!(session.phase(), GamePhase::Setup);
    assert!(session.players().is_empty());
    assert_eq!(session.generation(), 0);
}

#[test]
fn setup_clamps_player_count_and_deals_tickets() {
    let mut rng = DeterministicRng::from_seed(1);
    let mut session = Session::default();

    assert_eq!(session.setup_session(1, &mut rng), Ok(2));
    assert_eq!(session.players().len(), 2);
    assert_eq!(session.phase(), GamePhase::Waiting);

    // Перераздача до начала раунда разрешена.
    assert_eq!(session.setup_session(25, &mut rng), Ok(10));
    assert_eq!(session.players().len(), 10);
    assert_eq!(session.players()[0].name, "Ravi");
    assert_eq!(session.players()[9].name, "Kavya");

    for p in session.players() {
        assert!(p.ticket.validate().is_ok());
        assert!(p.marked.is_empty());
        assert_eq!(p.points, Points::ZERO);
    }
}

#[test]
fn begin_round_only_from_waiting() {
    let mut session = Session::default();
    assert_eq!(
        session.begin_round(),
        Err(SessionError::WrongPhase {
            action: SessionAction::BeginRound,
            phase: GamePhase::Setup,
        })
    );

    let (mut session, _) = playing_session(3, 2);
    assert!(matches!(session.begin_round(), Err(SessionError::WrongPhase { .. })));
}

#[test]
fn pause_and_resume_do_not_touch_pool() {
    let (mut session, mut rng) = playing_session(3, 3);
    call_and_mark(&mut session, &mut rng, &[]);
    let called_before = session.pool().called().to_vec();

    session.pause_round().unwrap();
    assert_eq!(session.phase(), GamePhase::Paused);

    assert!(matches!(
        session.call_next_number(&mut rng),
        Err(SessionError::WrongPhase { action: SessionAction::CallNumber, .. })
    ));
    assert!(matches!(
        session.mark_number(1, called_before[0]),
        Err(SessionError::WrongPhase { action: SessionAction::MarkNumber, .. })
    ));
    assert!(matches!(
        session.claim_pattern(1, Pattern::EarlyFive),
        Err(SessionError::WrongPhase { action: SessionAction::ClaimPattern, .. })
    ));
    assert!(session.pause_round().is_err());

    session.resume_round().unwrap();
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.pool().called(), called_before.as_slice());
    assert!(session.resume_round().is_err());
}

#[test]
fn setup_rejected_while_playing() {
    let (mut session, mut rng) = playing_session(4, 4);
    assert!(matches!(
        session.setup_session(5, &mut rng),
        Err(SessionError::WrongPhase { action: SessionAction::SetupSession, .. })
    ));
    assert_eq!(session.players().len(), 4);
}

#[test]
fn reset_clears_everything_from_any_phase() {
    let (mut session, mut rng) = playing_session(4, 5);
    call_until(&mut session, &mut rng, &[1, 2, 3, 4], |s| {
        pattern_ready(s, 1, Pattern::EarlyFive)
    });
    session.claim_pattern(1, Pattern::EarlyFive).unwrap();
    let generation = session.generation();

    session.reset_session();

    assert_eq!(session.phase(), GamePhase::Setup);
    assert!(session.players().is_empty());
    assert!(session.pool().called().is_empty());
    assert_eq!(session.pool().remaining(), 90);
    assert!(session.winners().is_empty());
    assert!(session.ledger().claimed().is_empty());
    assert_eq!(session.current_number(), None);
    assert!(session.generation() > generation);
}

// -----------------------------
// ВЫЗОВ НОМЕРОВ
// -----------------------------

#[test]
fn pool_partition_holds_after_every_call() {
    let (mut session, mut rng) = playing_session(2, 6);

    for i in 1..=90 {
        let outcome = session.call_next_number(&mut rng).unwrap();
        let number = outcome.number().expect("pool not yet exhausted");

        let pool = session.pool();
        assert_eq!(pool.called().len(), i);
        assert_eq!(pool.called().len() + pool.available().len(), 90);
        assert!(!pool.available().contains(&number));
        assert!(pool.called().iter().all(|n| !pool.available().contains(n)));
        assert_eq!(session.current_number(), Some(number));
    }

    let mut called = session.pool().called().to_vec();
    called.sort_unstable();
    assert_eq!(called, (1..=90).collect::<Vec<Number>>());
}

#[test]
fn ninety_first_call_ends_game_without_mutation() {
    let (mut session, mut rng) = playing_session(2, 7);
    for _ in 0..90 {
        assert!(matches!(
            session.call_next_number(&mut rng),
            Ok(CallOutcome::Called(_))
        ));
    }
    assert!(session.pool().is_exhausted());
    assert_eq!(session.phase(), GamePhase::Playing);
    session.drain_events();

    let called = session.pool().called().to_vec();
    assert_eq!(session.call_next_number(&mut rng), Ok(CallOutcome::Exhausted));
    assert_eq!(session.phase(), GamePhase::Ended);
    assert_eq!(session.pool().called(), called.as_slice());

    let events = session.drain_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, SessionEventKind::GameEnded);

    // После конца игры вызовы отклоняются.
    assert!(matches!(
        session.call_next_number(&mut rng),
        Err(SessionError::WrongPhase { phase: GamePhase::Ended, .. })
    ));
}

#[test]
fn number_called_event_carries_nickname() {
    let (mut session, mut rng) = playing_session(2, 8);

    for _ in 0..90 {
        session.call_next_number(&mut rng).unwrap();
    }

    let events = session.drain_events();
    let ducks = events.iter().find_map(|e| match &e.kind {
        SessionEventKind::NumberCalled { number: 22, nickname } => Some(nickname.clone()),
        _ => None,
    });
    assert_eq!(ducks, Some(Some("Two Little Ducks".to_string())));
}

// -----------------------------
// КОСМЕТИЧЕСКИЙ ПОКАЗ
// -----------------------------

#[test]
fn reveal_commits_exactly_one_number() {
    let (mut session, mut rng) = playing_session(3, 9);
    call_and_mark(&mut session, &mut rng, &[]);

    let reveal = session.begin_reveal(&mut rng).unwrap();
    assert_eq!(reveal.candidates().len(), 6);
    for n in reveal.candidates() {
        assert!(session.pool().available().contains(n));
    }
    assert_eq!(session.pool().called().len(), 1);

    let outcome = session.commit_reveal(reveal, &mut rng).unwrap();
    assert!(matches!(outcome, CallOutcome::Called(_)));
    assert_eq!(session.pool().called().len(), 2);
}

#[test]
fn reveal_after_reset_is_stale() {
    let (mut session, mut rng) = playing_session(3, 10);
    let reveal = session.begin_reveal(&mut rng).unwrap();
    let started_in = session.generation();

    session.reset_session();
    session.setup_session(3, &mut rng).unwrap();
    session.begin_round().unwrap();

    assert_eq!(
        session.commit_reveal(reveal, &mut rng),
        Err(SessionError::StaleReveal {
            reveal: started_in,
            current: session.generation(),
        })
    );
    assert!(session.pool().called().is_empty());
}

#[test]
fn second_reveal_is_overtaken_after_first_commit() {
    let (mut session, mut rng) = playing_session(3, 11);
    let first = session.begin_reveal(&mut rng).unwrap();
    let second = session.begin_reveal(&mut rng).unwrap();

    session.commit_reveal(first, &mut rng).unwrap();
    let err = session.commit_reveal(second, &mut rng).unwrap_err();
    assert_eq!(err, SessionError::RevealOvertaken { expected: 0, actual: 1 });
    assert_eq!(err.code(), "reveal_overtaken");
    assert_eq!(session.pool().called().len(), 1);
}

#[test]
fn reveal_commit_while_paused_is_rejected() {
    let (mut session, mut rng) = playing_session(3, 12);
    let reveal = session.begin_reveal(&mut rng).unwrap();
    session.pause_round().unwrap();

    assert!(matches!(
        session.commit_reveal(reveal, &mut rng),
        Err(SessionError::WrongPhase { .. })
    ));
    assert!(session.pool().called().is_empty());
}

// -----------------------------
// ОТМЕТКИ
// -----------------------------

#[test]
fn mark_rejections_leave_state_untouched() {
    let (mut session, mut rng) = playing_session(2, 13);

    assert_eq!(session.mark_number(1, 0), Err(SessionError::InvalidNumber(0)));
    assert_eq!(session.mark_number(1, 91), Err(SessionError::InvalidNumber(91)));

    let on_ticket = session.player(1).unwrap().ticket.numbers().next().unwrap();
    assert_eq!(
        session.mark_number(1, on_ticket),
        Err(SessionError::NumberNotCalled(on_ticket))
    );

    // Вызываем, пока не попадётся номер, которого нет на билете игрока 1.
    let off_ticket = loop {
        let n = call_and_mark(&mut session, &mut rng, &[]).unwrap();
        if !session.player(1).unwrap().ticket.contains(n) {
            break n;
        }
    };
    assert_eq!(
        session.mark_number(1, off_ticket),
        Err(SessionError::NumberNotOnTicket { player_id: 1, number: off_ticket })
    );
    assert_eq!(
        session.mark_number(99, off_ticket),
        Err(SessionError::PlayerNotFound(99))
    );
    assert!(session.player(1).unwrap().marked.is_empty());
}

#[test]
fn re_marking_is_rejected_not_duplicated() {
    let (mut session, mut rng) = playing_session(2, 14);
    call_until(&mut session, &mut rng, &[1], |s| {
        !s.player(1).unwrap().marked.is_empty()
    });
    let n = *session.player(1).unwrap().marked.iter().next().unwrap();

    assert_eq!(
        session.mark_number(1, n),
        Err(SessionError::AlreadyMarked { player_id: 1, number: n })
    );
    assert_eq!(session.player(1).unwrap().marked.len(), 1);
}

// -----------------------------
// ЗАЯВКИ
// -----------------------------

#[test]
fn full_house_claim_awards_twenty_five() {
    let (mut session, mut rng) = playing_session(3, 15);
    call_until(&mut session, &mut rng, &[1], |s| {
        pattern_ready(s, 1, Pattern::FullHouse)
    });
    assert_eq!(session.player(1).unwrap().marked.len(), 15);
    session.drain_events();

    let outcome = session.claim_pattern(1, Pattern::FullHouse).unwrap();
    assert_eq!(
        outcome,
        ClaimOutcome::Won { pattern: Pattern::FullHouse, points: Points(25) }
    );

    let p = session.player(1).unwrap();
    assert!(p.has_won(Pattern::FullHouse));
    assert_eq!(p.points, Points(25));
    assert_eq!(session.winners().len(), 1);
    assert_eq!(session.winners()[0].pattern, Pattern::FullHouse);
    assert_eq!(session.winners()[0].player_id, 1);
    assert!(session.ledger().is_claimed(Pattern::FullHouse));

    let events = session.drain_events();
    assert!(events.iter().any(|e| matches!(
        &e.kind,
        SessionEventKind::PatternWon { player_id: 1, pattern: Pattern::FullHouse, points: Points(25), .. }
    )));
}

#[test]
fn false_early_five_disqualifies_only_that_pattern() {
    let (mut session, mut rng) = playing_session(3, 16);
    call_until(&mut session, &mut rng, &[1], |s| {
        s.player(1).unwrap().marked.len() == 3
    });
    session.drain_events();

    let outcome = session.claim_pattern(1, Pattern::EarlyFive).unwrap();
    assert_eq!(outcome, ClaimOutcome::FalseClaim { pattern: Pattern::EarlyFive });

    let p = session.player(1).unwrap();
    assert!(p.disqualified);
    assert!(p.is_disqualified_for(Pattern::EarlyFive));
    assert_eq!(p.points, Points::ZERO);
    assert!(!session.ledger().is_claimed(Pattern::EarlyFive));
    assert!(session.winners().is_empty());

    let events = session.drain_events();
    assert!(events.iter().any(|e| matches!(
        &e.kind,
        SessionEventKind::FalseClaim { player_id: 1, pattern: Pattern::EarlyFive, .. }
    )));

    // Повторная заявка того же паттерна — отказ без изменений.
    assert_eq!(
        session.claim_pattern(1, Pattern::EarlyFive),
        Err(SessionError::DisqualifiedForPattern { player_id: 1, pattern: Pattern::EarlyFive })
    );

    // Другой игрок всё ещё может выиграть Early Five.
    call_until(&mut session, &mut rng, &[1, 2], |s| {
        pattern_ready(s, 2, Pattern::EarlyFive)
    });
    assert_eq!(
        session.claim_pattern(2, Pattern::EarlyFive),
        Ok(ClaimOutcome::Won { pattern: Pattern::EarlyFive, points: Points(10) })
    );
}

#[test]
fn disqualified_player_can_still_win_other_patterns() {
    let (mut session, mut rng) = playing_session(2, 17);

    // Ложная заявка сразу, без отметок.
    assert_eq!(
        session.claim_pattern(1, Pattern::FourCorners),
        Ok(ClaimOutcome::FalseClaim { pattern: Pattern::FourCorners })
    );

    call_until(&mut session, &mut rng, &[1], |s| {
        pattern_ready(s, 1, Pattern::TopLine)
    });
    assert_eq!(
        session.claim_pattern(1, Pattern::TopLine),
        Ok(ClaimOutcome::Won { pattern: Pattern::TopLine, points: Points(15) })
    );
    assert_eq!(session.player(1).unwrap().points, Points(15));
    assert!(session.player(1).unwrap().disqualified);
}

#[test]
fn second_claim_of_won_pattern_is_a_no_op() {
    let (mut session, mut rng) = playing_session(2, 18);
    call_until(&mut session, &mut rng, &[1], |s| {
        pattern_ready(s, 1, Pattern::EarlyFive)
    });
    session.claim_pattern(1, Pattern::EarlyFive).unwrap();

    let points = session.player(1).unwrap().points;
    let winners = session.winners().len();
    session.drain_events();

    assert_eq!(
        session.claim_pattern(1, Pattern::EarlyFive),
        Err(SessionError::PatternAlreadyClaimed(Pattern::EarlyFive))
    );
    assert_eq!(session.player(1).unwrap().points, points);
    assert_eq!(session.winners().len(), winners);
    assert!(session.drain_events().is_empty());
}

#[test]
fn only_one_winner_per_pattern() {
    let (mut session, mut rng) = playing_session(2, 19);
    call_until(&mut session, &mut rng, &[1, 2], |s| {
        pattern_ready(s, 1, Pattern::EarlyFive) && pattern_ready(s, 2, Pattern::EarlyFive)
    });

    session.claim_pattern(1, Pattern::EarlyFive).unwrap();
    assert_eq!(
        session.claim_pattern(2, Pattern::EarlyFive),
        Err(SessionError::PatternAlreadyClaimed(Pattern::EarlyFive))
    );

    let p2 = session.player(2).unwrap();
    assert_eq!(p2.points, Points::ZERO);
    assert!(!p2.disqualified);
    assert_eq!(session.winners().len(), 1);
}

#[test]
fn unknown_pattern_name_is_rejected() {
    let (mut session, _) = playing_session(2, 20);

    assert_eq!(
        session.claim_pattern_by_name(1, "superLine"),
        Err(SessionError::UnknownPattern("superLine".to_string()))
    );
    assert!(!session.player(1).unwrap().disqualified);

    assert_eq!(
        session.claim_pattern_by_name(1, "earlyFive"),
        Ok(ClaimOutcome::FalseClaim { pattern: Pattern::EarlyFive })
    );
}

#[test]
fn completed_patterns_drop_after_global_claim() {
    let (mut session, mut rng) = playing_session(2, 21);
    call_until(&mut session, &mut rng, &[1, 2], |s| {
        pattern_ready(s, 1, Pattern::EarlyFive) && pattern_ready(s, 2, Pattern::EarlyFive)
    });

    assert!(session.completed_patterns(2).unwrap().contains(&Pattern::EarlyFive));
    session.claim_pattern(1, Pattern::EarlyFive).unwrap();
    assert!(!session.completed_patterns(2).unwrap().contains(&Pattern::EarlyFive));
    assert_eq!(session.completed_patterns(42), Err(SessionError::PlayerNotFound(42)));
}

#[test]
fn leaderboard_sorts_by_points() {
    let (mut session, mut rng) = playing_session(3, 22);
    call_until(&mut session, &mut rng, &[2], |s| {
        pattern_ready(s, 2, Pattern::EarlyFive)
    });
    session.claim_pattern(2, Pattern::EarlyFive).unwrap();

    let board = session.leaderboard();
    assert_eq!(board.len(), 3);
    assert_eq!(board[0].player_id, 2);
    assert_eq!(board[0].rank, 1);
    assert_eq!(board[0].points, Points(10));
    assert_eq!(board[0].won_patterns, vec![Pattern::EarlyFive]);
    // Равные очки — порядок мест.
    assert_eq!(board[1].player_id, 1);
    assert_eq!(board[2].player_id, 3);
}

#[test]
fn event_indexes_are_continuous_across_drains() {
    let (mut session, mut rng) = playing_session(2, 23);
    session.call_next_number(&mut rng).unwrap();
    let first = session.drain_events();
    session.call_next_number(&mut rng).unwrap();
    let second = session.drain_events();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].index, first[0].index + 1);
}

// -----------------------------
// СВОЙСТВА
// -----------------------------

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // called ∪ available = 1..=90, без пересечений, при любом seed и числе вызовов.
        #[test]
        fn pool_stays_a_partition(seed in any::<u64>(), calls in 0usize..=95) {
            let (mut session, mut rng) = playing_session(2, seed);
            for _ in 0..calls {
                if session.phase() != GamePhase::Playing {
                    prop_assert!(session.call_next_number(&mut rng).is_err());
                    continue;
                }
                session.call_next_number(&mut rng).unwrap();
            }

            let pool = session.pool();
            let mut all: Vec<Number> = pool.called().iter().chain(pool.available()).copied().collect();
            all.sort_unstable();
            prop_assert_eq!(all, (1..=90).collect::<Vec<Number>>());
            prop_assert_eq!(pool.called().len(), calls.min(90));
            prop_assert_eq!(session.phase() == GamePhase::Ended, calls > 90);
        }
    }
}
