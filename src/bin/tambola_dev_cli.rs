// src/bin/tambola_dev_cli.rs

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tambola_engine::domain::{Pattern, SessionConfig, Ticket, COLUMN_COUNT};
use tambola_engine::engine::{CallOutcome, SessionEvent, SessionEventKind};
use tambola_engine::infra::RngSeed;
use tambola_engine::Session;

/// Dev-CLI: прогоняет целую игру с автоматическими игроками.
#[derive(Debug, Parser)]
#[command(name = "tambola_dev_cli", about = "Simulate a full Tambola game")]
struct Args {
    /// JSON-конфиг сессии.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Количество игроков (зажимается в 2..=10).
    #[arg(long)]
    players: Option<usize>,

    /// Seed для воспроизводимой игры.
    #[arg(long)]
    seed: Option<u64>,

    /// Игрок, который в начале раунда ложно заявит Early Five.
    #[arg(long)]
    bluffer: Option<u32>,

    /// Печатать билеты перед началом раунда.
    #[arg(long, default_value_t = false)]
    show_tickets: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SessionConfig::from_json_file(path)?,
        None => SessionConfig::default(),
    };
    if let Some(players) = args.players {
        config.player_count = players;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    // Без seed берём случайный и печатаем: игру всегда можно повторить.
    let base_seed = config.seed.unwrap_or_else(rand::random::<u64>);
    println!("tambola_dev_cli: seed={}", base_seed);

    let player_count = config.clamped_player_count();
    let mut session = Session::new(config);

    let seed = RngSeed::from_u64(base_seed);
    let mut ticket_rng = seed.derive(session.generation() + 1, 0).to_rng();
    session.setup_session(player_count, &mut ticket_rng)?;
    let mut call_rng = seed.derive(session.generation(), 1).to_rng();

    if args.show_tickets {
        for p in session.players() {
            println!("\n{} (id={})", p.name, p.id);
            print_ticket(&p.ticket);
        }
    }

    session.begin_round()?;
    print_events(session.drain_events());

    if let Some(bluffer) = args.bluffer {
        if let Err(err) = session.claim_pattern(bluffer, Pattern::EarlyFive) {
            println!("  Заявка игрока {} отклонена: {}", bluffer, err);
        }
    }

    loop {
        let reveal = session.begin_reveal(&mut call_rng)?;
        let outcome = session.commit_reveal(reveal, &mut call_rng)?;

        let number = match outcome {
            CallOutcome::Called(number) => number,
            CallOutcome::Exhausted => {
                print_events(session.drain_events());
                break;
            }
        };

        // Автоигроки: отмечают номер и заявляют всё, что собрано.
        let ids: Vec<u32> = session.players().iter().map(|p| p.id).collect();
        for player_id in ids {
            let on_ticket = session
                .player(player_id)
                .map(|p| p.ticket.contains(number))
                .unwrap_or(false);
            if on_ticket {
                session.mark_number(player_id, number)?;
            }

            for pattern in session.completed_patterns(player_id)? {
                session.claim_pattern(player_id, pattern)?;
            }
        }

        print_events(session.drain_events());
    }

    println!("\n================ LEADERBOARD =================");
    for entry in session.leaderboard() {
        let patterns: Vec<&str> = entry.won_patterns.iter().map(|p| p.display_name()).collect();
        println!(
            "#{} {:<10} {:>4} pts | {}{}",
            entry.rank,
            entry.name,
            entry.points,
            patterns.join(", "),
            if entry.disqualified { " (false claim)" } else { "" }
        );
    }

    Ok(())
}

fn print_events(events: Vec<SessionEvent>) {
    for event in events {
        match event.kind {
            SessionEventKind::NumberCalled { number, nickname } => match nickname {
                Some(nick) => println!("[{:>3}] {} — \"{}\"", event.index, number, nick),
                None => println!("[{:>3}] {}", event.index, number),
            },
            SessionEventKind::PatternWon {
                player_name,
                pattern,
                points,
                ..
            } => println!("      WINNER: {} — {} (+{})", player_name, pattern, points),
            SessionEventKind::FalseClaim {
                player_name,
                pattern,
                ..
            } => println!("      FALSE CLAIM: {} снят с {}", player_name, pattern),
            SessionEventKind::GameEnded => println!("\nВсе 90 номеров вызваны."),
            SessionEventKind::RoundStarted => println!("\nРаунд начался!"),
            SessionEventKind::NumberMarked { .. } => {}
            other => println!("      {:?}", other),
        }
    }
}

fn print_ticket(ticket: &Ticket) {
    for row in ticket.rows() {
        let cells: Vec<String> = (0..COLUMN_COUNT)
            .map(|c| match row[c] {
                Some(n) => format!("{:>2}", n),
                None => " .".to_string(),
            })
            .collect();
        println!("  | {} |", cells.join(" | "));
    }
}
