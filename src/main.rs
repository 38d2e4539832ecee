#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_solo::{
    init_logging,
    ui::{coord_to_string, describe_result, parse_coord, render_player_view, winner_banner},
    EngineError, GameEngine, Session, TurnEvent, CELL_COUNT, DEFAULT_PLAYER_NAME,
    OPPONENT_TURN_DELAY,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use tokio::io::{AsyncBufReadExt, BufReader};
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Display name; prompted for when omitted")]
        name: Option<String>,
        #[arg(long, help = "Pause before the computer answers, in milliseconds")]
        delay_ms: Option<u64>,
    },
    /// Pit a random shooter against the computer and print JSON results.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    match cli.command {
        Commands::Play {
            seed,
            name,
            delay_ms,
        } => {
            let delay = delay_ms.map_or(OPPONENT_TURN_DELAY, Duration::from_millis);
            play(make_rng(seed), name, delay).await?;
        }
        Commands::Sim { seed, games } => {
            let mut rng = make_rng(seed);
            for game in 1..=games {
                let game_rng = SmallRng::from_rng(&mut rng);
                let shooter_rng = SmallRng::from_rng(&mut rng);
                simulate(game, game_rng, shooter_rng)?;
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn play(rng: SmallRng, name: Option<String>, delay: Duration) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let name = match name {
        Some(n) => n,
        None => {
            println!("Enter your name:");
            lines.next_line().await?.unwrap_or_default()
        }
    };
    let name = match name.trim() {
        "" => DEFAULT_PLAYER_NAME.to_string(),
        n => n.to_string(),
    };
    println!("Player: {}", name);

    let engine = GameEngine::new(rng).map_err(|e| anyhow::anyhow!(e))?;
    let (mut session, mut events) = Session::with_delay(engine, delay);
    let shared = session.engine();
    print!("{}", render_player_view(&*shared.lock().await, &name));
    print_help();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                match line.to_ascii_lowercase().as_str() {
                    "" => continue,
                    "quit" | "exit" => break,
                    "help" => print_help(),
                    "restart" => {
                        session.restart().await.map_err(|e| anyhow::anyhow!(e))?;
                        println!("\nNew game.");
                        print!("{}", render_player_view(&*shared.lock().await, &name));
                    }
                    _ => {
                        let index = match parse_coord(line) {
                            Ok(i) => i,
                            Err(msg) => {
                                println!("{}", msg);
                                continue;
                            }
                        };
                        match session.player_attack(index).await {
                            Ok(report) => {
                                println!("You fire at {}: {}", coord_to_string(index), describe_result(report.result));
                                if let Some(winner) = report.winner {
                                    print!("{}", render_player_view(&*shared.lock().await, &name));
                                    println!("\n{}\nType 'restart' to play again or 'quit'.", winner_banner(winner, &name));
                                }
                            }
                            // repeat clicks were a silent no-op in the browser version
                            Err(EngineError::AlreadyAttacked(_)) => {
                                println!("{} was already attacked.", coord_to_string(index));
                            }
                            Err(e) => println!("{}", e),
                        }
                    }
                }
            }
            Some(event) = events.recv() => match event {
                TurnEvent::OpponentMoved { report, .. } => {
                    println!("Computer fires at {}: {}", coord_to_string(report.index), describe_result(report.result));
                    print!("{}", render_player_view(&*shared.lock().await, &name));
                    if let Some(winner) = report.winner {
                        println!("\n{}\nType 'restart' to play again or 'quit'.", winner_banner(winner, &name));
                    }
                }
                TurnEvent::OpponentFailed { error, .. } => {
                    return Err(anyhow::anyhow!(error));
                }
            },
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn print_help() {
    println!("\nCommands:");
    println!("  A1..J10   attack a cell on the computer's grid");
    println!("  restart   start a new game");
    println!("  quit      leave");
}

#[cfg(feature = "std")]
fn simulate(game: u32, rng: SmallRng, mut shooter: SmallRng) -> anyhow::Result<()> {
    let mut engine = GameEngine::new(rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut remaining: Vec<usize> = (0..CELL_COUNT).collect();
    let mut turns = 0usize;

    let winner = loop {
        if remaining.is_empty() {
            return Err(anyhow::anyhow!("shooter ran out of cells in game {}", game));
        }
        turns += 1;
        let index = remaining.swap_remove(shooter.random_range(0..remaining.len()));
        let report = engine
            .player_attack(index)
            .map_err(|e| anyhow::anyhow!(e))?;
        if let Some(winner) = report.winner {
            break winner;
        }
        let reply = engine.opponent_turn().map_err(|e| anyhow::anyhow!(e))?;
        if let Some(winner) = reply.winner {
            break winner;
        }
    };

    let result = serde_json::json!({
        "game": game,
        "winner": winner,
        "turns": turns,
        "player_cells_left": engine.human_fleet().len(),
        "computer_cells_left": engine.opponent_cells_remaining(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
