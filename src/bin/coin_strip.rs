use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use coin_strip::controller::{GameController, Presentation, Snapshot};
use coin_strip::core::{ConfigError, EngineKind, GameConfig, GameMode};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "coin-strip", about = "Play the coin strip game (take 1 or 2, last coin wins)")]
struct Args {
    /// Coins on the strip at the start of each game
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    pile: i64,

    /// Who plays: pvp, pvai (computer is B) or aivp (computer is A)
    #[arg(short, long, default_value = "pvai")]
    mode: GameMode,

    /// Computer engine: heuristic or search
    #[arg(short, long, default_value = "heuristic")]
    engine: EngineKind,

    /// Delay before the computer moves, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// Prints snapshots as a row of coins.
struct Console;

impl Presentation for Console {
    fn render(&mut self, snapshot: &Snapshot) {
        let coins = "o ".repeat(snapshot.pile.min(60) as usize);
        println!();
        println!("  {}({} left)", coins, snapshot.pile);

        match (snapshot.is_over, snapshot.winner) {
            (true, Some(winner)) => println!("  {} wins! Type 'r' to play again.", winner),
            (true, None) => println!("  No coins to play. Type 'r' to restart."),
            (false, _) if snapshot.is_human_turn_next => {
                println!("  {} to move: take 1 or 2.", snapshot.current_player)
            }
            (false, _) => println!("  {} (computer) is thinking...", snapshot.current_player),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Take(u32),
    Restart,
    Mode(GameMode),
    Engine(EngineKind),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, ConfigError> {
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or("");
    let arg = words.next();
    let unknown = || ConfigError::UnknownCommand(line.trim().to_string());

    match (head, arg) {
        ("q" | "quit" | "exit", _) => Ok(Command::Quit),
        ("h" | "help" | "?", _) => Ok(Command::Help),
        ("r" | "restart", _) => Ok(Command::Restart),
        ("mode", Some(m)) => m.parse().map(Command::Mode),
        ("engine", Some(e)) => e.parse().map(Command::Engine),
        (n, None) => n.parse().map(Command::Take).map_err(|_| unknown()),
        _ => Err(unknown()),
    }
}

fn print_help() {
    println!("  1 | 2            take coins");
    println!("  r                restart");
    println!("  mode <m>         pvp, pvai or aivp (restarts)");
    println!("  engine <e>       heuristic or search (restarts)");
    println!("  q                quit");
}

/// Wait out and play any pending computer turn.
fn drain_automated<P: Presentation>(controller: &mut GameController<P>) {
    while let Some(turn) = controller.pending().copied() {
        thread::sleep(turn.remaining(Instant::now()));
        controller.poll(Instant::now());
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "coin_strip=debug" } else { "coin_strip=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = GameConfig::new()
        .with_starting_pile(args.pile)
        .with_mode(args.mode)
        .with_engine(args.engine)
        .with_ai_delay(Duration::from_millis(args.delay_ms));

    println!("Coin strip: take 1 or 2 coins, whoever takes the last coin wins.");
    println!("mode: {}, engine: {}. Type 'h' for help.", config.mode, config.engine);

    let mut controller = GameController::new(config, Console);
    drain_automated(&mut controller);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(),
            Ok(Command::Restart) => controller.request_restart(),
            Ok(Command::Mode(mode)) => controller.request_mode_change(mode),
            Ok(Command::Engine(engine)) => controller.request_engine_change(engine),
            Ok(Command::Take(amount)) => {
                if !controller.request_move(amount) {
                    println!("  Move not allowed.");
                }
            }
            Err(err) => println!("  {}", err),
        }

        drain_automated(&mut controller);
    }

    Ok(())
}
