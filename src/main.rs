use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four_minimax::ai::{Agent, MinimaxAgent, WindowHeuristic};
use connect_four_minimax::config::{AppConfig, Difficulty};
use connect_four_minimax::game::{GameOutcome, GameState, Player};

/// Play Connect Four against an alpha-beta engine in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Named engine strength
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Search depth in plies (overrides --difficulty)
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for the engine's tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Let the engine make the first move
    #[arg(long)]
    engine_first: bool,

    /// Watch the engine play both sides
    #[arg(long)]
    self_play: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(difficulty) = cli.difficulty {
        config.engine.difficulty = difficulty;
        config.engine.depth = None;
    }
    if cli.depth.is_some() {
        config.engine.depth = cli.depth;
    }
    if cli.seed.is_some() {
        config.engine.seed = cli.seed;
    }
    if cli.engine_first {
        config.game.engine_first = true;
    }
    config.validate()?;

    let first = if config.game.engine_first {
        Player::Engine
    } else {
        Player::Human
    };
    let state = GameState::with_board(config.game.board()?, first);

    tracing::info!(
        depth = config.engine.depth(),
        rows = config.game.rows,
        cols = config.game.cols,
        "starting game"
    );

    if cli.self_play {
        let mut engine = build_engine(&config, 0);
        let mut opponent = build_engine(&config, 1);
        self_play(state, &mut opponent, &mut engine)
    } else {
        let mut engine = build_engine(&config, 0);
        play_interactive(state, &mut engine)
    }
}

fn build_engine(config: &AppConfig, seed_offset: u64) -> MinimaxAgent {
    let heuristic = WindowHeuristic::new(config.eval);
    let agent = MinimaxAgent::with_heuristic(config.engine.depth(), Box::new(heuristic))
        .with_pruning(config.engine.pruning);
    match config.engine.seed {
        Some(seed) => agent.with_seed(seed.wrapping_add(seed_offset)),
        None => agent,
    }
}

fn play_interactive(mut state: GameState, engine: &mut MinimaxAgent) -> Result<()> {
    let cols = state.board().cols();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print!("\n{}", state.board());
    while !state.is_terminal() {
        match state.current_player() {
            Player::Human => {
                print!("Choose column (1-{cols}): ");
                io::stdout().flush()?;

                let Some(line) = lines.next() else {
                    println!();
                    return Ok(());
                };
                let line = line.context("reading move from stdin")?;

                let column = match line.trim().parse::<usize>() {
                    Ok(n) if n >= 1 => n - 1,
                    _ => {
                        println!("Enter a number 1-{cols}.");
                        continue;
                    }
                };
                if let Err(err) = state.apply_move_mut(column) {
                    println!("Invalid move ({err}). Try again.");
                    continue;
                }
            }
            Player::Engine => {
                let column = engine.select_action(&state)?;
                state.apply_move_mut(column)?;
                let stats = engine.last_stats();
                tracing::info!(column, nodes = stats.nodes, cutoffs = stats.cutoffs, "engine moved");
                println!("AI plays column {}", column + 1);
            }
        }
        print!("\n{}", state.board());
    }

    announce(&state);
    Ok(())
}

fn self_play(mut state: GameState, human: &mut MinimaxAgent, engine: &mut MinimaxAgent) -> Result<()> {
    print!("\n{}", state.board());
    while !state.is_terminal() {
        let mover = state.current_player();
        let column = match mover {
            Player::Human => human.select_action(&state)?,
            Player::Engine => engine.select_action(&state)?,
        };
        state.apply_move_mut(column)?;
        println!("{} plays column {}", mover.name(), column + 1);
        print!("\n{}", state.board());
    }

    match state.outcome() {
        Some(GameOutcome::Winner(winner)) => println!("{} wins!", winner.name()),
        Some(GameOutcome::Draw) => println!("Draw!"),
        None => {}
    }
    Ok(())
}

fn announce(state: &GameState) {
    match state.outcome() {
        Some(GameOutcome::Winner(Player::Human)) => println!("You win!"),
        Some(GameOutcome::Winner(Player::Engine)) => println!("AI wins!"),
        Some(GameOutcome::Draw) => println!("Draw!"),
        None => {}
    }
}
