//! Tic-tac-toe - terminal shell for the minimax engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command, EngineArgs};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tictactoe_engine::{
    Board, Difficulty, EngineConfig, Game, GameStatus, Player, Position, Pruning, Session,
    search, select_move,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            engine,
            human_second,
            two_player,
        } => run_play(engine, human_second, two_player),
        Command::Suggest {
            board,
            engine,
            scores,
        } => run_suggest(&board, engine, scores),
        Command::Selfplay {
            games,
            x,
            o,
            config,
            seed,
        } => run_selfplay(games, x, o, config, seed),
    }
}

/// Loads the config file (or defaults) and applies flag overrides.
#[instrument]
fn load_config(
    config: Option<PathBuf>,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
) -> Result<EngineConfig> {
    let mut loaded = match config {
        Some(path) => EngineConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(difficulty) = difficulty {
        loaded = loaded.with_difficulty(difficulty);
    }
    if seed.is_some() {
        loaded = loaded.with_seed(seed);
    }
    loaded.validate()?;
    debug!(?loaded, "Effective config");
    Ok(loaded)
}

/// Run an interactive game on stdin/stdout
fn run_play(engine: EngineArgs, human_second: bool, two_player: bool) -> Result<()> {
    let mut config = load_config(engine.config, engine.difficulty, engine.seed)?;
    if human_second {
        config = config.with_automated_player(Player::X).with_two_player(false);
    }
    if two_player {
        config = config.with_two_player(true);
    }

    let mut session = Session::new(&config)?;
    info!(difficulty = %session.difficulty(), "Starting game");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = std::io::stdout();

    println!("Enter a cell as 0-8, \"row,col\" or a label (e.g. center). \"reset\" or \"quit\".");
    loop {
        if let Some(pos) = session.respond()? {
            println!("Engine plays {}", pos);
        }

        println!("\n{}\n", session.state().board());
        let status = *session.state().status();
        match status {
            GameStatus::InProgress => {
                print!("{} to move> ", session.state().current_player());
            }
            GameStatus::Won { line, .. } => {
                let cells: Vec<_> = line.iter().map(|p| p.to_index().to_string()).collect();
                println!("{} (line {}). Type reset or quit.", status, cells.join("-"));
                print!("> ");
            }
            GameStatus::Draw => {
                println!("Draw! Type reset or quit.");
                print!("> ");
            }
        }
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        match input.trim() {
            "quit" | "q" | "exit" => break,
            "reset" | "r" => {
                session.reset();
                continue;
            }
            text => {
                let Some(pos) = Position::from_label_or_number(text) else {
                    println!("Unrecognized cell: {:?}", text);
                    continue;
                };
                let (row, col) = pos.coords();
                if !session.play(row, col) {
                    println!("{} is not playable.", pos);
                }
            }
        }
    }

    Ok(())
}

/// Print the engine's move for a given board
fn run_suggest(board: &str, engine: EngineArgs, scores: bool) -> Result<()> {
    let config = load_config(engine.config, engine.difficulty, engine.seed)?;
    let board: Board = board.parse().context("parsing board")?;

    let x = board.count(Player::X);
    let o = board.count(Player::O);
    let player = match x.checked_sub(o) {
        Some(0) => Player::X,
        Some(1) => Player::O,
        _ => bail!("not a reachable board: {} X marks and {} O marks", x, o),
    };

    let mut rng = config.rng();
    let pos = select_move(&board, player, *config.difficulty(), &config.tuning()?, &mut rng)?;
    println!("{}", board);
    println!("{} plays {}", player, pos);

    if scores && let Some(outcome) = search(&board, player, Pruning::AlphaBeta) {
        for (pos, score) in outcome.scores() {
            println!("  {:>20} {:>4}", pos.to_string(), score);
        }
        println!("  searched {} nodes", outcome.nodes());
    }
    Ok(())
}

/// Let two engines play each other
fn run_selfplay(
    games: u32,
    x: Difficulty,
    o: Difficulty,
    config: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let config = load_config(config, None, seed)?;
    let tuning = config.tuning()?;
    let mut rng = config.rng();

    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);
    for _ in 0..games {
        let mut game = Game::new();
        while !game.state().status().is_terminal() {
            let difficulty = match game.state().current_player() {
                Player::X => x,
                Player::O => o,
            };
            let pos = game.select_move(difficulty, &tuning, &mut rng)?;
            game.try_place(pos)?;
        }
        match game.state().status().winner() {
            Some(Player::X) => x_wins += 1,
            Some(Player::O) => o_wins += 1,
            None => draws += 1,
        }
    }

    info!(games, x_wins, o_wins, draws, "Self-play finished");
    println!("X ({}) wins: {}", x, x_wins);
    println!("O ({}) wins: {}", o, o_wins);
    println!("Draws: {}", draws);
    Ok(())
}
