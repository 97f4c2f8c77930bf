use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use n_in_a_row::config::{AppConfig, Difficulty, GameConfig, GameKind};
use n_in_a_row::game::{Addressing, Board, FreePlacement, GravityDrop};
use n_in_a_row::ui::App;

/// Play Tic-Tac-Toe or Connect Four style games against a friend or the computer.
#[derive(Parser)]
#[command(name = "n-in-a-row", about = "N-in-a-row grid games with a computer opponent")]
struct Cli {
    /// Game family: tic-tac-toe (place anywhere) or connect-four (drop into columns)
    #[arg(long, value_enum)]
    game: Option<GameKind>,

    /// Number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Marks in a row needed to win
    #[arg(long)]
    win: Option<usize>,

    /// Number of human players: 0, 1 or 2
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=2))]
    players: u8,

    /// Path to TOML configuration file
    #[arg(long, default_value = "n-in-a-row.toml")]
    config: PathBuf,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Monte-Carlo thinking time per move, in milliseconds
    #[arg(long)]
    think_ms: Option<u64>,

    /// Computer strength on boards small enough to search
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(kind) = cli.game {
        config.game = GameConfig::for_kind(kind);
    }
    if let Some(rows) = cli.rows {
        config.game.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.game.columns = columns;
    }
    if let Some(win) = cli.win {
        config.game.win_length = win;
    }
    if let Some(seed) = cli.seed {
        config.ai.seed = Some(seed);
    }
    if let Some(millis) = cli.think_ms {
        config.ai.think_time_ms = millis;
    }
    if let Some(difficulty) = cli.difficulty {
        config.ai.difficulty = difficulty;
    }

    if let Err(err) = config.game.validate() {
        warn!("rejected board {:?}: {err}", config.game);
        println!("{err}. A default game will be generated.");
        config.game = GameConfig::for_kind(config.game.kind);
    }
    config.validate().context("validating configuration")?;

    match config.game.kind {
        GameKind::TicTacToe => run::<FreePlacement>(&config, cli.players),
        GameKind::ConnectFour => run::<GravityDrop>(&config, cli.players),
    }
}

fn run<A: Addressing>(config: &AppConfig, players: u8) -> Result<()> {
    let game = &config.game;
    let board = Board::<A>::new(game.rows, game.columns, game.win_length)
        .context("creating board")?;
    println!(
        "{}: {}x{} board, {} in a row to win.",
        board.addressing().name(),
        game.rows,
        game.columns,
        game.win_length
    );

    let stdin = io::stdin();
    let mut app = App::new(board, config.ai.clone(), players, stdin.lock(), io::stdout());
    app.run().context("running game session")?;
    Ok(())
}
