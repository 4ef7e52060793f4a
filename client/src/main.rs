mod command;
mod config;
mod game_loop;
mod ui;

use std::io;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{Board, GameMode, TicTacToeGameState};
use common::{log, logger};

use config::get_config_manager;
use game_loop::GameLoop;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    TwoPlayer,
    VersusComputer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
            ModeArg::VersusComputer => GameMode::VersusComputer,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe for two players or against the computer")]
struct Args {
    /// YAML config file; defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Seed for the computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Starting position, e.g. "XX. .O. ..O"
    #[arg(long)]
    board: Option<String>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Client".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting {} game with seed {}", config.mode, rng.seed());

    let state = match args.board {
        Some(text) => {
            let board: Board = text.parse()?;
            TicTacToeGameState::from_board(config.settings(), board)?
        }
        None => TicTacToeGameState::new(config.settings())?,
    };

    let mut game_loop = GameLoop::new(state, rng, config.players);
    game_loop.run(io::stdin().lock(), io::stdout().lock())?;

    log!("Exiting");
    Ok(())
}
