use clap::{Parser, ValueEnum};
use isolation_engine::config::{get_config_manager, MatchConfig, Validate, DEFAULT_CONFIG_FILE_NAME};
use isolation_engine::isolation::{run_match, BotType, IsolationGameState, MatchOutcome, Turn};
use isolation_engine::{log, logger, SessionRng};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotArg {
    Minimax,
    Random,
    FirstLegal,
}

impl From<BotArg> for BotType {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Minimax => BotType::Minimax,
            BotArg::Random => BotType::Random,
            BotArg::FirstLegal => BotType::FirstLegal,
        }
    }
}

#[derive(Parser)]
#[command(name = "isolation", about = "Plays a game of Isolation between two bots")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    config: String,
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    cols: Option<usize>,
    #[arg(long, value_enum)]
    player_one: Option<BotArg>,
    #[arg(long, value_enum)]
    player_two: Option<BotArg>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
    /// Write the merged settings back to the config file before playing.
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, config: &mut MatchConfig) {
        if let Some(rows) = self.rows {
            config.board.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.board.cols = cols;
        }
        if let Some(bot) = self.player_one {
            config.player_one = bot.into();
        }
        if let Some(bot) = self.player_two {
            config.player_two = bot.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.use_log_prefix && config.log.prefix.is_none() {
            config.log.prefix = Some("Isolation".to_string());
        }
        if self.verbose {
            config.log.verbose = true;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    logger::init_logger(config.log.prefix.clone(), config.log.verbose);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", args.config);
    }

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let initial = IsolationGameState::new(config.board.rows, config.board.cols)?;
    log!(
        "Starting {}x{} game: player 1 = {:?}, player 2 = {:?}, seed {}",
        initial.rows(),
        initial.cols(),
        config.player_one,
        config.player_two,
        rng.seed()
    );
    log!("Initial game board:\n{}", initial);

    let record = run_match(
        initial,
        config.player_one,
        config.player_two,
        &mut rng,
        |turn, state| match turn {
            Turn::Move { player, position } => {
                log!("{} moves to {}:\n{}", player, position, state)
            }
            Turn::Pass { player } => log!("{} has no legal moves and passes", player),
        },
    )?;

    match record.outcome {
        MatchOutcome::PlayerOneWins => log!("Player 1 wins!"),
        MatchOutcome::PlayerTwoWins => log!("Player 2 wins!"),
        MatchOutcome::Draw => log!("Neither player can move. Draw!"),
    }
    log!(
        "Game over after {} turns. Final game board:\n{}",
        record.turns.len(),
        record.final_state
    );

    Ok(())
}
