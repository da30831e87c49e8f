mod config;
mod console;
mod watch;

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use tictactoe_common::games::tictactoe::{
    FileResultLog, FirstPlayerMode, MAX_MATCHES, MatchError, Tournament,
};
use tictactoe_common::{log, logger};

use config::{CONFIG_FILE, Validate, get_config_manager};
use console::{ConsoleInput, ConsoleResultLog, ConsoleView, Renderer};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstArg {
    Player,
    Ai,
    Alternate,
    Random,
    Ask,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Player => FirstPlayerMode::Player,
            FirstArg::Ai => FirstPlayerMode::Ai,
            FirstArg::Alternate => FirstPlayerMode::Alternate,
            FirstArg::Random => FirstPlayerMode::Random,
            FirstArg::Ask => FirstPlayerMode::Ask,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Tic-tac-toe tournament against a perfect AI")]
struct Args {
    /// Games per tournament; asked interactively when omitted
    #[arg(long)]
    matches: Option<u32>,

    /// Who opens each game
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// File the tournament results are appended to
    #[arg(long)]
    result_log: Option<String>,

    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Let the AI play both sides
    #[arg(long)]
    watch: bool,

    /// Show the value of every free cell before each move
    #[arg(long)]
    hints: bool,

    /// Diagnostic log on stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some("Console".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let mut config = get_config_manager(&args.config).get_config()?;
    if let Some(matches) = args.matches {
        config.tournament.matches = matches;
    }
    if let Some(first) = args.first {
        config.tournament.first_player = first.into();
    }
    if let Some(result_log) = args.result_log {
        config.tournament.result_log = result_log;
    }
    config.show_hints |= args.hints;
    config.validate()?;
    log!("Loaded config from {}: {:?}", args.config, config);

    let renderer = Renderer {
        player_symbol: config.player_symbol,
        ai_symbol: config.ai_symbol,
    };

    println!("\n-------------------------------------------------------------------\n");
    println!("\t\tWelcome to Tic-Tac-Toe Tournament");
    println!("\n-------------------------------------------------------------------\n");

    if args.watch {
        let stdout = io::stdout();
        watch::run_self_play(config.tournament.matches, renderer, &mut stdout.lock())?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout(), renderer, config.show_hints);
    let mut view = ConsoleView::new(io::stdout(), renderer);
    let mut sink = ConsoleResultLog::new(
        FileResultLog::new(&config.tournament.result_log),
        io::stdout(),
    );

    loop {
        let matches = match args.matches {
            Some(matches) => matches,
            None => match input.read_match_count(config.tournament.matches, MAX_MATCHES) {
                Ok(matches) => matches,
                Err(MatchError::InputClosed) => break,
                Err(e) => return Err(e.into()),
            },
        };
        input.show_instructions()?;

        let mut tournament = Tournament::new(matches, config.tournament.first_player);
        match tournament.run(&mut input, &mut view, &mut sink) {
            Ok(_) => {}
            Err(MatchError::InputClosed) => break,
            Err(e) => return Err(e.into()),
        }

        match input.ask_play_again() {
            Ok(true) => {}
            Ok(false) | Err(MatchError::InputClosed) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("\nThanks for playing!");
    io::stdout().flush()?;
    Ok(())
}
