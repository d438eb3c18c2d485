use anyhow::Result;

use goal_tally::cli::{Cli, Command};
use goal_tally::{
    handle_completions, handle_home, handle_leaderboard, handle_player, handle_players,
    handle_records, interpret, Options,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let options = Options::from(cli);
    match &cli.command {
        Command::Home => handle_home(&options),
        Command::Leaderboard { period, limit } => handle_leaderboard(&options, *period, *limit),
        Command::Players { period } => handle_players(&options, *period),
        Command::Player { id } => handle_player(&options, id),
        Command::Records => handle_records(&options),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
