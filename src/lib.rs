pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod report;
pub mod services;
pub mod swiss;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Cli;
use serde::Serialize;

use crate::cli::{Command, TournamentAction};
use crate::config::settings::AppConfig;
use crate::services::tournament::TournamentService;
use crate::swiss::Outcome;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_config(database: Option<&str>) -> AppConfig {
    match database {
        Some(path) => AppConfig::new().with_database_path(path),
        None => AppConfig::new(),
    }
}

pub fn open_service(config: AppConfig) -> Result<TournamentService> {
    Ok(TournamentService::open(config)?)
}

pub fn handle_init(service: &TournamentService) -> Result<()> {
    service.reset_schema()?;
    println!("Initialized {}", service.config().database.path);
    Ok(())
}

pub fn handle_register(service: &TournamentService, name: &str) -> Result<()> {
    let player = service.register_player(name)?;
    println!("Registered {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_count(service: &TournamentService) -> Result<()> {
    println!("{}", service.count_players()?);
    Ok(())
}

pub fn handle_report(
    service: &TournamentService,
    tournament: Option<i64>,
    player1: i64,
    player2: i64,
    outcome: Outcome,
) -> Result<()> {
    let result = service.report_match(tournament, player1, player2, outcome)?;
    println!("Recorded match {} ({})", result.id, result.outcome);
    Ok(())
}

pub fn handle_standings(service: &TournamentService, tournament: Option<i64>, json: bool) -> Result<()> {
    let standings = service.compute_standings(tournament)?;
    if json {
        return print_json(&standings);
    }
    print!("{}", report::render_standings(&standings));
    Ok(())
}

pub fn handle_pairings(service: &TournamentService, json: bool) -> Result<()> {
    let pairings = service.compute_next_round_pairings()?;
    if json {
        return print_json(&pairings);
    }
    print!("{}", report::render_pairings(&pairings));
    Ok(())
}

pub fn handle_history(service: &TournamentService, player: i64, json: bool) -> Result<()> {
    let history = service.player_history(player)?;
    if json {
        return print_json(&history);
    }
    print!("{}", report::render_history(&history));
    Ok(())
}

pub fn handle_tournament(service: &TournamentService, action: &TournamentAction) -> Result<()> {
    match action {
        TournamentAction::Create { name } => {
            let tournament = service.create_tournament(name)?;
            println!("Created tournament {} with id {}", tournament.name, tournament.id);
        }
        TournamentAction::List => {
            print!("{}", report::render_tournaments(&service.list_tournaments()?));
        }
    }
    Ok(())
}

pub fn handle_clear_matches(service: &TournamentService) -> Result<()> {
    let removed = service.delete_matches()?;
    println!("Deleted {removed} matches");
    Ok(())
}

pub fn handle_clear_players(service: &TournamentService) -> Result<()> {
    let removed = service.delete_players()?;
    println!("Deleted {removed} players");
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

pub fn execute_command(cli: &Cli) -> Result<()> {
    if let Command::Completions { shell } = &cli.command {
        return handle_completions(*shell);
    }

    let service = open_service(build_config(cli.database.as_deref()))?;
    match &cli.command {
        Command::Init => handle_init(&service),
        Command::Register { name } => handle_register(&service, name),
        Command::Count => handle_count(&service),
        Command::Report { player1, player2, outcome, tournament } => {
            handle_report(&service, *tournament, *player1, *player2, *outcome)
        }
        Command::Standings { tournament, json } => handle_standings(&service, *tournament, *json),
        Command::Pairings { json } => handle_pairings(&service, *json),
        Command::History { player, json } => handle_history(&service, *player, *json),
        Command::Tournament { action } => handle_tournament(&service, action),
        Command::ClearMatches => handle_clear_matches(&service),
        Command::ClearPlayers => handle_clear_players(&service),
        Command::Completions { shell } => handle_completions(*shell),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
