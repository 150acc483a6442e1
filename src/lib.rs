pub mod api;
pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod errors;
pub mod http;
pub mod services;

use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::api::ChallongeClient;
use crate::cli::{Cli, Command};
use crate::config::{ClientSettings, Credentials};
use crate::services::QueryService;

pub use crate::api::{MatchFilter, TournamentFilter, TournamentIncludes, TournamentRef};
pub use crate::errors::ClientError;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

pub fn handle_query(cli: &Cli) -> Result<()> {
    let credentials = credentials_from(cli)?;
    let settings = ClientSettings::from_env().with_format(cli.format);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = ChallongeClient::with_settings(credentials, &settings)?;
        let service = QueryService::new(client);
        service.run(&cli.command).await
    })
}

fn credentials_from(cli: &Cli) -> Result<Credentials> {
    let username = cli
        .username
        .clone()
        .context("Missing username: pass --username or set CHALLONGE_USERNAME")?;
    let api_key = cli
        .api_key
        .clone()
        .context("Missing API key: pass --api-key or set CHALLONGE_API_KEY")?;
    Ok(Credentials::new(username, api_key))
}

pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Completions { shell } => handle_completions(*shell),
        _ => handle_query(cli),
    }
}
