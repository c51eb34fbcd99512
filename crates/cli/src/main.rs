use std::{env, process};

use api_client::ApiClient;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::{
    cli_interface::{Cli, Commands},
    commands::{demo, get, post},
    console::print_error_message,
    environment::{load_env, resolve_client_config},
    error::CliError,
    logger::{setup_info_logger, setup_logger},
};

mod cli_interface;
mod commands;
mod console;
mod environment;
mod error;
mod logger;

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = resolve_client_config(&cli.connection, |key| env::var(key).ok())?;
    let client = ApiClient::with_config(config);

    match &cli.command {
        Commands::Get { endpoint, query } => get::handle_get(&client, endpoint, query).await?,
        Commands::Post { endpoint, data } => post::handle_post(&client, endpoint, data).await?,
        Commands::Demo => demo::handle_demo(&client).await,
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    load_env();

    if cli.verbose {
        setup_logger(LevelFilter::DEBUG);
    } else {
        setup_info_logger();
    }

    if let Err(e) = run(cli).await {
        print_error_message(&e.to_string());
        process::exit(1);
    }
}
