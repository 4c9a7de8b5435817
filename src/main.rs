use anyhow::Result;
use clap::Parser;

mod cli;

use cli::commands::orders::{OrdersCommand, SetStatusCommand};
use cli::commands::submit::SubmitCommand;
use cli::commands::{show_how_to_get_started, Command};
use cli::{Cli, Commands};
use shipdesk::{config, init_telemetry};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = config()?;
    init_telemetry(&settings.observability)?;

    tokio::runtime::Runtime::new()?.block_on(async {
        match cli.command {
            // Default behavior: no subcommand - explain how to get started
            None => show_how_to_get_started().await,
            Some(Commands::Orders {
                search,
                status,
                priority,
                view,
                json,
            }) => {
                OrdersCommand::new(search, status, priority)
                    .with_view(view)
                    .with_json(json)
                    .execute()
                    .await
            }
            Some(Commands::SetStatus {
                order_id,
                status,
                view,
            }) => SetStatusCommand::new(order_id, status).with_view(view).execute().await,
            Some(Commands::Submit { set, file }) => SubmitCommand::new(set, file).execute().await,
            Some(Commands::Validate { set, file }) => {
                SubmitCommand::new(set, file)
                    .validate_only(true)
                    .execute()
                    .await
            }
        }
    })
}
