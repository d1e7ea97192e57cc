//! gassist - command-line front end for the game assistant service

mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use gassist_client::{ApiOutcome, AppDestroyRequest, AppMsgRequest, AssistantClient};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{Cli, Command};

/// Exit status when the service answered with a failure code
const EXIT_APPLICATION_FAILURE: u8 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.client_config()?;
    debug!(
        base_url = %config.base_url,
        success_codes = %config.success_codes,
        "Client configured"
    );
    let client = AssistantClient::new(config)?;

    run(&client, &cli.command).await
}

async fn run(client: &AssistantClient, command: &Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Health => report(client.health_check().await?),
        Command::List => report(client.get_app_list().await?),
        Command::Create { virtual_name, .. } => {
            info!("Creating app {}", virtual_name);
            let request = command
                .app_config_request()
                .ok_or_else(|| anyhow::anyhow!("create command without config"))?;
            report(client.create_app(&request).await?)
        }
        Command::Destroy { virtual_name } => {
            info!("Destroying app {}", virtual_name);
            report(client.destroy_app(&AppDestroyRequest::new(virtual_name)).await?)
        }
        Command::Msg { virtual_name, msg } => {
            report(client.send_message(&AppMsgRequest::new(virtual_name, msg)).await?)
        }
        Command::Action { virtual_name, action, .. } => {
            info!("Triggering action {} on {}", action, virtual_name);
            let request = command
                .action_request()
                .ok_or_else(|| anyhow::anyhow!("action command without request"))?;
            report(client.execute_action(&request).await?)
        }
        Command::Status { virtual_name } => report(client.get_action_status(virtual_name).await?),
        Command::AppConfigs => report(client.list_app_configs().await?),
        Command::TaskConfigs { task_type } => {
            report(client.list_task_configs(task_type.as_deref()).await?)
        }
    }
}

/// Print the payload as JSON on stdout, or the failure on stderr
fn report<T: Serialize>(outcome: ApiOutcome<T>) -> anyhow::Result<ExitCode> {
    match outcome {
        ApiOutcome::Success(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(ExitCode::SUCCESS)
        }
        ApiOutcome::Failure(failure) => {
            eprintln!(
                "service returned {} (code={}): {}",
                failure.status, failure.code, failure.message
            );
            Ok(ExitCode::from(EXIT_APPLICATION_FAILURE))
        }
    }
}
