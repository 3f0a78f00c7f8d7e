use std::path::PathBuf;

use auto_assign::{models::PullRequestEvent, AutoAssignor};
use structopt::StructOpt;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let opt = auto_assign::cli::Opt::from_args();

    let github_token = std::env::var("GITHUB_TOKEN").unwrap_or_else(|_| {
        eprintln!("Please provide a GITHUB_TOKEN");

        std::process::exit(1);
    });

    let event_path = opt.event.or_else(|| std::env::var_os("GITHUB_EVENT_PATH").map(PathBuf::from));
    let event_path = event_path.unwrap_or_else(|| {
        eprintln!("Please provide an event payload path via --event or GITHUB_EVENT_PATH");

        std::process::exit(1);
    });

    let payload = std::fs::read_to_string(&event_path)?;
    let event: PullRequestEvent = serde_json::from_str(&payload)?;
    info!(
        action = %event.action,
        number = event.number,
        repository = %event.repository.name,
        "handling pull_request event"
    );

    let assignor = AutoAssignor::new(Some(github_token))?;
    assignor.handle_pull_request(&event, &opt.config).await?;

    Ok(())
}
