use anyhow::Result;
use clap::Parser;
use folders_tools::cli::LatestReleaseCli;
use folders_tools::config::Settings;
use folders_tools::logging::setup_logging;
use folders_tools::release::{resolve_latest_asset_url, GitHubClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = LatestReleaseCli::parse();

    setup_logging("warn", cli.verbose, cli.quiet);

    let client = GitHubClient::new(Settings::from_env());
    let url = resolve_latest_asset_url(&client, &cli.owner, &cli.repository, &cli.pattern).await?;

    println!("{}", url);
    Ok(())
}
