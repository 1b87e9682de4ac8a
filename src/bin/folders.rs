use anyhow::{Context, Result};
use clap::Parser;
use folders_tools::cli::FoldersCli;
use folders_tools::logging::setup_logging;
use folders_tools::tags::{edit_tags, DiskRelocator};
use std::env;

fn main() -> Result<()> {
    let cli = FoldersCli::parse();

    setup_logging("info", cli.verbose, cli.quiet);

    let cwd = env::current_dir().context("Could not determine the working directory")?;
    let (edit, paths) = cli.command.into_edit();

    tracing::debug!("Applying {:?} to {} path(s)", edit, paths.len());
    edit_tags(&edit, &paths, &mut DiskRelocator, &cwd)?;

    Ok(())
}
