use crate::tags::TagEdit;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folders")]
#[command(about = "Command-line conveniences for working with Folders")]
#[command(version, propagate_version = true)]
pub struct FoldersCli {
    /// Increase verbosity (use multiple times for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce output to errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: TagCommand,
}

#[derive(Subcommand)]
pub enum TagCommand {
    /// Add tag to one-or-more files
    AddTag {
        /// Tag to add
        #[arg(value_parser = parse_tag)]
        tag: String,
        /// Path of file to update
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Remove tags from one-or-more files
    RemoveTag {
        /// Tag to remove
        #[arg(value_parser = parse_tag)]
        tag: String,
        /// Path of file to update
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Rename a tag for one-or-more files
    RenameTag {
        /// Tag to rename
        #[arg(value_parser = parse_tag)]
        old: String,
        /// New name
        #[arg(value_parser = parse_tag)]
        new: String,
        /// Path of file to update
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

impl TagCommand {
    /// Split into the edit to perform and the paths to perform it on.
    pub fn into_edit(self) -> (TagEdit, Vec<PathBuf>) {
        match self {
            TagCommand::AddTag { tag, paths } => (TagEdit::Add(tag), paths),
            TagCommand::RemoveTag { tag, paths } => (TagEdit::Remove(tag), paths),
            TagCommand::RenameTag { old, new, paths } => (TagEdit::Rename { old, new }, paths),
        }
    }
}

/// Tags live in filenames as ` #tag`, so they cannot be empty or contain
/// whitespace.
pub fn parse_tag(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("tag cannot be empty".to_string());
    }
    if value.chars().any(char::is_whitespace) {
        return Err(format!("tag '{}' cannot contain whitespace", value));
    }
    Ok(value.to_string())
}

#[derive(Parser)]
#[command(name = "latest-release")]
#[command(
    about = "Get the URL for an asset from the latest GitHub release matching a pattern"
)]
#[command(version)]
pub struct LatestReleaseCli {
    /// Increase verbosity (use multiple times for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Reduce output to errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Repository owner (e.g., 'nektos')
    pub owner: String,

    /// Repository name (e.g., 'act')
    pub repository: String,

    /// Glob matched against asset names (e.g., '*_Linux_x86_64.tar.gz')
    pub pattern: String,
}
