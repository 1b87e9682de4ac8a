//! Command-line conveniences for working with Folders.
//!
//! Two independent tools live here:
//! - `folders`: manages `#tag` suffixes embedded in filenames
//! - `latest-release`: prints the download URL of a release asset matching a glob

pub mod cli;
pub mod config;
pub mod logging;
pub mod release;
pub mod tags;
pub mod types;
