//! Filename tags
//!
//! A tagged file carries its tags as `#token` suffixes between the
//! identifier and the extension, e.g. `Holiday #beach #2019.jpg`. The
//! filename is the only tag store: editing a tag means renaming the file.

pub mod edit;
pub mod paths;
pub mod relocate;

pub use edit::{edit_tags, EditError, TagEdit};
pub use relocate::{move_if, DiskRelocator, MoveError, Moved, Relocator};

use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)((?:\s+#\S+)*)$").expect("name pattern is valid")
});
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+#(\S+)").expect("tag pattern is valid"));

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Failed to parse '{}'.", .path.display())]
pub struct ParseError {
    pub path: PathBuf,
}

/// A path split into directory, identifier, tag set and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedPath {
    directory: PathBuf,
    identifier: String,
    tags: BTreeSet<String>,
    extension: String,
}

impl TaggedPath {
    /// Parse `path`, resolving it against `cwd` first.
    pub fn parse(path: &Path, cwd: &Path) -> Result<Self, ParseError> {
        let error = || ParseError {
            path: path.to_path_buf(),
        };

        let absolute = paths::absolutize(path, cwd);
        let base_name = absolute
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(error)?;
        let directory = absolute.parent().ok_or_else(error)?.to_path_buf();

        let (name, extension) = paths::split_extension(base_name);
        let captures = NAME_REGEX.captures(name).ok_or_else(error)?;
        let identifier = captures.get(1).ok_or_else(error)?.as_str();
        let tag_suffix = captures.get(2).map_or("", |m| m.as_str());

        let tags = TAG_REGEX
            .captures_iter(tag_suffix)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        Ok(Self {
            directory,
            identifier: identifier.to_string(),
            tags,
            extension: extension.to_string(),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn add_tag(&mut self, tag: &str) {
        self.tags.insert(tag.to_string());
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.remove(tag);
    }

    /// Swap `old` for `new`. Returns `false`, leaving the tags alone, when
    /// `old` is not present.
    pub fn rename_tag(&mut self, old: &str, new: &str) -> bool {
        if !self.tags.remove(old) {
            return false;
        }
        self.tags.insert(new.to_string());
        true
    }

    /// Canonical base name: identifier, sorted tags, extension.
    pub fn file_name(&self) -> String {
        let mut name = self.identifier.clone();
        for tag in &self.tags {
            name.push_str(" #");
            name.push_str(tag);
        }
        name.push_str(&self.extension);
        name
    }

    /// Canonical absolute path.
    pub fn path(&self) -> PathBuf {
        self.directory.join(self.file_name())
    }
}

impl fmt::Display for TaggedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}
