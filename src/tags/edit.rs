use super::relocate::{move_if, MoveError, Moved, Relocator};
use super::{ParseError, TaggedPath};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// A tag change applied to every path of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEdit {
    Add(String),
    Remove(String),
    Rename { old: String, new: String },
}

impl TagEdit {
    /// Apply the edit in memory. Returns `false` when the path should be
    /// left alone.
    pub fn apply(&self, tagged: &mut TaggedPath) -> bool {
        match self {
            TagEdit::Add(tag) => {
                tagged.add_tag(tag);
                true
            }
            TagEdit::Remove(tag) => {
                tagged.remove_tag(tag);
                true
            }
            TagEdit::Rename { old, new } => tagged.rename_tag(old, new),
        }
    }
}

/// Apply `edit` to each path in turn, renaming files on disk.
///
/// Stops at the first error. Renames already done are kept. Returns the
/// number of files that were actually renamed.
pub fn edit_tags<R>(
    edit: &TagEdit,
    paths: &[PathBuf],
    relocator: &mut R,
    cwd: &Path,
) -> Result<usize, EditError>
where
    R: Relocator + ?Sized,
{
    let mut renamed = 0;

    for path in paths {
        let mut tagged = TaggedPath::parse(path, cwd)?;

        if !edit.apply(&mut tagged) {
            tracing::debug!("Skipping {}: no matching tag", path.display());
            continue;
        }

        match move_if(relocator, path, &tagged.path(), cwd)? {
            Moved::Renamed => renamed += 1,
            Moved::Unchanged => tracing::debug!("{} is already up to date", path.display()),
        }
    }

    tracing::debug!("Renamed {} of {} file(s)", renamed, paths.len());
    Ok(renamed)
}
