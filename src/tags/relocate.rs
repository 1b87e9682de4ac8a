//! Moving files to their canonical tagged names.

use super::paths::{absolutize, relative_to};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoveError {
    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),
    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of [`move_if`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moved {
    Unchanged,
    Renamed,
}

/// The filesystem operations needed to apply a rename.
pub trait Relocator {
    fn exists(&self, path: &Path) -> bool;
    fn relocate(&mut self, source: &Path, destination: &Path) -> io::Result<()>;
}

/// Moves files on the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskRelocator;

impl Relocator for DiskRelocator {
    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks count as occupied.
        std::fs::symlink_metadata(path).is_ok()
    }

    fn relocate(&mut self, source: &Path, destination: &Path) -> io::Result<()> {
        if let Err(err) = std::fs::rename(source, destination) {
            // Can't rename across filesystem boundaries, copy and delete
            // instead.
            #[cfg(windows)]
            let cross_device = 17;
            #[cfg(not(windows))]
            let cross_device = 18;

            if err.raw_os_error() == Some(cross_device) {
                std::fs::copy(source, destination)?;
                std::fs::remove_file(source)?;
                return Ok(());
            }
            return Err(err);
        }
        Ok(())
    }
}

/// Move `source` to `destination` unless they are the same path.
///
/// Both paths are made absolute against `cwd` first. An existing
/// destination is never overwritten.
pub fn move_if<R>(
    relocator: &mut R,
    source: &Path,
    destination: &Path,
    cwd: &Path,
) -> Result<Moved, MoveError>
where
    R: Relocator + ?Sized,
{
    let source = absolutize(source, cwd);
    let destination = absolutize(destination, cwd);

    if source == destination {
        return Ok(Moved::Unchanged);
    }

    if relocator.exists(&destination) {
        return Err(MoveError::DestinationExists(destination));
    }

    tracing::info!(
        "{} -> {}",
        relative_to(&source, cwd).display(),
        relative_to(&destination, cwd).display()
    );

    relocator
        .relocate(&source, &destination)
        .map_err(|source_err| MoveError::Io {
            from: source,
            to: destination,
            source: source_err,
        })?;

    Ok(Moved::Renamed)
}


#[cfg(test)]
mod tests {
    use super::fake::FakeRelocator;
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_same_path_is_noop() {
        let mut relocator = FakeRelocator::with_files(["/dir/a.txt"]);
        let moved = move_if(
            &mut relocator,
            Path::new("a.txt"),
            Path::new("/dir/./a.txt"),
            Path::new("/dir"),
        )
        .unwrap();

        assert_eq!(moved, Moved::Unchanged);
        assert!(relocator.moves.is_empty());
    }

    #[test]
    fn test_moves_to_free_destination() {
        let mut relocator = FakeRelocator::with_files(["/dir/a.txt"]);
        let moved = move_if(
            &mut relocator,
            Path::new("a.txt"),
            Path::new("/dir/a #x.txt"),
            Path::new("/dir"),
        )
        .unwrap();

        assert_eq!(moved, Moved::Renamed);
        assert!(relocator.exists(Path::new("/dir/a #x.txt")));
        assert!(!relocator.exists(Path::new("/dir/a.txt")));
    }

    #[test]
    fn test_existing_destination_is_conflict() {
        let mut relocator = FakeRelocator::with_files(["/dir/a.txt", "/dir/a #x.txt"]);
        let err = move_if(
            &mut relocator,
            Path::new("/dir/a.txt"),
            Path::new("/dir/a #x.txt"),
            Path::new("/dir"),
        )
        .unwrap_err();

        assert!(matches!(err, MoveError::DestinationExists(ref p) if p == Path::new("/dir/a #x.txt")));
        assert!(relocator.moves.is_empty());
        assert_eq!(relocator.files.len(), 2);
    }

    #[test]
    fn test_relocate_failure_is_io_error() {
        let mut relocator = FakeRelocator::default();
        let err = move_if(
            &mut relocator,
            Path::new("/dir/missing.txt"),
            Path::new("/dir/missing #x.txt"),
            Path::new("/dir"),
        )
        .unwrap_err();

        assert!(matches!(err, MoveError::Io { .. }));
    }

    #[test]
    fn test_disk_relocator_guards_existing_file() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("a.txt");
        let destination = temp.path().join("a #x.txt");
        fs::write(&source, "source").unwrap();
        fs::write(&destination, "destination").unwrap();

        let err = move_if(&mut DiskRelocator, &source, &destination, temp.path()).unwrap_err();

        assert!(matches!(err, MoveError::DestinationExists(_)));
        assert_eq!(fs::read_to_string(&source).unwrap(), "source");
        assert_eq!(fs::read_to_string(&destination).unwrap(), "destination");
    }

    #[test]
    fn test_disk_relocator_moves_file() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("a.txt");
        let destination = temp.path().join("a #x.txt");
        fs::write(&source, "content").unwrap();

        let moved = move_if(&mut DiskRelocator, &source, &destination, temp.path()).unwrap();

        assert_eq!(moved, Moved::Renamed);
        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&destination).unwrap(), "content");
    }
}
