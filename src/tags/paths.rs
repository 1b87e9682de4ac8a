//! Lexical path helpers. Nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against `cwd`, folding `.` and `..` without
/// resolving symlinks.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Render `path` relative to `base`, climbing with `..` where needed.
///
/// Both paths are expected to be absolute. Paths that share no root are
/// returned unchanged.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_components: Vec<Component> = path.components().collect();
    let base_components: Vec<Component> = base.components().collect();

    let common = path_components
        .iter()
        .zip(&base_components)
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 {
        return path.to_path_buf();
    }

    let mut relative = PathBuf::new();
    for _ in common..base_components.len() {
        relative.push("..");
    }
    for component in &path_components[common..] {
        relative.push(component);
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}

/// Split a base name into stem and extension at the last `.`, ignoring
/// leading dots. The extension keeps its separator.
pub fn split_extension(base_name: &str) -> (&str, &str) {
    match base_name.rfind('.') {
        Some(index) if base_name[..index].chars().any(|c| c != '.') => {
            base_name.split_at(index)
        }
        _ => (base_name, ""),
    }
}
