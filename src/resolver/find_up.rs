//! Ancestor directory search.
//!
//! Walks from a starting directory through successive parents looking for a
//! named subdirectory, optionally capped by a bound directory.

use std::path::{Component, Path, PathBuf};

use crate::fs;

/// Lexically normalize `path` to a fully-qualified form: resolved against
/// the process working directory when relative, `.`/`..` squashed, no
/// trailing separator.
///
/// Returns `None` when the path is relative and the working directory is
/// unavailable.
pub fn normalize(path: &Path) -> Option<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::Normal(part) => normalized.push(part),
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
        }
    }
    Some(normalized)
}

/// Compare two paths ASCII case-insensitively.
///
/// Used only for the bound check, accommodating case-insensitive
/// filesystems; directory-name composition elsewhere is exact.
fn paths_equal_fold(a: &Path, b: &Path) -> bool {
    a.as_os_str().eq_ignore_ascii_case(b.as_os_str())
}

/// Search from `start` upward for the nearest directory containing a child
/// directory named `target`, returning that child's path.
///
/// When `bound` is set the search stops after testing the bound directory's
/// own candidate: the bound is inclusive of its own `target` child but the
/// search never continues above it. Without a bound the search stops at the
/// filesystem root.
pub async fn find_up(start: &Path, target: &str, bound: Option<&Path>) -> Option<PathBuf> {
    let mut current = normalize(start)?;
    loop {
        let candidate = current.join(target);
        if fs::dir_exists(&candidate).await {
            return Some(candidate);
        }
        if let Some(bound) = bound {
            if paths_equal_fold(&current, bound) {
                return None;
            }
        }
        current = current.parent()?.to_path_buf();
    }
}
