use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Name of the git metadata directory that marks a repo root
pub const GIT_DIR_NAME: &str = ".git";

/// Why no repo root could be found
#[derive(Debug, Error)]
pub enum LocateError {
    /// No `.git` directory in `start` or any of its parents
    #[error("not a git repository (or any parent up to mount point): {}", .start.display())]
    NotFound { start: PathBuf },
    /// `start` couldn't be made absolute, e.g. the current directory is gone
    #[error("unable to resolve {}", .path.display())]
    InvalidStart {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Walk up from `start` and return the nearest directory containing a `.git` directory.
///
/// `start` itself is checked first. A `.git` file (worktrees, submodules) or a
/// symlink named `.git` does not count as a repo root.
pub fn find_repo_root<P: AsRef<Path>>(start: P) -> Result<PathBuf, LocateError> {
    let start = start.as_ref();
    let mut current = absolute(start)?;

    loop {
        if is_git_dir(&current.join(GIT_DIR_NAME)) {
            debug!("Found repo root at {}", current.display());
            return Ok(current);
        }

        // `parent()` is None once we hit the filesystem root
        let parent = if let Some(parent) = current.parent() {
            parent.to_path_buf()
        } else {
            return Err(LocateError::NotFound {
                start: start.to_path_buf(),
            });
        };

        current = parent;
    }
}

fn absolute(path: &Path) -> Result<PathBuf, LocateError> {
    let absolute = std::path::absolute(path).map_err(|source| LocateError::InvalidStart {
        path: path.to_path_buf(),
        source,
    })?;

    // Drop `.` and `..` lexically. Symlinks stay as given so we only ever
    // walk the parents of the path the caller asked about.
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    Ok(normalized)
}

fn is_git_dir(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
