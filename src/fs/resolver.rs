//! URL path resolution module
//!
//! Maps a request's URL path onto the base directory and classifies the
//! target before any operation runs. Classification happens exactly once per
//! request; the dispatcher never re-derives it mid-handling.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// What the resolved path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A regular file
    File,
    /// A directory
    Directory,
    /// Nothing usable: missing, inaccessible, or an entry type the server
    /// does not serve (device, socket, ...)
    Absent,
}

/// Resolution result handed to the dispatcher.
#[derive(Debug)]
pub struct Resolved {
    /// Absolute filesystem path under the base directory
    pub path: PathBuf,
    pub classification: Classification,
    /// Underlying cause when the target is `Absent`
    pub cause: Option<io::Error>,
}

/// Resolve a URL path against the base directory and classify the target.
///
/// Resolution is lexical: `.` segments are dropped and any `..` segment
/// rejects the whole path, so a request can never name anything outside the
/// base directory. Rejected paths come back as `Err` and never reach the
/// filesystem.
pub fn resolve(base: &Path, url_path: &str) -> io::Result<Resolved> {
    let relative = sanitize(url_path).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::PermissionDenied,
            "path escapes base directory",
        )
    })?;

    let path = base.join(relative);
    let (classification, cause) = classify(&path);
    Ok(Resolved {
        path,
        classification,
        cause,
    })
}

/// Lexically clean a URL path into a relative path under the base.
fn sanitize(url_path: &str) -> Option<PathBuf> {
    let trimmed = url_path.trim_start_matches('/');
    let mut clean = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(clean)
}

/// Query metadata once and classify the target.
///
/// Follows symlinks, so a link to a regular file classifies as `File`.
fn classify(path: &Path) -> (Classification, Option<io::Error>) {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => (Classification::Directory, None),
        Ok(meta) if meta.is_file() => (Classification::File, None),
        Ok(_) => (
            Classification::Absent,
            Some(io::Error::new(
                io::ErrorKind::InvalidInput,
                "unsupported file type",
            )),
        ),
        Err(err) => (Classification::Absent, Some(err)),
    }
}
