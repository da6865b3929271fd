//! UNIX-style filesystem operations
//!
//! The `cat`, `ls` and `touch` primitives behind the HTTP verbs. Errors are
//! returned raw; translating them into HTTP outcomes is the handler's job.

use std::io;
use std::path::Path;
use tokio::fs::{self, OpenOptions};

/// Read a whole regular file into memory, `cat` style.
pub async fn cat(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path).await
}

/// List a directory's direct children, one name per line.
///
/// Names come out in whatever order the OS returns them; no sort is applied.
pub async fn ls(path: &Path) -> io::Result<Vec<u8>> {
    let mut entries = fs::read_dir(path).await?;
    let mut listing = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        listing.extend_from_slice(entry.file_name().as_encoded_bytes());
        listing.push(b'\n');
    }
    Ok(listing)
}

/// Create an empty file, failing if anything already exists at `path`.
///
/// `create_new` is the atomic create-if-absent primitive: when two requests
/// race on the same absent path, exactly one open succeeds and the loser
/// observes `AlreadyExists`.
pub async fn touch(path: &Path) -> io::Result<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_cat_returns_exact_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello\n").unwrap();

        let data = cat(&path).await.unwrap();
        assert_eq!(data, b"hello\n");
    }

    #[tokio::test]
    async fn test_cat_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = cat(&dir.path().join("missing.txt")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_ls_covers_direct_children() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let listing = ls(dir.path()).await.unwrap();
        let mut names: Vec<&str> = std::str::from_utf8(&listing)
            .unwrap()
            .lines()
            .collect();
        names.sort_unstable();
        assert_eq!(names, ["a.txt", "b.txt", "sub"]);
    }

    #[tokio::test]
    async fn test_ls_empty_directory_is_empty_body() {
        let dir = tempdir().unwrap();
        let listing = ls(dir.path()).await.unwrap();
        assert!(listing.is_empty());
    }

    #[tokio::test]
    async fn test_touch_creates_zero_byte_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.txt");

        touch(&path).await.unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.is_file());
        assert_eq!(meta.len(), 0);
    }

    #[tokio::test]
    async fn test_touch_is_create_new() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.txt");

        touch(&path).await.unwrap();
        let err = touch(&path).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }
}
