//! Crash-safe file writes for the message log.

use guestbook_core::GuestbookResult;
use std::path::Path;

/// Replace `path` with `data` atomically.
///
/// The bytes land in a temp file in the same directory (same filesystem, so
/// the rename is atomic on POSIX) and are renamed over the target. A crash
/// mid-write leaves the previous log intact.
pub async fn write_atomic(path: &Path, data: &[u8]) -> GuestbookResult<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let temp = tempfile::NamedTempFile::new_in(parent)?;
    let temp_path = temp.path().to_path_buf();

    tokio::fs::write(&temp_path, data).await?;
    tokio::fs::rename(&temp_path, path).await?;

    tracing::debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Read the whole file, or `None` if it does not exist yet.
pub async fn read_if_exists(path: &Path) -> GuestbookResult<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(data) => Ok(Some(data)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.json");

        write_atomic(&path, b"[1,2,3]").await.unwrap();
        let data = read_if_exists(&path).await.unwrap();
        assert_eq!(data.as_deref(), Some(&b"[1,2,3]"[..]));
    }

    #[tokio::test]
    async fn second_write_replaces_the_first() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.json");

        write_atomic(&path, b"first").await.unwrap();
        write_atomic(&path, b"second").await.unwrap();

        let data = read_if_exists(&path).await.unwrap();
        assert_eq!(data.as_deref(), Some(&b"second"[..]));
    }

    #[tokio::test]
    async fn missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(read_if_exists(&path).await.unwrap().is_none());
    }
}
