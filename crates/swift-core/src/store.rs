//! File persistence seam.
//!
//! The session only talks to files through [`FileStore`], so tests can run
//! the whole command table against an in-memory store.

use std::io;
use std::path::Path;

/// Reads and writes whole files.
pub trait FileStore {
    /// Reads the file at `path` as text.
    fn load(&mut self, path: &Path) -> io::Result<String>;

    /// Replaces the file at `path` with `text`.
    fn save(&mut self, path: &Path, text: &str) -> io::Result<()>;
}

/// [`FileStore`] backed by the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl FileStore for FsStore {
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    fn load(&mut self, path: &Path) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), "file is not valid UTF-8");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        })
    }

    /// Writes to a sibling temporary file first, then renames it over the
    /// target so a failed write never truncates the existing file.
    ///
    /// Symlinks are followed and the target keeps its permissions.
    fn save(&mut self, path: &Path, text: &str) -> io::Result<()> {
        let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let permissions = std::fs::metadata(&target).ok().map(|m| m.permissions());

        let mut temp_name = target.file_name().unwrap_or_default().to_os_string();
        temp_name.push(".swift-tmp");
        let temp_path = target.with_file_name(temp_name);

        let result = write_replacing(&temp_path, &target, text, permissions);
        if result.is_err() {
            let _ = std::fs::remove_file(&temp_path);
        }
        result
    }
}

fn write_replacing(
    temp_path: &Path,
    target: &Path,
    text: &str,
    permissions: Option<std::fs::Permissions>,
) -> io::Result<()> {
    std::fs::write(temp_path, text.as_bytes())?;
    if let Some(permissions) = permissions {
        std::fs::set_permissions(temp_path, permissions)?;
    }
    std::fs::rename(temp_path, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let mut store = FsStore;

        store.save(&path, "one\ntwo").unwrap();
        assert_eq!(store.load(&path).unwrap(), "one\ntwo");

        store.save(&path, "three").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "three");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_fs_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsStore.load(&dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_fs_store_loads_invalid_utf8_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xe9\nok").unwrap();
        assert_eq!(FsStore.load(&path).unwrap(), "caf\u{FFFD}\nok");
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_store_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.sh");
        std::fs::write(&path, "echo hi").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

        FsStore.save(&path, "echo bye").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "echo bye");
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_store_writes_through_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.txt");
        let link = dir.path().join("link.txt");
        std::fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        FsStore.save(&link, "new").unwrap();
        assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read_to_string(&real).unwrap(), "new");
    }

    #[test]
    fn test_fs_store_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/file.txt");
        assert!(FsStore.save(&path, "x").is_err());
        assert!(!path.exists());
    }
}
