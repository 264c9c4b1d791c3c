//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::FileSystem;
use std::fs::OpenOptions;
use std::path::Path;

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(|e| {
            Error::io_msg(format!(
                "Failed to create directory '{}': {}",
                path.display(),
                e
            ))
        })
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::io_msg(format!("Failed to open '{}': {}", path.display(), e)))?;
        Ok(Box::new(f))
    }

    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        std::fs::read_to_string(path)
            .map_err(|e| Error::io_msg(format!("Failed to read '{}': {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_append_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.log");
        let fs = StdFileSystem;
        {
            let mut w = fs.open_append(&path).unwrap();
            use std::io::Write;
            w.write_all(b"one\n").unwrap();
        }
        {
            let mut w = fs.open_append(&path).unwrap();
            use std::io::Write;
            w.write_all(b"two\n").unwrap();
        }
        assert_eq!(fs.read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let fs = StdFileSystem;
        let err = fs
            .read_to_string(Path::new("/nonexistent/raha/file"))
            .unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }
}
