//! Writing exported CSV text to disk.
//!
//! Content goes to a hidden temporary file in the target directory first and
//! is renamed into place once fully written, so a reader never sees a
//! half-written export. The temporary file is removed on failure.

use std::io::Write;
use std::path::{Path, PathBuf};

use shelf_core::ExportError;

/// Write `content` to `dir/file_name` atomically and return the final path.
///
/// `file_name` must name a file directly inside `dir`.
pub fn write_export(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, ExportError> {
    let plain = Path::new(file_name).file_name().and_then(|n| n.to_str());
    if plain != Some(file_name) {
        return Err(ExportError::InvalidFileName(file_name.to_string()));
    }
    let target = dir.join(file_name);
    let tmp = dir.join(format!(".{file_name}.tmp"));

    std::fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;

    if let Err(e) = write_synced(&tmp, content.as_bytes()) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_error(&tmp, e));
    }
    if let Err(e) = std::fs::rename(&tmp, &target) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_error(&target, e));
    }

    log::debug!("Wrote {} bytes to {}", content.len(), target.display());
    Ok(target)
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn io_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_file_and_leaves_no_temp() {
        let tmp = TempDir::new().unwrap();
        let path = write_export(tmp.path(), "library_export.csv", "Title\nDune\n").unwrap();

        assert_eq!(path, tmp.path().join("library_export.csv"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Title\nDune\n");
        let names: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn overwrites_previous_export() {
        let tmp = TempDir::new().unwrap();
        write_export(tmp.path(), "out.csv", "old").unwrap();
        let path = write_export(tmp.path(), "out.csv", "new").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("exports").join("2026");
        let path = write_export(&dir, "out.csv", "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn file_name_must_stay_in_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("exports");
        for name in ["../escape.csv", "/tmp/abs.csv", "sub/out.csv", "..", ""] {
            let err = write_export(&dir, name, "x").unwrap_err();
            assert!(matches!(err, ExportError::InvalidFileName(_)), "{name}");
        }
        assert!(!dir.exists());
        assert!(!tmp.path().join("escape.csv").exists());
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let tmp = TempDir::new().unwrap();
        // A non-empty directory at the target path makes the rename fail.
        let blocker = tmp.path().join("out.csv");
        std::fs::create_dir(&blocker).unwrap();
        std::fs::write(blocker.join("keep"), "x").unwrap();

        let err = write_export(tmp.path(), "out.csv", "data").unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(!tmp.path().join(".out.csv.tmp").exists());
    }
}
