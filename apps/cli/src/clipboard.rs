//! Clipboard sinks for headless sessions.

use std::{fs, path::PathBuf};

use color_core::ClipboardSink;
use shared::error::{ClipboardError, ClipboardErrorKind};

/// Reports copies through the log only.
pub struct LogClipboard;

impl ClipboardSink for LogClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        tracing::info!(text, "clipboard write");
        Ok(())
    }
}

/// Overwrites a file with each copied value, standing in for a system
/// clipboard when scripting.
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ClipboardSink for FileClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        fs::write(&self.path, text).map_err(|err| {
            let kind = match err.kind() {
                std::io::ErrorKind::PermissionDenied => ClipboardErrorKind::PermissionDenied,
                std::io::ErrorKind::NotFound => ClipboardErrorKind::Unavailable,
                _ => ClipboardErrorKind::WriteFailed,
            };
            ClipboardError::new(
                kind,
                format!("failed to write '{}': {err}", self.path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_clipboard_accepts_every_write() {
        let mut clipboard = LogClipboard;
        assert!(clipboard.write_text("gradient").is_ok());
    }

    #[test]
    fn file_clipboard_keeps_latest_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("clipboard.txt");
        let mut clipboard = FileClipboard::new(path.clone());

        clipboard.write_text("red").expect("first write");
        clipboard.write_text("gradient").expect("second write");
        assert_eq!(fs::read_to_string(path).expect("read back"), "gradient");
    }

    #[test]
    fn file_clipboard_reports_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut clipboard = FileClipboard::new(dir.path().join("missing").join("clip.txt"));

        let err = clipboard.write_text("red").expect_err("no parent dir");
        assert_eq!(err.kind, ClipboardErrorKind::Unavailable);
    }
}
