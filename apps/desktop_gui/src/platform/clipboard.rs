use arboard::Clipboard;
use color_core::ClipboardSink;
use shared::error::{ClipboardError, ClipboardErrorKind};

/// OS clipboard via arboard. A handle is opened per write, so a clipboard
/// that is unavailable at startup can still work later.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = Clipboard::new()
            .map_err(|err| ClipboardError::new(ClipboardErrorKind::Unavailable, err.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| ClipboardError::new(classify_arboard_error(&err), err.to_string()))
    }
}

fn classify_arboard_error(err: &arboard::Error) -> ClipboardErrorKind {
    match err {
        arboard::Error::ClipboardNotSupported => ClipboardErrorKind::Unavailable,
        arboard::Error::ClipboardOccupied => ClipboardErrorKind::PermissionDenied,
        _ => ClipboardErrorKind::WriteFailed,
    }
}
