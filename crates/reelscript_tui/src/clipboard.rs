//! Clipboard sink using the OSC 52 terminal escape.
//!
//! The terminal emulator owns the system clipboard; writing
//! `ESC ] 52 ; c ; <base64> BEL` asks it to store the payload. Terminals
//! without OSC 52 support ignore the sequence.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reelscript_error::ClipboardError;
use reelscript_interface::ClipboardSink;
use std::io::Write;

/// Copies text by writing an OSC 52 sequence to a terminal stream.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write + Send> {
    out: W,
}

impl Osc52Clipboard<std::io::Stdout> {
    /// Clipboard writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    /// Clipboard writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// The escape sequence that places `text` on the clipboard.
    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

impl<W: Write + Send> ClipboardSink for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out
            .write_all(Self::sequence(text).as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| ClipboardError::new(format!("Failed to write clipboard escape: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_base64_payload_between_osc_markers() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.copy("hello").unwrap();

        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(written, "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn encodes_arabic_text_as_utf8() {
        let sequence = Osc52Clipboard::<Vec<u8>>::sequence("مرحبا");
        let payload = sequence
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .unwrap();

        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "مرحبا");
    }
}
