//! Text input loading (transcripts and saved summaries)

use std::io::Read;
use std::path::Path;

use crate::{RecapError, Result};

/// Path that means "read from stdin"
pub const STDIN_PATH: &str = "-";

/// Read UTF-8 text from a file, or from stdin for `-`.
///
/// The content is returned unmodified; empty transcripts are allowed.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = if path == Path::new(STDIN_PATH) {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(path).map_err(|e| {
            RecapError::Transcript(format!("Failed to read {}: {}", path.display(), e))
        })?
    };

    String::from_utf8(bytes).map_err(|e| {
        RecapError::Transcript(format!(
            "{} is not valid UTF-8 text (invalid byte at offset {})",
            path.display(),
            e.utf8_error().valid_up_to()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_file_verbatim() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("meeting.txt");
        let text = "  Alice: Let's ship v2 by Friday.\r\nBob: agreed.\n\n";
        std::fs::write(&path, text).unwrap();

        assert_eq!(read_input(&path).unwrap(), text);
    }

    #[test]
    fn empty_file_is_allowed() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        assert_eq!(read_input(&path).unwrap(), "");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("binary.txt");
        std::fs::write(&path, [b'o', b'k', 0xff, 0xfe]).unwrap();

        let err = read_input(&path).unwrap_err();
        assert!(matches!(err, RecapError::Transcript(_)));
        assert!(err.to_string().contains("not valid UTF-8"));
        assert!(err.to_string().contains("offset 2"));
    }

    #[test]
    fn missing_file_is_a_transcript_error() {
        let tmp = tempdir().unwrap();
        let err = read_input(&tmp.path().join("nope.txt")).unwrap_err();

        assert!(matches!(err, RecapError::Transcript(_)));
        assert!(err.to_string().contains("Failed to read"));
    }
}
