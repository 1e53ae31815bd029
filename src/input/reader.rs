use anyhow::{Context, Result, bail};
use std::io::{self, Read};

/// Largest message accepted from stdin.
pub const MAX_INPUT_SIZE: usize = 64 * 1024; // 64KB

pub struct InputReader;

impl InputReader {
    /// Returns `message` if given, otherwise reads the whole of stdin.
    pub fn read(message: Option<String>) -> Result<String> {
        message.map_or_else(|| Self::read_from(io::stdin().lock()), Ok)
    }

    fn read_from<R: Read>(mut reader: R) -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];

        loop {
            let bytes_read = reader
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Input size ({:.1} KB) exceeds maximum allowed size (64 KB).",
                    buffer.len() as f64 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_prefers_explicit_message() {
        let content = InputReader::read(Some("Hello".to_string())).unwrap();
        assert_eq!(content, "Hello");
    }

    #[test]
    fn test_read_from_stream() {
        let content = InputReader::read_from(Cursor::new("I want to open an account\n")).unwrap();
        assert_eq!(content, "I want to open an account\n");
    }

    #[test]
    fn test_read_from_unicode() {
        let text = "こんにちは世界！🌍";
        let content = InputReader::read_from(Cursor::new(text)).unwrap();
        assert_eq!(content, text);
    }

    #[test]
    fn test_read_from_empty() {
        let content = InputReader::read_from(Cursor::new("")).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_read_from_at_max_size() {
        let text = "x".repeat(MAX_INPUT_SIZE);
        let content = InputReader::read_from(Cursor::new(text)).unwrap();
        assert_eq!(content.len(), MAX_INPUT_SIZE);
    }

    #[test]
    fn test_read_from_exceeds_max_size() {
        let text = "x".repeat(MAX_INPUT_SIZE + 1);
        let result = InputReader::read_from(Cursor::new(text));
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_from_invalid_utf8() {
        let result = InputReader::read_from(Cursor::new(vec![0xff, 0xfe, 0xfd]));
        assert!(result.unwrap_err().to_string().contains("UTF-8"));
    }
}
