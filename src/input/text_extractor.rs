//! Best-effort text extraction from uploaded file contents
//!
//! Extractors never fail: malformed content yields whatever text could be
//! recovered, possibly an empty string.

use crate::input::file_detector::FileType;
use log::warn;
use pulldown_cmark::{Event, Parser, Tag};
use std::panic::{self, AssertUnwindSafe};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> String;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> String {
        // pdf-extract panics on some malformed inputs
        match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Failed to extract text from PDF: {}", e);
                String::new()
            }
            Err(_) => {
                warn!("PDF parser aborted on malformed input");
                String::new()
            }
        }
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, bytes: &[u8]) -> String {
        let markdown = String::from_utf8_lossy(bytes);
        let mut text = String::new();

        for event in Parser::new(&markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(
                    Tag::Paragraph
                    | Tag::Heading(..)
                    | Tag::Item
                    | Tag::CodeBlock(_)
                    | Tag::BlockQuote
                    | Tag::TableCell,
                ) => text.push('\n'),
                _ => {}
            }
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Route `bytes` to the extractor for `file_type`; unknown types yield no text
pub fn extract_for(file_type: FileType, bytes: &[u8]) -> String {
    match file_type {
        FileType::Pdf => PdfExtractor.extract(bytes),
        FileType::Text => PlainTextExtractor.extract(bytes),
        FileType::Markdown => MarkdownExtractor.extract(bytes),
        FileType::Unknown => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_strips_formatting() {
        let md = b"# Jane Roe\n\n**Senior** Rust engineer\n\n- Tokio\n- `serde`\n";
        let text = MarkdownExtractor.extract(md);

        assert!(text.contains("Jane Roe"));
        assert!(text.contains("Senior Rust engineer"));
        assert!(text.contains("serde"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_plain_text_is_lossy() {
        let text = PlainTextExtractor.extract(b"rust \xFF developer");
        assert!(text.starts_with("rust "));
        assert!(text.ends_with(" developer"));
    }

    #[test]
    fn test_malformed_pdf_yields_empty_text() {
        assert_eq!(PdfExtractor.extract(b"not a pdf at all"), "");
        assert_eq!(PdfExtractor.extract(b""), "");
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(extract_for(FileType::Unknown, b"anything"), "");
    }
}
