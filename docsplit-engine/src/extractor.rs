//! Plain-text extraction from `.docx` packages
//!
//! Text is read from the main document part. Each paragraph contributes the
//! text of its runs followed by a blank line, tabs and line breaks inside a
//! run become `\t` and `\n`. Formatting is discarded.

use crate::error::ExtractionError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// Package path of the main document part
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Appended after every paragraph
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Produces the plain text of a document
pub trait TextExtractor: Send + Sync {
    /// Extract the full text of the document at `path`
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// Extractor for Office Open XML word-processing documents
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract text from an in-memory or on-disk package
    pub fn extract_from_reader<R: Read + Seek>(
        &self,
        reader: R,
    ) -> Result<String, ExtractionError> {
        let mut archive = ZipArchive::new(reader)?;
        let mut part = match archive.by_name(DOCUMENT_PART) {
            Ok(part) => part,
            Err(ZipError::FileNotFound) => return Err(ExtractionError::MissingPart(DOCUMENT_PART)),
            Err(e) => return Err(e.into()),
        };

        let mut xml = String::new();
        part.read_to_string(&mut xml)?;
        text_from_document_xml(&xml)
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let file = File::open(path)?;
        self.extract_from_reader(BufReader::new(file))
    }
}

/// Collect paragraph text from the XML of a main document part
pub fn text_from_document_xml(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::with_capacity(xml.len() / 4);
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = run_depth > 0,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                b"w:p" => text.push_str(PARAGRAPH_BREAK),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => text.push_str(PARAGRAPH_BREAK),
                // tab stops in paragraph properties share the element name
                b"w:tab" if run_depth > 0 => text.push('\t'),
                b"w:br" | b"w:cr" if run_depth > 0 => text.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_text => {
                text.push_str(&e.unescape().map_err(quick_xml::Error::from)?)
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        )
    }

    #[test]
    fn test_paragraphs_are_separated() {
        let xml = document(
            "<w:p><w:r><w:t>Hello</w:t></w:r></w:p><w:p><w:r><w:t>World</w:t></w:r></w:p>",
        );
        assert_eq!(text_from_document_xml(&xml).unwrap(), "Hello\n\nWorld\n\n");
    }

    #[test]
    fn test_runs_are_concatenated() {
        let xml = document(
            r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Bold</w:t></w:r><w:r><w:t xml:space="preserve"> and plain</w:t></w:r></w:p>"#,
        );
        assert_eq!(text_from_document_xml(&xml).unwrap(), "Bold and plain\n\n");
    }

    #[test]
    fn test_tabs_and_breaks() {
        let xml = document(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>"#,
        );
        assert_eq!(text_from_document_xml(&xml).unwrap(), "a\tb\nc\n\n");
    }

    #[test]
    fn test_empty_paragraph() {
        let xml = document("<w:p/><w:p><w:pPr/></w:p><w:p><w:r><w:t>x</w:t></w:r></w:p>");
        assert_eq!(text_from_document_xml(&xml).unwrap(), "\n\n\n\nx\n\n");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = document("<w:p><w:r><w:t>a &lt; b &amp;&amp; c &gt; d</w:t></w:r></w:p>");
        assert_eq!(text_from_document_xml(&xml).unwrap(), "a < b && c > d\n\n");
    }

    #[test]
    fn test_deleted_text_is_ignored() {
        let xml = document(
            "<w:p><w:del><w:r><w:delText>gone</w:delText></w:r></w:del><w:r><w:t>kept</w:t></w:r></w:p>",
        );
        assert_eq!(text_from_document_xml(&xml).unwrap(), "kept\n\n");
    }

    #[test]
    fn test_table_cells_are_paragraphs() {
        let xml = document(
            "<w:tbl><w:tr><w:tc><w:p><w:r><w:t>name</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>score</w:t></w:r></w:p></w:tc></w:tr></w:tbl>",
        );
        assert_eq!(text_from_document_xml(&xml).unwrap(), "name\n\nscore\n\n");
    }

    #[test]
    fn test_malformed_xml() {
        let xml = document("<w:p><w:r><w:t>open</w:r></w:p>");
        let result = text_from_document_xml(&xml);
        assert!(matches!(result, Err(ExtractionError::Xml(_))));
    }

    #[test]
    fn test_not_a_package() {
        let bytes = b"plain text, not a zip archive".to_vec();
        let result = DocxExtractor::new().extract_from_reader(std::io::Cursor::new(bytes));
        assert!(matches!(result, Err(ExtractionError::Archive(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = DocxExtractor::new().extract(Path::new("/nonexistent/input.docx"));
        assert!(matches!(result, Err(ExtractionError::Io(_))));
    }
}
