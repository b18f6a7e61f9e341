//! Minimal `.docx` construction
//!
//! A built package holds only the three parts Word needs to open it: the
//! content types, the package relationships and the main document. The
//! segment text goes into a single run of a single paragraph.

use crate::error::BuildError;
use quick_xml::escape::escape;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Extension of generated documents
pub const DOCX_EXTENSION: &str = "docx";

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"</Types>"#,
);

const PACKAGE_RELATIONSHIPS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#,
);

const DOCUMENT_OPEN: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:body><w:p><w:r>"#,
);

const DOCUMENT_CLOSE: &str = "</w:r></w:p></w:body></w:document>";

/// Turns segment text into a serialized document
pub trait DocumentBuilder: Send + Sync {
    /// Serialize a document whose only content is `text`
    fn build(&self, text: &str) -> Result<Vec<u8>, BuildError>;

    /// File extension of the produced documents, without the dot
    fn extension(&self) -> &str;
}

/// Builds single-paragraph Office Open XML documents
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxBuilder;

impl DocxBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }
}

impl DocumentBuilder for DocxBuilder {
    fn build(&self, text: &str) -> Result<Vec<u8>, BuildError> {
        let document = document_xml(text);
        let parts = [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", PACKAGE_RELATIONSHIPS),
            ("word/document.xml", document.as_str()),
        ];

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in parts {
            zip.start_file(name, part_options())?;
            zip.write_all(body.as_bytes())?;
        }

        Ok(zip.finish()?.into_inner())
    }

    fn extension(&self) -> &str {
        DOCX_EXTENSION
    }
}

fn part_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// Main document XML holding `text` as one run
pub fn document_xml(text: &str) -> String {
    let mut xml =
        String::with_capacity(DOCUMENT_OPEN.len() + DOCUMENT_CLOSE.len() + text.len() * 2);
    xml.push_str(DOCUMENT_OPEN);
    push_run_content(&mut xml, text);
    xml.push_str(DOCUMENT_CLOSE);
    xml
}

/// Line breaks become `w:br`, tabs `w:tab`, everything else `w:t`
fn push_run_content(xml: &mut String, text: &str) {
    let mut pending = String::new();

    for ch in text.chars() {
        match ch {
            '\n' => {
                flush_text(xml, &mut pending);
                xml.push_str("<w:br/>");
            }
            '\t' => {
                flush_text(xml, &mut pending);
                xml.push_str("<w:tab/>");
            }
            '\r' => {}
            ch if is_xml_char(ch) => pending.push(ch),
            _ => {}
        }
    }

    flush_text(xml, &mut pending);
}

fn flush_text(xml: &mut String, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    xml.push_str(r#"<w:t xml:space="preserve">"#);
    xml.push_str(&escape(pending.as_str()));
    xml.push_str("</w:t>");
    pending.clear();
}

/// XML 1.0 `Char` production, minus the whitespace handled above
fn is_xml_char(ch: char) -> bool {
    !matches!(ch, '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}
