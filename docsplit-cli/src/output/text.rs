//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use docsplit_engine::{Readiness, ServiceStatus, SplitResult};
use std::io::{self, Write};

/// Plain text formatter - one generated path per line, then a summary
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_result(&mut self, result: &SplitResult) -> Result<()> {
        for file in &result.files {
            writeln!(self.writer, "{}", file.display())?;
        }
        writeln!(self.writer, "Generated {} document(s)", result.count)?;
        Ok(())
    }

    fn write_status(&mut self, status: &ServiceStatus) -> Result<()> {
        let state = match status.status {
            Readiness::Ready => "ready",
            Readiness::NotReady => "not ready",
        };
        writeln!(self.writer, "{}: {}", status.service, state)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_result_lines() {
        let mut formatter = TextFormatter::new(Vec::new());
        let result = SplitResult::from_files(vec![
            PathBuf::from("file/doc_segment-1.docx"),
            PathBuf::from("file/doc_segment-2.docx"),
        ]);
        formatter.write_result(&result).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(
            output,
            "file/doc_segment-1.docx\nfile/doc_segment-2.docx\nGenerated 2 document(s)\n"
        );
    }

    #[test]
    fn test_status_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.write_status(&docsplit_engine::status()).unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output, "Word Document Split Service: ready\n");
    }
}
