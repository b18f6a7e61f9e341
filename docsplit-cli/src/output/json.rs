//! JSON output formatter
//!
//! Wraps payloads in the `{ code, message, data }` envelope that clients of
//! the split service already parse.

use super::OutputFormatter;
use anyhow::Result;
use docsplit_engine::{ServiceStatus, SplitResult};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Status code, 200 for success
    pub code: u16,
    /// Human-readable outcome
    pub message: String,
    /// Payload
    pub data: T,
}

impl<T> Envelope<T> {
    /// Successful envelope around `data`
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: "success".to_string(),
            data,
        }
    }
}

/// JSON formatter - pretty-printed envelope per payload
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_envelope<T: Serialize>(&mut self, data: T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &Envelope::success(data))?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_result(&mut self, result: &SplitResult) -> Result<()> {
        self.write_envelope(result)
    }

    fn write_status(&mut self, status: &ServiceStatus) -> Result<()> {
        self.write_envelope(status)
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
    fn test_result_envelope() {
        let mut formatter = JsonFormatter::new(Vec::new());
        let result = SplitResult::from_files(vec![PathBuf::from("file/doc_segment-1.docx")]);
        formatter.write_result(&result).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.into_inner()).unwrap();
        assert_eq!(value["code"], 200);
        assert_eq!(value["message"], "success");
        assert_eq!(value["data"]["success"], true);
        assert_eq!(value["data"]["count"], 1);
        assert_eq!(value["data"]["files"][0], "file/doc_segment-1.docx");
    }

    #[test]
    fn test_status_envelope() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.write_status(&docsplit_engine::status()).unwrap();

        let envelope: Envelope<ServiceStatus> =
            serde_json::from_slice(&formatter.into_inner()).unwrap();
        assert_eq!(envelope.code, 200);
        assert!(envelope.data.is_ready());
    }
}
