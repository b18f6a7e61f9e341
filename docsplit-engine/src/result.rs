//! Split outputs

use crate::error::{Result, SplitError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of a split run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    /// Always true for a returned result; failures surface as errors
    pub success: bool,
    /// Number of documents written
    pub count: usize,
    /// Written documents, in segment order
    pub files: Vec<PathBuf>,
}

impl SplitResult {
    /// Successful result for the given files
    pub fn from_files(files: Vec<PathBuf>) -> Self {
        Self {
            success: true,
            count: files.len(),
            files,
        }
    }

    /// Append the files of another run, keeping `count` in step
    pub fn merge(&mut self, other: SplitResult) {
        self.success &= other.success;
        self.files.extend(other.files);
        self.count = self.files.len();
    }
}

impl Default for SplitResult {
    fn default() -> Self {
        Self::from_files(Vec::new())
    }
}

/// A generated document waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    /// File stem of the source document
    pub source_stem: String,
    /// 1-based segment index
    pub index: usize,
    /// Serialized document
    pub bytes: Vec<u8>,
    /// Destination path
    pub path: PathBuf,
}

impl OutputDocument {
    /// Place a built document in `output_dir` under its deterministic name
    pub fn new(
        source_stem: &str,
        index: usize,
        extension: &str,
        bytes: Vec<u8>,
        output_dir: &Path,
    ) -> Self {
        let path = output_dir.join(Self::file_name(source_stem, index, extension));
        Self {
            source_stem: source_stem.to_string(),
            index,
            bytes,
            path,
        }
    }

    /// `<stem>_segment-<index>.<extension>`
    pub fn file_name(source_stem: &str, index: usize, extension: &str) -> String {
        format!("{source_stem}_segment-{index}.{extension}")
    }

    /// Write the bytes to the destination, replacing any existing file
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, &self.bytes).map_err(|source| SplitError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// File stem used for output names
pub fn source_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_name() {
        assert_eq!(OutputDocument::file_name("doc", 3, "docx"), "doc_segment-3.docx");
        assert_eq!(
            OutputDocument::file_name("成绩单", 12, "docx"),
            "成绩单_segment-12.docx"
        );
    }

    #[test]
    fn test_source_stem() {
        assert_eq!(source_stem(Path::new("test/report.final.docx")), "report.final");
        assert_eq!(source_stem(Path::new("plain")), "plain");
    }

    #[test]
    fn test_from_files_counts() {
        let result = SplitResult::from_files(vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert!(result.success);
        assert_eq!(result.count, 2);
        assert_eq!(result.count, result.files.len());
    }

    #[test]
    fn test_merge_keeps_count_in_step() {
        let mut total = SplitResult::default();
        total.merge(SplitResult::from_files(vec![PathBuf::from("a")]));
        total.merge(SplitResult::from_files(vec![PathBuf::from("b"), PathBuf::from("c")]));

        assert_eq!(total.count, 3);
        assert_eq!(
            total.files,
            vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")]
        );
    }

    #[test]
    fn test_serialized_shape() {
        let result = SplitResult::from_files(vec![PathBuf::from("file/doc_segment-1.docx")]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "count": 1,
                "files": ["file/doc_segment-1.docx"]
            })
        );
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let doc = OutputDocument::new("doc", 1, "docx", vec![1, 2, 3], &dir.path().join("missing"));

        let result = doc.write();
        assert!(matches!(result, Err(SplitError::Write { path, .. }) if path == doc.path));
    }

    #[test]
    fn test_write() {
        let dir = TempDir::new().unwrap();
        let doc = OutputDocument::new("doc", 2, "docx", b"bytes".to_vec(), dir.path());
        doc.write().unwrap();
        assert_eq!(fs::read(dir.path().join("doc_segment-2.docx")).unwrap(), b"bytes");
    }
}
