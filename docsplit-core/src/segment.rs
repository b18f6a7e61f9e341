//! Kept segments and the blank-piece filter

/// One contiguous, non-blank piece of extracted text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// 1-based position among kept segments (dense, no gaps)
    pub index: usize,
    /// Segment text, exactly as produced by the strategy
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    /// Create a new segment
    pub fn new(index: usize, text: &'a str) -> Self {
        Self { index, text }
    }

    /// Byte length of the segment text
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the segment text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Returns true for empty or whitespace-only text
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Drop blank pieces and number the rest 1..N in order
pub(crate) fn keep_non_blank<'a>(pieces: &[&'a str]) -> Vec<Segment<'a>> {
    pieces
        .iter()
        .copied()
        .filter(|piece| !is_blank(piece))
        .enumerate()
        .map(|(i, text)| Segment::new(i + 1, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\n\t\r\n"));
        assert!(is_blank("\u{3000}"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_keep_non_blank_is_dense() {
        let segments = keep_non_blank(&["", "A", "  ", "B", "\n", "C"]);

        let indices: Vec<usize> = segments.iter().map(|s| s.index).collect();
        let texts: Vec<&str> = segments.iter().map(|s| s.text).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_keep_non_blank_preserves_surrounding_whitespace() {
        let segments = keep_non_blank(&["\n\nA\n", " B"]);
        assert_eq!(segments[0].text, "\n\nA\n");
        assert_eq!(segments[1].text, " B");
        assert_eq!(segments[1].len(), 2);
    }

    #[test]
    fn test_keep_non_blank_all_blank() {
        assert!(keep_non_blank(&["", " ", "\n"]).is_empty());
    }
}
