//! Strategy-ordered segmentation
//!
//! Strategies are tried in priority order and the first one that qualifies
//! wins:
//!
//! 1. [`SplitStrategy::Marker`]: split on a literal marker. Qualifies when
//!    the text contains the marker at all, i.e. more than one piece results.
//!    Pieces are kept verbatim, empty ones included, so joining them with the
//!    marker gives back the input. Blank pieces are dropped later, by
//!    [`Segmentation::segments`].
//! 2. [`SplitStrategy::Lines`]: split on line breaks and drop blank lines.
//!    Qualifies when at least one line remains.
//! 3. [`SplitStrategy::Whole`]: the entire text as one piece.

use crate::error::{CoreError, Result};
use crate::segment::{is_blank, keep_non_blank, Segment};

/// Marker used by the score-sheet documents this engine was first written for
pub const DEFAULT_SPLIT_MARKER: &str = "2025年济南市第一次模拟考试成绩单";

/// Strategy that produced a segmentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitStrategy {
    /// Split on the configured marker string
    Marker,
    /// One segment per non-blank line
    Lines,
    /// The whole text as a single segment
    Whole,
}

impl SplitStrategy {
    /// Short name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitStrategy::Marker => "marker",
            SplitStrategy::Lines => "lines",
            SplitStrategy::Whole => "whole",
        }
    }
}

impl std::fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw output of the winning strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation<'a> {
    strategy: SplitStrategy,
    pieces: Vec<&'a str>,
}

impl<'a> Segmentation<'a> {
    /// Strategy that won
    pub fn strategy(&self) -> SplitStrategy {
        self.strategy
    }

    /// Pieces exactly as the strategy produced them, blank ones included
    pub fn pieces(&self) -> &[&'a str] {
        &self.pieces
    }

    /// Kept segments: blank pieces dropped, indices dense from 1
    pub fn segments(&self) -> Vec<Segment<'a>> {
        keep_non_blank(&self.pieces)
    }

    /// Consume into the raw piece list
    pub fn into_pieces(self) -> Vec<&'a str> {
        self.pieces
    }
}

/// Splits text into segments using the marker, line and whole-text strategies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmenter {
    marker: String,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self {
            marker: DEFAULT_SPLIT_MARKER.to_string(),
        }
    }
}

impl Segmenter {
    /// Create a segmenter for the given marker
    pub fn new<S: Into<String>>(marker: S) -> Result<Self> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(CoreError::EmptyMarker);
        }
        Ok(Self { marker })
    }

    /// The configured marker
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Run the strategies in priority order and return the first that qualifies
    pub fn segment<'a>(&self, text: &'a str) -> Segmentation<'a> {
        if let Some(pieces) = self.split_on_marker(text) {
            return Segmentation {
                strategy: SplitStrategy::Marker,
                pieces,
            };
        }

        if let Some(pieces) = split_on_lines(text) {
            return Segmentation {
                strategy: SplitStrategy::Lines,
                pieces,
            };
        }

        Segmentation {
            strategy: SplitStrategy::Whole,
            pieces: vec![text],
        }
    }

    /// Texts of the kept segments, in order
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.segment(text)
            .segments()
            .into_iter()
            .map(|segment| segment.text)
            .collect()
    }

    fn split_on_marker<'a>(&self, text: &'a str) -> Option<Vec<&'a str>> {
        let pieces: Vec<&str> = text.split(self.marker.as_str()).collect();
        (pieces.len() > 1).then_some(pieces)
    }
}

fn split_on_lines(text: &str) -> Option<Vec<&str>> {
    let lines: Vec<&str> = text.lines().filter(|line| !is_blank(line)).collect();
    (!lines.is_empty()).then_some(lines)
}
