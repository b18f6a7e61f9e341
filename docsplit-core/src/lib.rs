//! Text segmentation for document splitting
//!
//! Partitions extracted document text into ordered segments. Strategies are
//! tried in a fixed priority order and the first one that qualifies wins:
//! a literal marker split, then a line split, then the whole text.
//!
//! ```
//! use docsplit_core::{Segmenter, SplitStrategy};
//!
//! let segmenter = Segmenter::new("<MARK>").unwrap();
//! let segmentation = segmenter.segment("A<MARK>B<MARK>C");
//!
//! assert_eq!(segmentation.strategy(), SplitStrategy::Marker);
//! let texts: Vec<&str> = segmentation.segments().iter().map(|s| s.text).collect();
//! assert_eq!(texts, vec!["A", "B", "C"]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod segment;
pub mod segmenter;

pub use error::{CoreError, Result};
pub use segment::{is_blank, Segment};
pub use segmenter::{Segmentation, Segmenter, SplitStrategy, DEFAULT_SPLIT_MARKER};
