//! # snipscan
//!
//! Keyword search over source trees — per-file function names and content previews.
//!
//! snipscan walks a directory tree, opens files whose name ends in one of
//! three recognized source extensions (`.py`, `.js`, `.java`), and tests
//! their content for an exact, case-sensitive keyword. Every matching file
//! yields a [`MatchRecord`]: the file path, the function names found by a
//! fixed textual pattern, and the first 500 characters of the content.
//!
//! The scan is sequential by design — one file at a time, in traversal
//! order, with no shared state between files.
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(
//!     dir.path().join("sort.py"),
//!     "def quicksort(xs): pass\ndef partition(xs): pass\n# quicksort demo\n",
//! ).unwrap();
//!
//! let report = snipscan::scan(dir.path(), "quicksort").run().unwrap();
//!
//! assert_eq!(report.records.len(), 1);
//! assert_eq!(report.records[0].functions, ["quicksort", "partition"]);
//! println!("Matched {} files in {:.3}s",
//!     report.records.len(),
//!     report.stats.duration.as_secs_f64()
//! );
//! ```
//!
//! # Error handling
//!
//! A missing root or an empty keyword fails the whole call. Per-file
//! failures — a file that cannot be read, or is not valid UTF-8 — are
//! skipped and collected into [`ScanReport::errors`] so one bad file cannot
//! discard the rest of the tree's results. Set
//! [`fail_fast(true)`](ScanBuilder::fail_fast) to abort on the first
//! per-file failure instead.
//!
//! # What it is not
//!
//! There is no index, no ranking, no streaming, and no syntax awareness:
//! function names come from one textual pattern applied uniformly to all
//! three file types, so files of the other two types usually yield an empty
//! `functions` list. That limitation is part of the contract, not a bug.

#![forbid(unsafe_code)]

mod builder;
mod engine;
mod error;
mod extract;
mod record;
mod results;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::ScanBuilder;
pub use error::ScanError;
pub use record::{MatchRecord, SNIPPET_LEN};
pub use results::{ScanReport, ScanStats};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a [`ScanBuilder`] for a keyword scan rooted at `root`.
///
/// `root` must be a readable directory; it is visited recursively without a
/// depth limit, and symlinks are never followed. `keyword` is matched as an
/// exact, case-sensitive substring of file content and must be non-empty
/// (checked at [`run()`](ScanBuilder::run)).
///
/// # Example
///
/// ```rust
/// use std::fs;
///
/// let dir = tempfile::tempdir().unwrap();
/// fs::write(dir.path().join("a.py"), "def foo(): pass\nneedle").unwrap();
/// fs::write(dir.path().join("b.txt"), "needle").unwrap();
///
/// let report = snipscan::scan(dir.path(), "needle").run().unwrap();
///
/// // b.txt is not a recognized source file and is never opened
/// assert_eq!(report.records.len(), 1);
/// assert!(report.records[0].file.ends_with("a.py"));
/// ```
pub fn scan(root: impl Into<std::path::PathBuf>, keyword: impl Into<String>) -> ScanBuilder {
    ScanBuilder::new(root.into(), keyword.into())
}
