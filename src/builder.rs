use std::path::PathBuf;

use crate::engine::{run, EngineOptions};
use crate::error::ScanError;
use crate::results::ScanReport;

// ---------------------------------------------------------------------------
// ScanBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a scan.
///
/// Created via [`snipscan::scan()`](crate::scan) with the root directory and
/// the keyword. Configure with chained builder methods, then call
/// [`run()`](ScanBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let report = snipscan::scan("./my_code", "quicksort")
///     .sorted(true)
///     .run()?;
/// ```
pub struct ScanBuilder {
    root:      PathBuf,
    keyword:   String,
    max_depth: Option<usize>,
    sorted:    bool,
    fail_fast: bool,
}

impl ScanBuilder {
    pub(crate) fn new(root: PathBuf, keyword: String) -> Self {
        Self {
            root,
            keyword,
            max_depth: None,
            sorted:    false,
            fail_fast: false,
        }
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Maximum traversal depth. `0` means the root only, `1` means one
    /// level of children, and so on. Unlimited by default.
    pub fn max_depth(mut self, d: usize) -> Self {
        self.max_depth = Some(d);
        self
    }

    /// Sort sibling entries by file name before descending.
    ///
    /// Disabled by default — sibling order is then OS-dependent. Enable this
    /// when two scans of the same tree must produce identically ordered
    /// records.
    pub fn sorted(mut self, yes: bool) -> Self {
        self.sorted = yes;
        self
    }

    /// Abort the whole scan on the first per-file read or decode error.
    ///
    /// Disabled by default: a file that cannot be read or is not valid UTF-8
    /// is skipped and recorded in [`ScanReport::errors`], and the rest of
    /// the tree is still scanned. With `fail_fast` the first such error is
    /// returned as `Err` from [`run()`](ScanBuilder::run) and any records
    /// accumulated so far are discarded.
    pub fn fail_fast(mut self, yes: bool) -> Self {
        self.fail_fast = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the scan and return the report.
    ///
    /// Blocks until every reachable file has been visited. Files are
    /// processed strictly in traversal order, one at a time.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the root does not exist or is not a directory,
    /// when the keyword is empty, or — with `.fail_fast(true)` — on the
    /// first per-file failure. Per-file failures are otherwise collected
    /// into [`ScanReport::errors`].
    pub fn run(self) -> Result<ScanReport, ScanError> {
        if self.keyword.is_empty() {
            return Err(ScanError::EmptyKeyword);
        }

        let meta = std::fs::metadata(&self.root).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => {
                ScanError::PermissionDenied(self.root.clone())
            }
            _ => ScanError::NotFound(self.root.clone()),
        })?;
        if !meta.is_dir() {
            return Err(ScanError::InvalidRoot(self.root));
        }

        run(EngineOptions {
            root:      self.root,
            keyword:   self.keyword,
            max_depth: self.max_depth,
            sorted:    self.sorted,
            fail_fast: self.fail_fast,
        })
    }
}
