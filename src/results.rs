use std::time::Duration;

use crate::error::ScanError;
use crate::record::MatchRecord;

/// The output of a completed scan.
///
/// `records` holds one [`MatchRecord`] per qualifying file whose content
/// contained the keyword, in traversal order. `errors` holds per-file soft
/// failures (unreadable or undecodable files) that were skipped so the rest
/// of the tree could still be scanned; it is empty when every file was read
/// cleanly or when `.fail_fast(true)` turned the first failure into an `Err`.
pub struct ScanReport {
    /// One record per matched file, in the order the walk visited them.
    pub records: Vec<MatchRecord>,

    /// Files that qualified by extension but could not be read or decoded.
    /// Use [`ScanError::path`] to report which file was skipped.
    pub errors: Vec<ScanError>,

    /// Walk statistics.
    pub stats: ScanStats,
}

/// Statistics for a completed scan.
pub struct ScanStats {
    /// Total number of files encountered (qualifying or not).
    pub files: usize,

    /// Total number of directories encountered.
    pub dirs: usize,

    /// Wall-clock time from scan start to completion.
    pub duration: Duration,

    /// Total entries visited per second. Convenience field — equals
    /// `(files + dirs) / duration.as_secs_f64()`, clamped to 0 on
    /// zero-duration runs.
    pub entries_per_sec: usize,
}

impl ScanStats {
    /// Compute `entries_per_sec` from raw counts and duration.
    pub(crate) fn compute(files: usize, dirs: usize, duration: Duration) -> Self {
        let total = files + dirs;
        let eps = if duration.as_secs_f64() > 0.0 {
            (total as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            files,
            dirs,
            duration,
            entries_per_sec: eps,
        }
    }
}
