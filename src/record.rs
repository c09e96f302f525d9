use std::path::PathBuf;

/// The number of characters of file content kept as a preview.
pub const SNIPPET_LEN: usize = 500;

/// One matched file.
///
/// Produced for every qualifying file whose content contains the keyword.
/// Records are accumulated in traversal order and returned in
/// [`ScanReport::records`](crate::ScanReport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Path of the matched file, as produced by the traversal
    /// (relative if the scan root was relative).
    pub file: PathBuf,

    /// Function names extracted from the content, in order of first
    /// appearance. Duplicates are kept if a name recurs.
    pub functions: Vec<String>,

    /// The first [`SNIPPET_LEN`] characters of the content, or the whole
    /// content if shorter. Character-based, so a multi-byte prefix is never
    /// split mid-character.
    pub snippet: String,
}
