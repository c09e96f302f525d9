use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::SNIPPET_LEN;

// ---------------------------------------------------------------------------
//  Function-definition introducer
// ---------------------------------------------------------------------------

/// `def`, whitespace, an identifier, an opening paren. The identifier is the
/// function name. This single pattern is applied to every qualifying file
/// regardless of its extension — `.js` and `.java` files rarely yield
/// anything, which is the documented cross-language limitation of the
/// scanner, not something this module tries to compensate for.
static DEF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"def\s+(\w+)\(").unwrap());

/// Extract function names from `content`, in order of first appearance.
///
/// Duplicates are kept: a name that is defined twice appears twice.
pub(crate) fn function_names(content: &str) -> Vec<String> {
    DEF_RE
        .captures_iter(content)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// The first [`SNIPPET_LEN`] characters of `content`, or all of it if shorter.
///
/// Counts characters, not bytes, so multi-byte content is never cut
/// mid-character.
pub(crate) fn snippet(content: &str) -> String {
    match content.char_indices().nth(SNIPPET_LEN) {
        Some((byte_idx, _)) => content[..byte_idx].to_string(),
        None => content.to_string(),
    }
}
