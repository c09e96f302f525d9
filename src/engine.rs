use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use ignore::WalkBuilder;

use crate::error::ScanError;
use crate::extract;
use crate::record::MatchRecord;
use crate::results::{ScanReport, ScanStats};

// ---------------------------------------------------------------------------
// Extension allowlist
// ---------------------------------------------------------------------------

/// File-name suffixes the scanner will open. Everything else is skipped
/// without being read. Suffix test rather than `Path::extension` so a file
/// literally named `.py` still qualifies.
const EXTENSIONS: [&str; 3] = [".py", ".js", ".java"];

fn qualifies(name: &str) -> bool {
    EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub root:      PathBuf,
    pub keyword:   String,
    pub max_depth: Option<usize>,
    pub sorted:    bool,
    pub fail_fast: bool,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Execute a sequential scan over `opts.root`.
///
/// This is the core routine — traversal (outer), per-file read and test
/// (inner), conditional accumulation. One file at a time: each file is fully
/// read and its handle released before the next is considered. Called by
/// `ScanBuilder::run()` after validating inputs.
pub(crate) fn run(opts: EngineOptions) -> Result<ScanReport, ScanError> {
    let mut builder = WalkBuilder::new(&opts.root);
    builder
        .standard_filters(false)
        .ignore(false)
        .parents(false)
        .hidden(false)
        .follow_links(false)
        .same_file_system(false);

    if let Some(depth) = opts.max_depth {
        builder.max_depth(Some(depth));
    }
    if opts.sorted {
        builder.sort_by_file_name(|a, b| a.cmp(b));
    }

    let mut records = Vec::new();
    let mut errors  = Vec::new();
    let mut files   = 0usize;
    let mut dirs    = 0usize;

    let start = Instant::now();

    for res in builder.build() {
        // Traversal errors: unreadable directories, dangling entries
        let entry = match res {
            Ok(e) => e,
            Err(e) => {
                let err = map_ignore_error(e);
                if opts.fail_fast {
                    return Err(err);
                }
                errors.push(err);
                continue;
            }
        };

        let ft = match entry.file_type() {
            Some(ft) => ft,
            None     => continue,
        };

        if ft.is_dir() {
            // Skip the root itself in the count
            if entry.depth() > 0 {
                dirs += 1;
            }
            continue;
        }
        if !ft.is_file() {
            continue;
        }
        files += 1;

        if !qualifies(&entry.file_name().to_string_lossy()) {
            continue;
        }

        match scan_file(entry.path(), &opts.keyword) {
            Ok(Some(record)) => records.push(record),
            Ok(None)         => {}
            Err(err) => {
                if opts.fail_fast {
                    return Err(err);
                }
                errors.push(err);
            }
        }
    }

    let duration = start.elapsed();

    Ok(ScanReport {
        records,
        errors,
        stats: ScanStats::compute(files, dirs, duration),
    })
}

/// Read one qualifying file and test it against the keyword.
///
/// `Ok(None)` means the keyword was absent — not an error, no record.
/// The file handle is opened, drained, and closed inside `read_to_string`,
/// so nothing is held across files.
fn scan_file(path: &Path, keyword: &str) -> Result<Option<MatchRecord>, ScanError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData       => ScanError::Decode(path.to_path_buf()),
        ErrorKind::PermissionDenied  => ScanError::PermissionDenied(path.to_path_buf()),
        _ => ScanError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    // Exact, case-sensitive substring test — no normalization
    if !content.contains(keyword) {
        return Ok(None);
    }

    Ok(Some(MatchRecord {
        file:      path.to_path_buf(),
        functions: extract::function_names(&content),
        snippet:   extract::snippet(&content),
    }))
}

// ---------------------------------------------------------------------------
// Map ignore::Error to ScanError
// ---------------------------------------------------------------------------

fn map_ignore_error(e: ignore::Error) -> ScanError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => {
                if io_err.kind() == ErrorKind::PermissionDenied {
                    ScanError::PermissionDenied(path)
                } else {
                    ScanError::Io { path, source: io_err }
                }
            }
            _ => ScanError::Walk(format!("{}", err)),
        },
        ignore::Error::Io(io_err) => ScanError::Io {
            path: PathBuf::new(),
            source: io_err,
        },
        other => ScanError::Walk(other.to_string()),
    }
}
