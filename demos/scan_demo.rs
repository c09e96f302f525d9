//! Demonstration entry point mirroring the classic "scan a folder for a
//! keyword" one-liner: hard-coded directory, hard-coded keyword, records
//! printed to stdout. Illustrative only — not a CLI.
//!
//! Run with: `cargo run --example scan_demo` (expects a `./my_code`
//! directory next to the manifest).

fn main() {
    let report = match snipscan::scan("./my_code", "quicksort").sorted(true).run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("scan failed: {e}");
            std::process::exit(1);
        }
    };

    for record in &report.records {
        println!("{}", record.file.display());
        println!("  functions: {:?}", record.functions);
        println!("  snippet:   {:?}", record.snippet);
    }
    for err in &report.errors {
        match err.path() {
            Some(p) => eprintln!("skipped {}: {err}", p.display()),
            None => eprintln!("skipped: {err}"),
        }
    }
    println!(
        "{} matches across {} files in {:.3}s",
        report.records.len(),
        report.stats.files,
        report.stats.duration.as_secs_f64()
    );
}
