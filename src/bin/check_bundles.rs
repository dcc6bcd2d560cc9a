//! Translation bundle check - compares every language bundle with English
//!
//! Usage:
//!   cargo run --bin check-bundles
//!
//! Exits with status 1 when a bundle is missing keys, has extra keys, or has
//! lists of a different length than English. Empty strings are reported as
//! warnings only.

use novaytek_site::i18n::{BundleValidator, Language};

fn main() {
    let languages: Vec<String> = Language::all()
        .iter()
        .map(|l| format!("{} ({})", l.code(), l.name()))
        .collect();
    println!("Checking bundles: {}", languages.join(", "));

    let report = BundleValidator::validate_all();

    for msg in &report.errors {
        println!("  ERROR   {}", msg);
    }
    for msg in &report.warnings {
        println!("  WARNING {}", msg);
    }

    println!(
        "\n{} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );

    if report.has_errors() {
        std::process::exit(1);
    }
}
