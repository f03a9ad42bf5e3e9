use std::collections::HashSet;
use tracing::info;

use crate::record::{DuplicateReport, Record};

/// Splits `records` into unique values and repeated occurrences.
///
/// Values are compared exactly, case-sensitive. The first occurrence of a
/// value is never reported; every later one is, with its own line.
pub fn detect_duplicates(source: &str, records: &[Record]) -> DuplicateReport {
    let mut unique = HashSet::with_capacity(records.len());
    let mut duplicates = Vec::new();

    for record in records {
        if !unique.insert(record.value.clone()) {
            duplicates.push(record.clone());
        }
    }

    info!(
        action = "scan",
        component = "duplicate_detector",
        source,
        record_count = records.len(),
        unique_count = unique.len(),
        duplicate_count = duplicates.len(),
        "Duplicate scan completed"
    );

    DuplicateReport {
        source: source.to_string(),
        unique,
        duplicates,
    }
}
