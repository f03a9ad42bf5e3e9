use anyhow::{Context, Result};
use std::collections::HashSet;
use std::time::Instant;
use tracing::info;

use crate::config::{Config, FileRole, TrackedFile};
use crate::dnsmasq;
use crate::duplicates::detect_duplicates;
use crate::reader;
use crate::record::{DuplicateReport, Record};
use crate::utils::format_number;
use crate::validate::RecordValidator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    InvalidRecords(Vec<String>),
    DuplicatesFound { total: usize, files: usize },
}

impl Outcome {
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::Clean => 0,
            Outcome::InvalidRecords(_) | Outcome::DuplicatesFound { .. } => 1,
        }
    }
}

/// A candidate from `--add` that is already present in a tracked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub file: &'static str,
    pub value: String,
}

pub fn read_tracked(file: &TrackedFile) -> crate::error::Result<Vec<Record>> {
    match file.role {
        FileRole::Dnsmasq => dnsmasq::extract_names(&file.path),
        _ => reader::read_records(&file.path, file.strip_comments),
    }
}

pub fn run(config: &Config) -> Result<Outcome> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "maintain", base_dir = ?config.base_dir, "Starting blocklist maintenance");

    let mut affected_files: HashSet<&'static str> = HashSet::new();
    let mut duplicate_values: Vec<String> = Vec::new();

    if !config.add.is_empty() {
        let validator = RecordValidator::new().context("Failed to build record validator")?;
        let validation = validator.validate(&config.add);

        if !validation.is_accepted() {
            println!("invalid record(s), nothing added:");
            for candidate in &validation.invalid {
                println!("    {}", candidate);
            }
            return Ok(Outcome::InvalidRecords(validation.invalid));
        }

        let domains: Vec<&String> = validation
            .valid
            .iter()
            .filter(|v| !validator.is_ipv4(v))
            .collect();
        if !domains.is_empty() {
            println!("dnsmasq entries for new domains:\n");
            print!("{}", dnsmasq::format_blocks(&domains));
        }

        let conflicts = scan_conflicts(config, &validation.valid)?;
        if conflicts.is_empty() {
            println!("no conflicts with tracked files");
        } else {
            for conflict in conflicts {
                println!("`{}` already present in `{}`", conflict.value, conflict.file);
                affected_files.insert(conflict.file);
                duplicate_values.push(conflict.value);
            }
        }
    }

    if config.scans() {
        for (file, report) in scan_tracked_files(config)? {
            if !report.is_clean() {
                affected_files.insert(file);
                duplicate_values.extend(report.duplicate_values());
            }
        }
    }

    let total_duplicates = duplicate_values.len();
    let files_with_duplicates = affected_files.len();
    info!(
        action = "complete",
        component = "maintain",
        total_duplicates,
        files_with_duplicates,
        duration_ms = total_start_time.elapsed().as_millis(),
        "Blocklist maintenance completed"
    );

    if total_duplicates == 0 {
        return Ok(Outcome::Clean);
    }

    println!(
        "\nfound {} duplicate(s) across {} file(s)",
        format_number(total_duplicates),
        files_with_duplicates
    );
    Ok(Outcome::DuplicatesFound {
        total: total_duplicates,
        files: files_with_duplicates,
    })
}

/// Scans hosts, dnsmasq and pihole in order, printing each report as it
/// completes. A missing file aborts before later files are read.
pub fn scan_tracked_files(config: &Config) -> Result<Vec<(&'static str, DuplicateReport)>> {
    let mut reports = Vec::new();

    for file in config.tracked_files() {
        let records = read_tracked(&file)
            .with_context(|| format!("Failed to scan `{}`", file.label()))?;
        let report = detect_duplicates(file.label(), &records);

        println!("{}", report.render());
        if config.remove_duplicates && !report.is_clean() {
            println!(
                "    {} unique entries would remain in `{}` (not written)",
                format_number(report.unique.len()),
                file.label()
            );
        }
        reports.push((file.label(), report));
    }

    Ok(reports)
}

/// Finds candidates that already exist in a tracked file.
///
/// Each file's records are scanned together with the candidates appended;
/// a candidate reported as a duplicate was already in the file.
pub fn scan_conflicts(config: &Config, candidates: &[String]) -> Result<Vec<Conflict>> {
    let candidates = detect_duplicates("add", &to_unlined(candidates)).unique;
    let mut ordered: Vec<&String> = candidates.iter().collect();
    ordered.sort();

    let mut conflicts = Vec::new();
    for file in config.tracked_files() {
        let mut records = read_tracked(&file)
            .with_context(|| format!("Failed to scan `{}`", file.label()))?;
        records.extend(ordered.iter().map(|c| Record::unlined(c.as_str())));

        let report = detect_duplicates(file.label(), &records);
        conflicts.extend(
            report
                .duplicates
                .into_iter()
                .filter(|r| r.line.is_none())
                .map(|r| Conflict {
                    file: file.label(),
                    value: r.value,
                }),
        );
    }

    Ok(conflicts)
}

fn to_unlined(values: &[String]) -> Vec<Record> {
    values.iter().map(|v| Record::unlined(v.as_str())).collect()
}
