use regex::Regex;
use tracing::{info, warn};

use crate::error::Result;
use crate::record::Validation;

/// Top-level domains accepted for new entries.
pub const ALLOWED_TLDS: &[&str] = &["io", "com", "net"];

const IPV4_PATTERN: &str = r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$";

/// Classifies `--add` candidates as IPv4 addresses or allowed domains.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    ipv4: Regex,
    domain: Regex,
}

impl RecordValidator {
    pub fn new() -> Result<Self> {
        let domain = format!(
            r"^[A-Za-z0-9](?:[A-Za-z0-9-]{{0,61}}[A-Za-z0-9])?\.(?:{})$",
            ALLOWED_TLDS.join("|")
        );
        Ok(RecordValidator {
            ipv4: Regex::new(IPV4_PATTERN)?,
            domain: Regex::new(&domain)?,
        })
    }

    /// Dot-quad syntax first, then every group must be in 0..=255.
    pub fn is_ipv4(&self, candidate: &str) -> bool {
        match self.ipv4.captures(candidate) {
            Some(caps) => caps
                .iter()
                .skip(1)
                .flatten()
                .all(|group| group.as_str().parse::<u16>().is_ok_and(|n| n <= 255)),
            None => false,
        }
    }

    pub fn is_domain(&self, candidate: &str) -> bool {
        self.domain.is_match(candidate)
    }

    pub fn is_valid(&self, candidate: &str) -> bool {
        self.is_ipv4(candidate) || self.is_domain(candidate)
    }

    /// Splits `candidates` into valid and invalid, keeping input order.
    pub fn validate<S: AsRef<str>>(&self, candidates: &[S]) -> Validation {
        let mut validation = Validation::default();
        for candidate in candidates {
            let candidate = candidate.as_ref();
            if self.is_valid(candidate) {
                validation.valid.push(candidate.to_string());
            } else {
                warn!(
                    action = "validate",
                    component = "record_validator",
                    candidate,
                    "Rejected record"
                );
                validation.invalid.push(candidate.to_string());
            }
        }

        info!(
            action = "complete",
            component = "record_validator",
            valid_count = validation.valid.len(),
            invalid_count = validation.invalid.len(),
            "Validation completed"
        );
        validation
    }
}
