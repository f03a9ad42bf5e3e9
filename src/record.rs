use std::collections::HashSet;

/// A single tracked domain or IP, with its 1-based line in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: Option<usize>,
    pub value: String,
}

impl Record {
    pub fn new(line: usize, value: impl Into<String>) -> Self {
        Record {
            line: Some(line),
            value: value.into(),
        }
    }

    /// A record that does not come from a file, such as an `--add` candidate.
    pub fn unlined(value: impl Into<String>) -> Self {
        Record {
            line: None,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DuplicateReport {
    pub source: String,
    pub unique: HashSet<String>,
    /// Second and later occurrences, in file order.
    pub duplicates: Vec<Record>,
}

impl DuplicateReport {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }

    pub fn duplicate_values(&self) -> Vec<String> {
        self.duplicates.iter().map(|r| r.value.clone()).collect()
    }

    pub fn render(&self) -> String {
        if self.is_clean() {
            return format!("no duplicates found for `{}`", self.source);
        }

        let mut out = format!(
            "found {} duplicate(s) in `{}`:",
            self.duplicates.len(),
            self.source
        );
        for record in &self.duplicates {
            match record.line {
                Some(line) => out.push_str(&format!("\n    line {}: {}", line, record.value)),
                None => out.push_str(&format!("\n    {}", record.value)),
            }
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

impl Validation {
    pub fn is_accepted(&self) -> bool {
        self.invalid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(duplicates: Vec<Record>) -> DuplicateReport {
        DuplicateReport {
            source: "hosts".to_string(),
            unique: HashSet::new(),
            duplicates,
        }
    }

    #[test]
    fn clean_report_text() {
        assert_eq!(report(vec![]).render(), "no duplicates found for `hosts`");
    }

    #[test]
    fn report_lists_lines_in_order() {
        let text = report(vec![Record::new(3, "a.com"), Record::new(7, "b.com")]).render();
        assert_eq!(
            text,
            "found 2 duplicate(s) in `hosts`:\n    line 3: a.com\n    line 7: b.com"
        );
    }

    #[test]
    fn unlined_records_render_without_line() {
        let text = report(vec![Record::unlined("a.com")]).render();
        assert!(text.ends_with("\n    a.com"));
    }
}
