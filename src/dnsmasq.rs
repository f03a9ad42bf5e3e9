//! Reading and writing the dnsmasq block format.
//!
//! ```text
//! config domain
//!     option name 'ads.example.com'
//!     option ip '0.0.0.0'
//! ```
//!
//! Only the `option name` line of each block takes part in duplicate
//! detection.

use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::reader;
use crate::record::Record;

pub const NAME_MARKER: &str = "option name";
pub const NULL_ROUTE: &str = "0.0.0.0";
const INDENT: &str = "    ";

pub fn extract_names(path: &Path) -> Result<Vec<Record>> {
    let records = reader::read_records(path, true)?;
    let names = names_from_records(records);

    info!(
        action = "extract",
        component = "dnsmasq",
        file_path = ?path,
        name_count = names.len(),
        "Extracted dnsmasq record names"
    );
    Ok(names)
}

pub fn names_from_records(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| r.value.contains(NAME_MARKER))
        .map(|r| Record {
            line: r.line,
            value: r.value.replacen(NAME_MARKER, "", 1).replace('\'', "").trim().to_string(),
        })
        .collect()
}

/// Renders `names` as dnsmasq blocks separated by blank lines.
pub fn format_blocks<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| {
            format!(
                "config domain\n{INDENT}option name '{}'\n{INDENT}option ip '{NULL_ROUTE}'\n",
                name.as_ref()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_lines;

    #[test]
    fn extracts_single_block() {
        let content = "config domain\n    option name 'ad.example.com'\n    option ip '0.0.0.0'\n";
        let names = names_from_records(parse_lines(content, true));
        assert_eq!(names, vec![Record::new(2, "ad.example.com")]);
    }

    #[test]
    fn skips_commented_blocks() {
        let content = "# config domain\n#    option name 'old.com'\nconfig domain\n  option name 'new.com'\n";
        let names = names_from_records(parse_lines(content, true));
        assert_eq!(names, vec![Record::new(4, "new.com")]);
    }

    #[test]
    fn formats_blocks_with_blank_separator() {
        let text = format_blocks(&["a.com", "b.net"]);
        assert_eq!(
            text,
            "config domain\n    option name 'a.com'\n    option ip '0.0.0.0'\n\
             \nconfig domain\n    option name 'b.net'\n    option ip '0.0.0.0'\n"
        );
    }

    #[test]
    fn formatted_blocks_extract_back() {
        let names = ["a.com", "b.net"];
        let extracted: Vec<String> = names_from_records(parse_lines(&format_blocks(&names), true))
            .into_iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(extracted, names);
    }

    #[test]
    fn empty_name_list_formats_to_nothing() {
        assert_eq!(format_blocks::<&str>(&[]), "");
    }
}
