use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::error::{ListError, Result};
use crate::record::Record;

pub const COMMENT_MARKER: char = '#';

/// Reads `path` into trimmed records numbered from 1.
///
/// Line numbers are assigned before filtering, so they always point at the
/// original line. With `strip_comments`, blank lines and lines whose trimmed
/// text starts with `#` are dropped.
pub fn read_records(path: &Path, strip_comments: bool) -> Result<Vec<Record>> {
    let start_time = Instant::now();
    let content =
        fs::read_to_string(path).map_err(|e| ListError::from_io(path.to_path_buf(), e))?;

    let records = parse_lines(&content, strip_comments);

    info!(
        action = "read",
        component = "line_reader",
        file_path = ?path,
        strip_comments,
        record_count = records.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Read tracked file"
    );
    Ok(records)
}

pub fn parse_lines(content: &str, strip_comments: bool) -> Vec<Record> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| {
            !strip_comments || !(line.is_empty() || line.starts_with(COMMENT_MARKER))
        })
        .map(|(line_num, line)| Record::new(line_num, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripping_drops_blank_and_comment_lines() {
        let content = "# header\n0.0.0.0 a.com\n\n   \n0.0.0.0 b.com  \n#tail";
        let records = parse_lines(content, true);
        assert_eq!(
            records,
            vec![Record::new(2, "0.0.0.0 a.com"), Record::new(5, "0.0.0.0 b.com")]
        );
        assert!(records
            .iter()
            .all(|r| !r.value.is_empty() && !r.value.starts_with('#')));
    }

    #[test]
    fn no_stripping_keeps_every_line() {
        let content = "a.com\n\n# note\n  b.com\t";
        let records = parse_lines(content, false);
        assert_eq!(records.len(), 4);
        assert_eq!(records[1], Record::new(2, ""));
        assert_eq!(records[2], Record::new(3, "# note"));
        assert_eq!(records[3], Record::new(4, "b.com"));
    }

    #[test]
    fn indented_comment_is_dropped() {
        let records = parse_lines("  # indented\na.com", true);
        assert_eq!(records, vec![Record::new(2, "a.com")]);
    }

    #[test]
    fn missing_file_is_tagged() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_records(&dir.path().join("hosts"), true).unwrap_err();
        assert!(matches!(err, ListError::FileNotFound { .. }));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pihole.txt");
        fs::write(&path, "a.com\r\nb.com\r\n").unwrap();
        let records = read_records(&path, false).unwrap();
        assert_eq!(records, vec![Record::new(1, "a.com"), Record::new(2, "b.com")]);
    }
}
