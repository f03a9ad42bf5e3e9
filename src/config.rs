use std::path::PathBuf;

use crate::args::Args;

/// One of the three blocklists this tool maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Hosts,
    Dnsmasq,
    Pihole,
}

impl FileRole {
    pub const ALL: [FileRole; 3] = [FileRole::Hosts, FileRole::Dnsmasq, FileRole::Pihole];

    pub fn file_name(self) -> &'static str {
        match self {
            FileRole::Hosts => "hosts",
            FileRole::Dnsmasq => "dnsmasq",
            FileRole::Pihole => "pihole.txt",
        }
    }

    /// Whether blank and `#` comment lines are dropped when reading.
    pub fn strips_comments(self) -> bool {
        !matches!(self, FileRole::Pihole)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    pub role: FileRole,
    pub path: PathBuf,
    pub strip_comments: bool,
}

impl TrackedFile {
    pub fn label(&self) -> &'static str {
        self.role.file_name()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub add: Vec<String>,
    pub check_duplicates: bool,
    pub remove_duplicates: bool,
    pub base_dir: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn has_action(&self) -> bool {
        !self.add.is_empty() || self.scans()
    }

    /// True when either duplicate flag was given.
    pub fn scans(&self) -> bool {
        self.check_duplicates || self.remove_duplicates
    }

    pub fn tracked_files(&self) -> Vec<TrackedFile> {
        FileRole::ALL
            .iter()
            .map(|&role| TrackedFile {
                role,
                path: self.base_dir.join(role.file_name()),
                strip_comments: role.strips_comments(),
            })
            .collect()
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            add: args.add,
            check_duplicates: args.check_duplicates,
            remove_duplicates: args.remove_duplicates,
            base_dir: args.dir,
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn tracked_files_keep_fixed_order() {
        let config = Config {
            base_dir: PathBuf::from("lists"),
            ..Config::default()
        };
        let files = config.tracked_files();
        let roles: Vec<FileRole> = files.iter().map(|f| f.role).collect();
        assert_eq!(roles, FileRole::ALL);
        assert_eq!(files[2].path, Path::new("lists").join("pihole.txt"));
    }

    #[test]
    fn only_pihole_keeps_comments() {
        let strip: Vec<bool> = Config::default()
            .tracked_files()
            .iter()
            .map(|f| f.strip_comments)
            .collect();
        assert_eq!(strip, vec![true, true, false]);
    }

    #[test]
    fn no_flags_means_no_action() {
        assert!(!Config::default().has_action());
        let config = Config {
            add: vec!["example.com".to_string()],
            ..Config::default()
        };
        assert!(config.has_action());
        assert!(!config.scans());
    }
}
