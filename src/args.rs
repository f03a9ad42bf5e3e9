use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Two-letter short accepted for `--remove-duplicates`.
const LEGACY_REMOVE_FLAG: &str = "-rd";

#[derive(Parser, Debug)]
#[command(
    name = "blocklist-keeper",
    about = "Validate new entries and find duplicate records in the hosts, dnsmasq and Pi-hole blocklists",
    version,
    long_about = None
)]
pub struct Args {
    /// IP addresses or domains to validate for addition
    #[arg(short = 'i', long, num_args = 1.., value_name = "RECORD")]
    pub add: Vec<String>,

    /// Scan the tracked files for duplicate records
    #[arg(short, long)]
    pub check_duplicates: bool,

    /// Scan the tracked files and compute the deduplicated lists
    #[arg(short, long, alias = "rd")]
    pub remove_duplicates: bool,

    /// Directory holding hosts, dnsmasq and pihole.txt
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rewrites the literal `-rd` to `--remove-duplicates`, since clap shorts are
/// a single character and would read it as `-r -d`.
pub fn expand_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == LEGACY_REMOVE_FLAG {
                OsString::from("--remove-duplicates")
            } else {
                arg
            }
        })
        .collect()
}
