pub mod args;
pub mod config;
pub mod dnsmasq;
pub mod duplicates;
pub mod error;
pub mod maintain;
pub mod reader;
pub mod record;
pub mod utils;
pub mod validate;

pub use args::Args;
pub use config::{Config, FileRole, TrackedFile};
pub use duplicates::detect_duplicates;
pub use error::ListError;
pub use maintain::{run, Outcome};
pub use record::{DuplicateReport, Record, Validation};
pub use validate::RecordValidator;
