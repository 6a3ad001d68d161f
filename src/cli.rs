//! Command-line interface for tidyup.
//!
//! This module turns the raw argument tokens into a [`Config`] and drives
//! the organizing pass. Parsing is an explicit state machine over the token
//! stream: `-e` and `-i` absorb every following token until one starting
//! with `-` appears, which is then reprocessed as a flag. Unrecognized
//! tokens are ignored without error.

use crate::extension_filter::ExtensionFilter;
use crate::file_category::CategoryTable;
use crate::file_organizer::{FileOrganizer, OrganizeResult, Summary};
use crate::output::OutputFormatter;
use log::debug;
use std::path::PathBuf;
use thiserror::Error;

/// Usage text printed for `-h`/`--help` and on usage errors.
pub const USAGE: &str = "\
Usage: tidyup [-h|--help] [-d DIRECTORY] [-e EXT...] [-i EXT...]

Groups the files of a directory by extension and moves them into category
subdirectories (images, one directory per recognized language, other).
Category directories are created next to where tidyup is run.

Options:
  -h, --help       Display this help message and exit.
  -d DIRECTORY     Tidy DIRECTORY instead of the current directory.
  -e EXT...        Only consider files with one of these extensions.
  -i EXT...        Never touch files with one of these extensions
                   (overrides -e).

Examples:
  tidyup
    Tidies the current directory.

  tidyup -d ~/Desktop -i png jpg
    Tidies the desktop but leaves images where they are.";

/// What the user asked tidyup to do.
#[derive(Debug)]
pub enum Invocation {
    /// Print the usage text and exit successfully.
    Help,
    /// Run the organizing pass with the given configuration.
    Run(Config),
}

/// Configuration produced by argument parsing.
#[derive(Debug, Clone)]
pub struct Config {
    /// The directory whose immediate file entries are organized.
    pub target_directory: PathBuf,
    /// Allow/deny extension rules from `-e` and `-i`.
    pub filter: ExtensionFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_directory: PathBuf::from("."),
            filter: ExtensionFilter::new(),
        }
    }
}

/// Errors reported for malformed invocations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("When using flag -d you must specify target directory")]
    MissingDirectoryValue,
}

/// Parser states for the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Looking for the next flag.
    Scanning,
    /// Absorbing allow-list extensions after `-e`.
    CollectingAllow,
    /// Absorbing deny-list extensions after `-i`.
    CollectingDeny,
}

/// Parses the argument tokens following the program name.
///
/// # Examples
///
/// ```
/// use tidyup::cli::{Invocation, parse_args};
///
/// let tokens = ["-e", "rs", "py", "-i", "png"].map(String::from);
/// let Ok(Invocation::Run(config)) = parse_args(tokens) else {
///     panic!("expected a run invocation");
/// };
/// assert!(config.filter.should_include(".rs"));
/// assert!(!config.filter.should_include(".png"));
/// ```
pub fn parse_args(tokens: impl IntoIterator<Item = String>) -> Result<Invocation, UsageError> {
    let mut config = Config::default();
    let mut state = ParseState::Scanning;
    let mut tokens = tokens.into_iter();

    while let Some(token) = tokens.next() {
        // A dash-prefixed token ends extension collection and is handled as
        // a flag again. Extensions therefore cannot start with `-`.
        if token.starts_with('-') {
            state = ParseState::Scanning;
        }

        match state {
            ParseState::Scanning => match token.as_str() {
                "-h" | "--help" => return Ok(Invocation::Help),
                "-d" => match tokens.next() {
                    Some(directory) if !directory.starts_with('-') => {
                        config.target_directory = PathBuf::from(directory);
                    }
                    _ => return Err(UsageError::MissingDirectoryValue),
                },
                "-e" => state = ParseState::CollectingAllow,
                "-i" => state = ParseState::CollectingDeny,
                other => debug!("ignoring unrecognized argument {other:?}"),
            },
            ParseState::CollectingAllow => config.filter.allow(&token),
            ParseState::CollectingDeny => config.filter.deny(&token),
        }
    }

    Ok(Invocation::Run(config))
}

/// Runs the organizing pass for a parsed configuration and prints the
/// closing summary.
pub fn run(config: &Config) -> OrganizeResult<Summary> {
    let table = CategoryTable::default();
    let summary = FileOrganizer::organize(&config.target_directory, &config.filter, &table)?;
    OutputFormatter::summary_table(&summary.moved, summary.total_moved());
    Ok(summary)
}
