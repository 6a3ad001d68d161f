//! tidyup - move a directory's files into category subdirectories
//!
//! This library provides the pieces behind the `tidyup` binary: a token
//! state-machine argument parser, an extension-to-category lookup table, an
//! allow/deny extension filter, and the single organizing pass that moves
//! files into their category directories.

pub mod cli;
pub mod extension_filter;
pub mod file_category;
pub mod file_organizer;
pub mod output;

pub use cli::{Config, Invocation, USAGE, UsageError, parse_args};
pub use extension_filter::ExtensionFilter;
pub use file_category::{CategoryTable, extension_of};
pub use file_organizer::{FileOrganizer, OrganizeError, Summary};
