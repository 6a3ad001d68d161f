/// Extension-based file classification.
///
/// This module provides the fixed lookup table that routes a file extension
/// (leading dot included, e.g. `".png"`) to the category directory its files
/// belong in. Extensions without a mapping route to a fallback directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tidyup::file_category::CategoryTable;
///
/// let table = CategoryTable::default();
/// assert_eq!(table.directory_for(".png"), Path::new("./images"));
/// assert_eq!(table.directory_for(".rs"), Path::new("./rust"));
/// assert_eq!(table.directory_for(".xyz"), Path::new("./other"));
/// ```
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Maps file extensions to category directories.
///
/// The table is built once at startup and passed by reference into the
/// organizing pass, so tests can supply alternate mappings (for example with
/// directories rooted inside a temporary fixture).
///
/// Lookup is an exact string match on the extension including its leading
/// dot; `".PNG"` does not match the `".png"` entry and falls through to the
/// fallback directory.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    directories: HashMap<String, PathBuf>,
    fallback: PathBuf,
}

impl CategoryTable {
    /// Creates an empty table that routes everything to `fallback`.
    pub fn new(fallback: impl Into<PathBuf>) -> Self {
        Self {
            directories: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Adds an extension to directory mapping.
    ///
    /// The extension is stored as given; callers are expected to include the
    /// leading dot.
    pub fn add_mapping(&mut self, extension: &str, directory: impl Into<PathBuf>) {
        self.directories
            .insert(extension.to_string(), directory.into());
    }

    /// Returns the directory files with `extension` should be moved into.
    ///
    /// Unmapped extensions (including the empty extension of files without a
    /// dot in their name) resolve to the fallback directory.
    pub fn directory_for(&self, extension: &str) -> &Path {
        self.directories
            .get(extension)
            .map(PathBuf::as_path)
            .unwrap_or(&self.fallback)
    }
}

impl Default for CategoryTable {
    /// The standard table: images, one directory per recognized language,
    /// and `./other` for everything else.
    ///
    /// Category directories are relative to the process working directory,
    /// not the directory being tidied.
    fn default() -> Self {
        let mut table = Self::new("./other");
        table.add_mapping(".png", "./images");
        table.add_mapping(".jpg", "./images");
        table.add_mapping(".jpeg", "./images");
        table.add_mapping(".py", "./python");
        table.add_mapping(".cpp", "./c++");
        table.add_mapping(".java", "./java");
        table.add_mapping(".rs", "./rust");
        table
    }
}

/// Extracts the extension of a file name, leading dot included.
///
/// The extension is the substring from the last `.` onwards, with case
/// preserved. Names without a dot, and dotfiles whose only dot is the
/// leading character, yield the empty string (which the table routes to the
/// fallback directory).
///
/// # Examples
///
/// ```
/// use tidyup::file_category::extension_of;
///
/// assert_eq!(extension_of("photo.png"), ".png");
/// assert_eq!(extension_of("archive.tar.gz"), ".gz");
/// assert_eq!(extension_of("README"), "");
/// assert_eq!(extension_of(".gitignore"), "");
/// ```
pub fn extension_of(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(index) if index > 0 => file_name[index..].to_string(),
        _ => String::new(),
    }
}
