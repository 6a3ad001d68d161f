//! Allow/deny filtering of files by extension.
//!
//! The filter combines two rule sets supplied on the command line:
//! - Allowed extensions (`-e`): if non-empty, only files with a listed
//!   extension are eligible for organizing.
//! - Denied extensions (`-i`): files with a listed extension are never
//!   organized, overriding the allow-list.

use std::collections::HashSet;

/// Decides which files take part in an organizing run, by extension.
///
/// Extensions are stored in leading-dot form; entries given without the dot
/// (`"png"`) are normalized on insertion so they compare against extracted
/// extensions (`".png"`). No case folding is performed: denying `"PNG"` does
/// not match files ending in `.png`.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    allowed: HashSet<String>,
    denied: HashSet<String>,
}

impl ExtensionFilter {
    /// Creates a filter with no restrictions: every file is eligible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an extension to the allow-list.
    pub fn allow(&mut self, extension: &str) {
        self.allowed.insert(normalize(extension));
    }

    /// Adds an extension to the deny-list.
    pub fn deny(&mut self, extension: &str) {
        self.denied.insert(normalize(extension));
    }

    /// Whether any allow-list entries were supplied.
    pub fn has_allow_list(&self) -> bool {
        !self.allowed.is_empty()
    }

    /// Checks whether a file with the given extension should be organized.
    ///
    /// A file is eligible when the allow-list is empty or contains its
    /// extension, and the deny-list does not contain it. Denial always wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidyup::extension_filter::ExtensionFilter;
    ///
    /// let mut filter = ExtensionFilter::new();
    /// filter.allow("png");
    /// filter.deny("png");
    ///
    /// // Denied even though allowed.
    /// assert!(!filter.should_include(".png"));
    /// // Not on the allow-list.
    /// assert!(!filter.should_include(".rs"));
    /// ```
    pub fn should_include(&self, extension: &str) -> bool {
        if self.denied.contains(extension) {
            return false;
        }
        self.allowed.is_empty() || self.allowed.contains(extension)
    }
}

/// Normalizes an extension to leading-dot form.
fn normalize(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}
