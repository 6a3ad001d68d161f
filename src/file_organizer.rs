/// The organizing pass: classify a directory's files and move them into
/// category subdirectories.
///
/// The pass is strictly one level deep and single-threaded. Directories and
/// non-regular entries are left untouched. Category directories are created
/// on demand and are relative to the process working directory, not the
/// directory being tidied.
use crate::extension_filter::ExtensionFilter;
use crate::file_category::{CategoryTable, extension_of};
use crate::output::OutputFormatter;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the organizing pass.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The target directory does not exist or is not a directory. Raised
    /// before any filesystem mutation.
    #[error("Specified directory not found")]
    DirectoryNotFound { path: PathBuf },
    /// The target directory listing could not be read.
    #[error("Error reading directory {}: {source}", path.display())]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A category directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A file could not be moved into its category directory.
    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    FileMoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for organizing operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Outcome of an organizing run: moves per category directory, plus the
/// number of files that could not be moved.
#[derive(Debug, Default)]
pub struct Summary {
    /// Count of moved files keyed by category directory.
    pub moved: HashMap<String, usize>,
    /// Files whose create/move step failed and were skipped.
    pub failures: usize,
}

impl Summary {
    /// Total number of files moved in this run.
    pub fn total_moved(&self) -> usize {
        self.moved.values().sum()
    }

    fn record_move(&mut self, category: &Path) {
        *self
            .moved
            .entry(category.display().to_string())
            .or_insert(0) += 1;
    }
}

/// Moves files into category subdirectories.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Runs one organizing pass over the immediate entries of `target`.
    ///
    /// The target must be `"."` or an existing directory; otherwise the run
    /// aborts with [`OrganizeError::DirectoryNotFound`] before touching
    /// anything. A file whose directory creation or move fails is reported
    /// on standard error and counted in the summary, and the pass continues
    /// with the remaining files.
    pub fn organize(
        target: &Path,
        filter: &ExtensionFilter,
        table: &CategoryTable,
    ) -> OrganizeResult<Summary> {
        if target == Path::new(".") {
            OutputFormatter::info("Tidying...");
        } else if target.is_dir() {
            OutputFormatter::info(&format!("Found {}. Tidying...", target.display()));
        } else {
            return Err(OrganizeError::DirectoryNotFound {
                path: target.to_path_buf(),
            });
        }

        let entries = fs::read_dir(target).map_err(|source| OrganizeError::ReadDirFailed {
            path: target.to_path_buf(),
            source,
        })?;

        // Collect candidates before moving anything so the moves do not
        // interleave with the live directory listing.
        let mut candidates: Vec<(PathBuf, String)> = Vec::new();
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if !file_type.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            let extension = extension_of(&name);
            if filter.should_include(&extension) {
                candidates.push((entry.path(), extension));
            } else {
                debug!("skipping {name}: extension {extension:?} filtered out");
            }
        }

        let mut summary = Summary::default();
        let bar = OutputFormatter::move_progress_bar(candidates.len() as u64);

        for (path, extension) in &candidates {
            let directory = table.directory_for(extension);
            match Self::move_into_directory(path, directory) {
                Ok(destination) => {
                    debug!("moved {} to {}", path.display(), destination.display());
                    let name = destination.file_name().unwrap_or_default();
                    bar.suspend(|| {
                        OutputFormatter::success(&format!(
                            "{} → {}/",
                            name.to_string_lossy(),
                            directory.display()
                        ));
                    });
                    summary.record_move(directory);
                }
                Err(e) => {
                    bar.suspend(|| OutputFormatter::error(&e.to_string()));
                    summary.failures += 1;
                }
            }
            bar.inc(1);
        }
        bar.finish_and_clear();

        Ok(summary)
    }

    /// Moves one file into `directory`, creating the directory if absent.
    ///
    /// The file keeps its name. `fs::rename` replaces an existing
    /// destination file on Unix; collisions are not handled beyond what the
    /// rename primitive does.
    pub fn move_into_directory(file_path: &Path, directory: &Path) -> OrganizeResult<PathBuf> {
        if !directory.is_dir() {
            fs::create_dir(directory).map_err(|source| OrganizeError::DirectoryCreationFailed {
                path: directory.to_path_buf(),
                source,
            })?;
        }

        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailed {
                from: file_path.to_path_buf(),
                to: directory.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "file has no name component"),
            })?;

        let destination = directory.join(file_name);
        fs::rename(file_path, &destination).map_err(|source| OrganizeError::FileMoveFailed {
            from: file_path.to_path_buf(),
            to: destination.clone(),
            source,
        })?;

        Ok(destination)
    }
}
