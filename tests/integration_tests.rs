//! Integration tests for tidyup.
//!
//! These tests spawn the real binary with its working directory pointed at a
//! temporary fixture. That matters because category directories are created
//! relative to the working directory, not the tidied directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary directory the binary runs inside.
struct TestFixture {
    temp_dir: TempDir,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TestFixture { temp_dir }
    }

    fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file with content in the fixture directory.
    fn create_file(&self, rel_path: &str, content: &str) {
        fs::write(self.path().join(rel_path), content).expect("Failed to write file");
    }

    fn create_subdir(&self, name: &str) {
        fs::create_dir(self.path().join(name)).expect("Failed to create subdirectory");
    }

    /// A tidyup command whose working directory is the fixture.
    fn tidyup(&self) -> Command {
        let mut cmd = Command::cargo_bin("tidyup").expect("binary should build");
        cmd.current_dir(self.path());
        cmd
    }

    fn assert_file_exists(&self, rel_path: &str) {
        let path = self.path().join(rel_path);
        assert!(
            path.is_file(),
            "File should exist: {}",
            path.display()
        );
    }

    fn assert_file_not_exists(&self, rel_path: &str) {
        let path = self.path().join(rel_path);
        assert!(!path.exists(), "File should not exist: {}", path.display());
    }
}

// ============================================================================
// Basic organization
// ============================================================================

#[test]
fn organizes_mixed_directory_with_no_flags() {
    let fixture = TestFixture::new();
    fixture.create_file("a.png", "png");
    fixture.create_file("b.rs", "rs");
    fixture.create_file("c.xyz", "xyz");

    fixture
        .tidyup()
        .assert()
        .success()
        .stdout(predicate::str::contains("Tidying..."));

    fixture.assert_file_exists("images/a.png");
    fixture.assert_file_exists("rust/b.rs");
    fixture.assert_file_exists("other/c.xyz");
    fixture.assert_file_not_exists("a.png");
    fixture.assert_file_not_exists("b.rs");
    fixture.assert_file_not_exists("c.xyz");
}

#[test]
fn moves_files_instead_of_copying() {
    let fixture = TestFixture::new();
    fixture.create_file("photo.jpeg", "data");

    fixture.tidyup().assert().success();

    fixture.assert_file_exists("images/photo.jpeg");
    fixture.assert_file_not_exists("photo.jpeg");
}

#[test]
fn routes_every_known_language_extension() {
    let fixture = TestFixture::new();
    fixture.create_file("a.py", "py");
    fixture.create_file("b.cpp", "cpp");
    fixture.create_file("c.java", "java");
    fixture.create_file("d.rs", "rs");

    fixture.tidyup().assert().success();

    fixture.assert_file_exists("python/a.py");
    fixture.assert_file_exists("c++/b.cpp");
    fixture.assert_file_exists("java/c.java");
    fixture.assert_file_exists("rust/d.rs");
}

#[test]
fn leaves_subdirectories_untouched() {
    let fixture = TestFixture::new();
    fixture.create_subdir("keep");
    fixture.create_file("keep/inner.png", "png");
    fixture.create_file("top.png", "png");

    fixture.tidyup().assert().success();

    // Traversal is one level deep; nested files never move.
    fixture.assert_file_exists("keep/inner.png");
    fixture.assert_file_exists("images/top.png");
}

// ============================================================================
// Allow/deny filtering
// ============================================================================

#[test]
fn deny_list_leaves_files_in_place() {
    let fixture = TestFixture::new();
    fixture.create_file("a.png", "png");
    fixture.create_file("b.rs", "rs");
    fixture.create_file("c.xyz", "xyz");

    fixture.tidyup().args(["-i", "png"]).assert().success();

    fixture.assert_file_exists("a.png");
    fixture.assert_file_exists("rust/b.rs");
    fixture.assert_file_exists("other/c.xyz");
}

#[test]
fn allow_list_restricts_to_listed_extensions() {
    let fixture = TestFixture::new();
    fixture.create_file("a.png", "png");
    fixture.create_file("b.rs", "rs");
    fixture.create_file("c.xyz", "xyz");

    fixture.tidyup().args(["-e", "rs"]).assert().success();

    fixture.assert_file_exists("a.png");
    fixture.assert_file_exists("c.xyz");
    fixture.assert_file_exists("rust/b.rs");
    fixture.assert_file_not_exists("images");
    fixture.assert_file_not_exists("other");
}

#[test]
fn deny_overrides_allow_for_same_extension() {
    let fixture = TestFixture::new();
    fixture.create_file("a.png", "png");

    fixture
        .tidyup()
        .args(["-e", "png", "-i", "png"])
        .assert()
        .success();

    fixture.assert_file_exists("a.png");
    fixture.assert_file_not_exists("images/a.png");
}

#[test]
fn filter_lists_collect_multiple_extensions() {
    let fixture = TestFixture::new();
    fixture.create_file("a.png", "png");
    fixture.create_file("b.jpg", "jpg");
    fixture.create_file("c.rs", "rs");
    fixture.create_file("d.py", "py");

    fixture
        .tidyup()
        .args(["-e", "png", "jpg", "rs", "-i", "rs"])
        .assert()
        .success();

    fixture.assert_file_exists("images/a.png");
    fixture.assert_file_exists("images/b.jpg");
    fixture.assert_file_exists("c.rs");
    fixture.assert_file_exists("d.py");
}

// ============================================================================
// Edge cases of extension extraction
// ============================================================================

#[test]
fn uppercase_extension_routes_to_other() {
    let fixture = TestFixture::new();
    fixture.create_file("SCAN.PNG", "png");

    fixture.tidyup().assert().success();

    // Matching is case-sensitive; .PNG is not in the table.
    fixture.assert_file_exists("other/SCAN.PNG");
}

#[test]
fn extensionless_and_dot_files_route_to_other() {
    let fixture = TestFixture::new();
    fixture.create_file("README", "text");
    fixture.create_file(".hidden", "text");

    fixture.tidyup().assert().success();

    fixture.assert_file_exists("other/README");
    fixture.assert_file_exists("other/.hidden");
}

#[test]
fn only_last_extension_counts() {
    let fixture = TestFixture::new();
    fixture.create_file("backup.png.rs", "rs");

    fixture.tidyup().assert().success();

    fixture.assert_file_exists("rust/backup.png.rs");
}

// ============================================================================
// Target directory handling
// ============================================================================

#[test]
fn target_directory_flag_tidies_that_directory() {
    let fixture = TestFixture::new();
    fixture.create_subdir("desktop");
    fixture.create_file("desktop/a.png", "png");
    fixture.create_file("desktop/c.xyz", "xyz");

    fixture
        .tidyup()
        .args(["-d", "desktop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found desktop. Tidying..."));

    // Category directories land in the working directory, not the target.
    fixture.assert_file_exists("images/a.png");
    fixture.assert_file_exists("other/c.xyz");
    fixture.assert_file_not_exists("desktop/a.png");
    fixture.assert_file_not_exists("desktop/images");
}

#[test]
fn target_directory_combines_with_filters() {
    let fixture = TestFixture::new();
    fixture.create_subdir("desktop");
    fixture.create_file("desktop/a.png", "png");
    fixture.create_file("desktop/b.rs", "rs");

    fixture
        .tidyup()
        .args(["-d", "desktop", "-i", "png"])
        .assert()
        .success();

    fixture.assert_file_exists("desktop/a.png");
    fixture.assert_file_exists("rust/b.rs");
}

#[test]
fn missing_target_directory_fails_without_touching_anything() {
    let fixture = TestFixture::new();
    fixture.create_file("a.png", "png");

    fixture
        .tidyup()
        .args(["-d", "no-such-dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Specified directory not found"));

    fixture.assert_file_exists("a.png");
    fixture.assert_file_not_exists("images");
    fixture.assert_file_not_exists("other");
}

// ============================================================================
// CLI surface
// ============================================================================

#[test]
fn help_prints_usage_and_exits_zero() {
    let fixture = TestFixture::new();

    fixture
        .tidyup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: tidyup"));

    fixture
        .tidyup()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: tidyup"));
}

#[test]
fn directory_flag_without_value_is_a_usage_error() {
    let fixture = TestFixture::new();
    fixture.create_file("a.png", "png");

    fixture
        .tidyup()
        .arg("-d")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "you must specify target directory",
        ));

    // A usage error performs no filesystem mutation.
    fixture.assert_file_exists("a.png");
    fixture.assert_file_not_exists("images");
}

#[test]
fn unrecognized_arguments_are_ignored() {
    let fixture = TestFixture::new();
    fixture.create_file("a.png", "png");

    fixture
        .tidyup()
        .args(["--verbose", "stray"])
        .assert()
        .success();

    fixture.assert_file_exists("images/a.png");
}

// ============================================================================
// Collision behavior
// ============================================================================

#[test]
fn destination_collision_replaces_existing_file() {
    let fixture = TestFixture::new();
    fixture.create_subdir("other");
    fixture.create_file("other/c.xyz", "old");
    fixture.create_file("c.xyz", "new");

    fixture.tidyup().assert().success();

    let content =
        fs::read_to_string(fixture.path().join("other/c.xyz")).expect("Failed to read file");
    assert_eq!(content, "new");
    fixture.assert_file_not_exists("c.xyz");
}
