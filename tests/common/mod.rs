#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the plainviz binary.
#[macro_export]
macro_rules! plainviz {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("plainviz"))
    };
}

pub const BAR_CHART: &str = "Type: bar\nTitle: Fruit Sales\nApples: 50\nOranges: 30\nBananas: 45\n";

pub const MULTI_SERIES_LINE: &str =
    "Type: line\nLegend: 2023, 2024\nQ1: 100, 120\nQ2: 110, 150\nQ3: 90, 140\n";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.plainviz.toml` in the temp directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".plainviz.toml", content)
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
