//! The disk access behind `.plainviz.toml` discovery.
//!
//! [`FileConfigLoader`](super::FileConfigLoader) only touches the disk through
//! [`FileSystem`], so its tests can hand it an in-memory tree instead.

use std::path::{Path, PathBuf};

/// Where the config loader looks for `.plainviz.toml` and `config.toml`.
pub trait FileSystem {
    /// Contents of a config file that [`exists`](Self::exists) reported.
    ///
    /// # Errors
    /// Any I/O error; the loader reports it with the path attached.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Whether a candidate config file is present.
    fn exists(&self, path: &Path) -> bool;

    /// Directory searched first, for a project-local `.plainviz.toml`.
    ///
    /// # Errors
    /// When the working directory has been removed or is unreadable.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Fallback directory holding the user-wide `config.toml`, or `None` when
    /// the platform has no home directory:
    /// - Windows: `%APPDATA%\plainviz`
    /// - macOS: `~/Library/Application Support/plainviz`
    /// - Linux: `~/.config/plainviz` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Reads from the real disk; used by the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "plainviz").map(|dirs| dirs.config_dir().to_path_buf())
    }
}
