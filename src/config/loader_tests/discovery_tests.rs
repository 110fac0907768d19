//! Tests for config file discovery (current dir, user config, fallback).

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader, FileConfigLoader};

use super::mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file("/my/project/.plainviz.toml", "[render]\nwidth = 640\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!((result.config.render.width - 640.0).abs() < f64::EPSILON);
    assert_eq!(
        result.source.as_deref(),
        Some(Path::new("/my/project/.plainviz.toml"))
    );
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new()
        .with_config_dir(Some(PathBuf::from("/home/tester/.config/plainviz")))
        .with_file(
            "/home/tester/.config/plainviz/config.toml",
            "[render]\ntheme = \"light\"\n",
        );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.render.theme, Some(crate::render::Theme::Light));
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.plainviz.toml", "[render]\nheight = 200\n")
        .with_file("/home/user/.config/plainviz/config.toml", "[render]\nheight = 600\n");

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!((result.config.render.height - 200.0).abs() < f64::EPSILON);
}

#[test]
fn missing_config_dir_is_not_an_error() {
    let fs = MockFileSystem::new().with_config_dir(None);

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!(result.source.is_none());
}

#[test]
fn explicit_path_must_exist() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader.load_from_path(Path::new("/nowhere.toml")).unwrap_err();

    assert_eq!(err.error_type(), "Config");
    assert!(err.message().contains("/nowhere.toml"));
}
