use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::*;
use crate::config::Config;

struct FixedLoader {
    width: f64,
}

impl ConfigLoader for FixedLoader {
    fn load(&self) -> Result<LoadResult> {
        let mut config = Config::default();
        config.render.width = self.width;
        Ok(LoadResult {
            config,
            source: Some(PathBuf::from("/project/.plainviz.toml")),
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        Ok(LoadResult {
            config: Config::default(),
            source: Some(path.to_path_buf()),
        })
    }
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn read_input_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chart.pv");
    std::fs::write(&path, "A: 1\n").unwrap();

    assert_eq!(read_input(Some(&path)).unwrap(), "A: 1\n");
}

#[test]
fn read_input_missing_file_is_file_read_error() {
    let err = read_input(Some(Path::new("definitely/missing.pv"))).unwrap_err();
    assert!(matches!(err, PlainvizError::FileRead { .. }));
    assert_eq!(err.error_type(), "FileRead");
}

#[test]
fn write_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("chart.svg");

    write_output(Some(&output_path), "<svg/>").unwrap();
    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "<svg/>");
}

#[test]
fn write_output_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out").join("charts").join("chart.svg");

    write_output(Some(&output_path), "<svg/>").unwrap();
    assert!(output_path.exists());
}

#[test]
fn no_config_skips_loader() {
    let loader = FixedLoader { width: 900.0 };
    let result = load_config_with(&loader, None, true).unwrap();
    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn default_discovery_uses_loader() {
    let loader = FixedLoader { width: 900.0 };
    let result = load_config_with(&loader, None, false).unwrap();
    assert_eq!(result.config.render.width, 900.0);
}

#[test]
fn explicit_path_wins() {
    let loader = FixedLoader { width: 900.0 };
    let result = load_config_with(&loader, Some(Path::new("custom.toml")), false).unwrap();
    assert_eq!(result.source, Some(PathBuf::from("custom.toml")));
    assert_eq!(result.config.render.width, 500.0);
}
