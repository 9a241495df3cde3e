use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    unreadable: Vec<PathBuf>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            unreadable: Vec::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/svgchart")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.push(path.into());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.unreadable.iter().any(|p| p == path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn defaults_when_nothing_found() {
    let result = FileConfigLoader::with_fs(MockFileSystem::new()).load().unwrap();
    assert_eq!(result.config, Config::default());
    assert_eq!(result.source, ConfigSource::Defaults);
    assert!(result.source.path().is_none());
}

#[test]
fn candidates_are_local_then_user() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    assert_eq!(
        loader.candidates(),
        vec![
            ConfigSource::Local(PathBuf::from("/project/.svgchart.toml")),
            ConfigSource::User(PathBuf::from("/home/user/.config/svgchart/config.toml")),
        ]
    );
}

#[test]
fn local_config_wins() {
    let fs = MockFileSystem::new()
        .with_file("/project/.svgchart.toml", "[chart]\nwidth = 100\n")
        .with_file("/home/user/.config/svgchart/config.toml", "[chart]\nwidth = 200\n");
    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!((result.config.chart.width - 100.0).abs() < f64::EPSILON);
    assert_eq!(
        result.source,
        ConfigSource::Local(PathBuf::from("/project/.svgchart.toml"))
    );
}

#[test]
fn user_config_is_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/svgchart/config.toml",
        "[chart]\ntype = \"histogram\"\n",
    );
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config.chart.chart_type.as_deref(), Some("histogram"));
    assert!(matches!(result.source, ConfigSource::User(_)));
}

#[test]
fn no_config_dir_skips_user_candidate() {
    let fs = MockFileSystem {
        config_dir: None,
        ..MockFileSystem::new()
    };
    let loader = FileConfigLoader::with_fs(fs);
    assert_eq!(loader.candidates().len(), 1);
    assert_eq!(loader.load().unwrap().source, ConfigSource::Defaults);
}

#[test]
fn unreadable_candidate_is_an_error() {
    let fs = MockFileSystem::new().with_unreadable("/project/.svgchart.toml");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, SvgChartError::FileRead { .. }));
}

#[test]
fn explicit_missing_path_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();
    assert!(matches!(err, SvgChartError::FileRead { .. }));
}

#[test]
fn explicit_path_is_reported_as_source() {
    let fs = MockFileSystem::new().with_file("/etc/chart.toml", "[chart]\nheight = 10\n");
    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/etc/chart.toml"))
        .unwrap();
    assert_eq!(
        result.source,
        ConfigSource::Explicit(PathBuf::from("/etc/chart.toml"))
    );
    assert_eq!(result.source.to_string(), "/etc/chart.toml");
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.svgchart.toml", "[chart\nwidth = ");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, SvgChartError::TomlParse(_)));
}

#[test]
fn source_display_names_location() {
    let local = ConfigSource::Local(PathBuf::from("/p/.svgchart.toml"));
    assert_eq!(local.to_string(), "/p/.svgchart.toml (working directory)");
    assert_eq!(ConfigSource::Defaults.to_string(), "built-in defaults");
}
