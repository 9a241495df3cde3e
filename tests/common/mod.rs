#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the svgchart binary.
#[macro_export]
macro_rules! svgchart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("svgchart"))
    };
}

/// Creates a temporary directory with input and config files.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
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

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `.svgchart.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".svgchart.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

/// Square 100x100 bar chart config without margins.
pub const SQUARE_BAR_CONFIG: &str = r#"
[chart]
type = "bar"
width = 100
height = 100
stylesheet = "square.css"
"#;
