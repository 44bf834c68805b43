//! Common test utilities for postfeed integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const BASE_URL: &str = "https://blog.example.org";
pub const TITLE: &str = "Field Notes";

/// A throwaway site directory for integration tests
pub struct TestSite {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to site root
    pub path: PathBuf,
}

impl TestSite {
    /// Create a new empty site
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file relative to the site root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a post under `src/posts/`
    pub fn write_post(&self, name: &str, content: &str) {
        self.write_file(&format!("src/posts/{}", name), content);
    }

    /// Read a file relative to the site root
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists relative to the site root
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

/// postfeed command with a clean environment, run from `dir`
#[allow(deprecated)]
pub fn postfeed_cmd_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("postfeed").expect("postfeed binary should be built");
    cmd.current_dir(dir)
        .env_remove("BASE_URL")
        .env_remove("TITLE")
        .env("NO_COLOR", "1");
    cmd
}

/// postfeed command with BASE_URL and TITLE configured
#[allow(dead_code)]
pub fn configured_cmd(site: &TestSite) -> Command {
    let mut cmd = postfeed_cmd_in(&site.path);
    cmd.env("BASE_URL", BASE_URL).env("TITLE", TITLE);
    cmd
}
