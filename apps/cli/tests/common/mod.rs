//! Common test utilities for converter integration tests.

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};

/// Write `content` to `name` inside `dir` and return its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let file = dir.join(name);
    fs::write(&file, content).expect("write test file");
    file
}
