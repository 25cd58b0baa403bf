#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn parmd_cmd() -> Command {
    let mut cmd = Command::cargo_bin("parmd").unwrap();
    cmd.env_remove("PARMD_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `<base>.en.md` and `<base>.ru.md` into `dir`, returning the original's path
pub fn write_pair(dir: &Path, base: &str, original: &str, translation: &str) -> PathBuf {
    let original_path = dir.join(format!("{}.en.md", base));
    fs::write(&original_path, original).unwrap();
    fs::write(dir.join(format!("{}.ru.md", base)), translation).unwrap();
    original_path
}
