//! CLI subcommands

pub mod batch;
pub mod convert;
pub mod inspect;
pub mod render;

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a body from a file, or from stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
}
