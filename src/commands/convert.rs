//! Convert a Markdown body to the structured token form

use anyhow::Result;
use std::path::Path;

use super::read_input;
use crate::content::convert_to_structured;

pub fn run(path: &Path) -> Result<String> {
    let input = read_input(path)?;
    Ok(convert_to_structured(&input))
}
