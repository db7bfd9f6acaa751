//! Input resolution: turn a file or directory path into name → raw bytes.
//!
//! Key asymmetry (intentional, preserved behavior):
//! - single-file input is keyed by the full path string as given;
//! - directory entries are keyed by their bare file names.
//!
//! Directory listing order is filesystem-dependent and never sorted; the
//! table is key-unique, not order-sensitive.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{read_err, GenError};

/// File-name suffixes that mark a file as a template.
pub const TEMPLATE_SUFFIXES: &[&str] = &[".tmpl", ".html"];

/// True when `name` ends in one of [`TEMPLATE_SUFFIXES`].
///
/// Case-sensitive, like the rest of the selection filter.
pub fn is_template_name(name: &str) -> bool {
    TEMPLATE_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// Resolve `input` into a map of template name → raw file content.
///
/// Non-recursive: subdirectories of a directory input are not descended
/// into. Any read failure aborts the whole run; no partial tables.
pub fn resolve(input: &Path) -> Result<HashMap<String, Vec<u8>>, GenError> {
    let mut sources = HashMap::new();

    let input_name = input.to_string_lossy();
    if is_template_name(&input_name) {
        let bytes = std::fs::read(input).map_err(|e| read_err(input, e))?;
        tracing::debug!("resolved single template: {}", input_name);
        sources.insert(input_name.into_owned(), bytes);
        return Ok(sources);
    }

    let entries = std::fs::read_dir(input).map_err(|e| GenError::ReadDir {
        path: input.to_path_buf(),
        source: e,
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| GenError::ReadDir {
            path: input.to_path_buf(),
            source: e,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !is_template_name(&name) {
            tracing::debug!("skipping non-template entry: {}", name);
            continue;
        }
        // A directory named like a template is a read error, same as any
        // unreadable file: the run aborts rather than emit a partial table.
        let path = entry.path();
        let bytes = std::fs::read(&path).map_err(|e| read_err(&path, e))?;
        sources.insert(name, bytes);
    }
    Ok(sources)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
