//! tmplgen core library: resolve template sources, base64-encode them, and
//! emit a generated Rust module embedding the encoded table plus a fixed
//! loader function.
//!
//! Public API surface:
//! - [`resolve`] — input resolution (single file vs directory)
//! - [`encode`] — standard base64 encode/decode
//! - [`emit`] — artifact assembly, output-path normalization, writing
//! - [`generate`] — the full resolve, encode, emit, write pipeline

pub mod emit;
pub mod encode;
pub mod error;
pub mod resolve;

pub use error::GenError;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Outcome of a successful generation run.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Path the artifact was written to, after suffix normalization.
    pub output: PathBuf,
    /// Names of the embedded templates, sorted for stable reporting.
    pub templates: Vec<String>,
}

/// Run the whole pipeline: resolve `input`, encode every source, emit the
/// artifact for `package`, and write it to the normalized `output` path.
///
/// Strictly sequential; any resolution error aborts the run before the
/// output file is touched.
pub fn generate(input: &Path, output: &str, package: &str) -> Result<GenerateSummary, GenError> {
    let sources = resolve::resolve(input)?;

    let mut table = HashMap::new();
    for (name, bytes) in sources {
        table.insert(name, encode::encode(&bytes));
    }

    let text = emit::emit(package, &table);
    let path = emit::normalize_output_path(output);
    emit::write_generated(&path, &text)?;
    tracing::info!("wrote: {}", path.display());

    let mut templates: Vec<String> = table.into_keys().collect();
    templates.sort();
    Ok(GenerateSummary {
        output: path,
        templates,
    })
}
