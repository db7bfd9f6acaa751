//! Artifact emission: assemble the generated Rust source text and write it.
//!
//! The emitter is a pure text-assembly step over the already-computed
//! encoded table. Layout of the artifact:
//!
//! ```text
//! // Generated by tmplgen. Do not edit by hand.
//! pub mod <package> {
//!     use ...;                     (base64 engine + Tera)
//!     pub static EMBEDDED_TEMPLATES: &[(&str, &str)] = &[ ... ];
//!     pub fn parse(...) { ... }    (fixed loader, emitted verbatim)
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::GenError;

/// Reserved suffix for generated files, so they stay visually distinct
/// from hand-written sources.
pub const GENERATED_SUFFIX: &str = ".gen.rs";

/// The loader function, emitted verbatim into every artifact.
///
/// Its runtime behavior belongs to the consuming program: decode each
/// table entry, register it under its name, abort on the first decode or
/// parse failure.
const LOADER: &str = r#"    /// Decode every embedded template and register it with `tera`.
    ///
    /// Pass `None` to start from a fresh `Tera` instance. A malformed
    /// base64 entry or a template parse failure aborts the remaining
    /// entries and is returned to the caller.
    pub fn parse(tera: Option<Tera>) -> Result<Tera, Box<dyn std::error::Error>> {
        let mut tera = tera.unwrap_or_default();
        for (name, encoded) in EMBEDDED_TEMPLATES {
            let decoded = STANDARD.decode(encoded)?;
            tera.add_raw_template(name, &String::from_utf8(decoded)?)?;
        }
        Ok(tera)
    }
"#;

/// Assemble the complete artifact text for `package` and the encoded table.
///
/// Entries are written in map-iteration order; no ordering is guaranteed
/// across runs, only the entry set.
pub fn emit(package: &str, table: &HashMap<String, String>) -> String {
    let mut out = String::new();
    out.push_str("// Generated by tmplgen. Do not edit by hand.\n\n");
    out.push_str(&format!("pub mod {package} {{\n"));
    out.push_str("    use base64::engine::general_purpose::STANDARD;\n");
    out.push_str("    use base64::Engine;\n");
    out.push_str("    use tera::Tera;\n\n");
    out.push_str("    /// Template name paired with its standard-base64 content.\n");
    out.push_str("    pub static EMBEDDED_TEMPLATES: &[(&str, &str)] = &[\n");
    for (name, encoded) in table {
        // Debug-format the key: single-file keys are path strings and may
        // contain characters that need escaping in a Rust literal.
        out.push_str(&format!("        ({name:?}, {encoded:?}),\n"));
    }
    out.push_str("    ];\n\n");
    out.push_str(LOADER);
    out.push_str("}\n");
    out
}

/// Apply the generated-file suffix rule to a requested output path.
///
/// Paths already ending in [`GENERATED_SUFFIX`] pass through unchanged;
/// otherwise a trailing `.rs` (if any) is stripped and the suffix appended.
/// The empty string resolves to `.gen.rs` in the current directory.
pub fn normalize_output_path(out: &str) -> PathBuf {
    if out.ends_with(GENERATED_SUFFIX) {
        return PathBuf::from(out);
    }
    let stem = out.strip_suffix(".rs").unwrap_or(out);
    PathBuf::from(format!("{stem}{GENERATED_SUFFIX}"))
}

/// Write the artifact in one shot, overwriting any existing file.
pub fn write_generated(path: &Path, text: &str) -> Result<(), GenError> {
    std::fs::write(path, text).map_err(|e| GenError::WriteOutput {
        path: path.to_path_buf(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn declares_the_requested_package() {
        let out = emit("tpl", &table(&[]));
        assert!(out.contains("pub mod tpl {"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn default_package_name_is_legal_rust() {
        // `main` is not a reserved module name.
        let out = emit("main", &table(&[]));
        assert!(out.contains("pub mod main {"));
    }

    #[test]
    fn emits_one_line_per_entry_with_trailing_comma() {
        let out = emit("tpl", &table(&[("a.tmpl", "aGVsbG8="), ("b.html", "YWI=")]));
        assert!(out.contains("        (\"a.tmpl\", \"aGVsbG8=\"),\n"));
        assert!(out.contains("        (\"b.html\", \"YWI=\"),\n"));
    }

    #[test]
    fn keys_are_escaped_as_rust_literals() {
        let out = emit("tpl", &table(&[(r"sub\a.tmpl", "aGVsbG8=")]));
        assert!(out.contains(r#"("sub\\a.tmpl", "aGVsbG8="),"#));
    }

    #[test]
    fn imports_cover_the_loader_needs() {
        let out = emit("tpl", &table(&[]));
        assert!(out.contains("use base64::engine::general_purpose::STANDARD;"));
        assert!(out.contains("use base64::Engine;"));
        assert!(out.contains("use tera::Tera;"));
    }

    #[test]
    fn loader_is_emitted_verbatim() {
        let out = emit("tpl", &table(&[("a.tmpl", "aGVsbG8=")]));
        assert!(out.contains(LOADER), "loader text must appear unmodified");
    }

    #[test]
    fn empty_table_still_emits_table_and_loader() {
        let out = emit("tpl", &table(&[]));
        assert!(out.contains("pub static EMBEDDED_TEMPLATES: &[(&str, &str)] = &[\n    ];"));
        assert!(out.contains("pub fn parse("));
    }

    #[test]
    fn braces_are_balanced() {
        let out = emit("tpl", &table(&[("a.tmpl", "aGVsbG8=")]));
        let open = out.matches('{').count();
        let close = out.matches('}').count();
        assert_eq!(open, close);
    }

    #[test]
    fn normalize_appends_suffix_to_bare_names() {
        assert_eq!(normalize_output_path("widgets"), PathBuf::from("widgets.gen.rs"));
    }

    #[test]
    fn normalize_replaces_a_plain_rs_suffix() {
        assert_eq!(normalize_output_path("widgets.rs"), PathBuf::from("widgets.gen.rs"));
    }

    #[test]
    fn normalize_keeps_an_existing_generated_suffix() {
        assert_eq!(
            normalize_output_path("widgets.gen.rs"),
            PathBuf::from("widgets.gen.rs")
        );
    }

    #[test]
    fn normalize_handles_the_empty_default() {
        assert_eq!(normalize_output_path(""), PathBuf::from(".gen.rs"));
    }

    #[test]
    fn normalize_preserves_parent_directories() {
        assert_eq!(
            normalize_output_path("src/embedded.rs"),
            PathBuf::from("src/embedded.gen.rs")
        );
    }

    #[test]
    fn write_generated_overwrites_existing_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.gen.rs");
        std::fs::write(&path, "stale").unwrap();
        write_generated(&path, "fresh").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn write_to_missing_directory_is_a_write_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("no-such-dir").join("out.gen.rs");
        let err = write_generated(&path, "text").expect_err("missing parent dir");
        assert!(matches!(err, GenError::WriteOutput { .. }), "got {err:?}");
    }
}
