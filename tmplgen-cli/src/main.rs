//! tmplgen — embed template files into a generated Rust source module.
//!
//! # Usage
//!
//! ```text
//! tmplgen --in templates/ --out src/embedded --package tpl
//! tmplgen --in page.html
//! ```
//!
//! Files ending in `.tmpl` or `.html` are base64-encoded into a table in
//! the generated `.gen.rs` file, alongside a fixed loader that registers
//! them with Tera at runtime.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::builder::TypedValueParser as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tmplgen",
    version,
    about = "Embed .tmpl/.html templates into a generated Rust source file",
    long_about = None,
)]
struct Cli {
    /// Template file or directory containing the templates to embed.
    #[arg(
        long = "in",
        value_name = "PATH",
        // clap's default PathBuf parser rejects "" before the explicit
        // empty-input check in main can run; accept empty values here.
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from),
    )]
    input: PathBuf,

    /// Output path for the generated file; a `.gen.rs` suffix is enforced.
    /// Output always goes to the resolved file path, never to stdout.
    #[arg(long = "out", value_name = "PATH", default_value = "")]
    output: String,

    /// Module name declared in the generated file.
    #[arg(long, value_name = "NAME", default_value = "main")]
    package: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.input.as_os_str().is_empty() {
        bail!("please specify a template file or directory with --in");
    }

    let summary = tmplgen_core::generate(&cli.input, &cli.output, &cli.package)
        .with_context(|| format!("failed to embed templates from '{}'", cli.input.display()))?;

    println!(
        "✓ embedded {} template(s) into {}",
        summary.templates.len(),
        summary.output.display()
    );
    for name in &summary.templates {
        println!("  • {name}");
    }
    Ok(())
}
