//! # freetool
//!
//! Static site generator for the free online tool landing pages.
//!
//! Renders the site with [`site_leptos`] and writes a self-contained
//! `index.html` to the output directory. One shot, no server, no watch mode.
//!
//! ```bash
//! freetool --out dist
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "freetool")]
#[command(about = "Render the free online tool landing site to static HTML")]
#[command(version)]
struct Args {
    /// Output directory for the rendered site
    #[arg(long, default_value = "dist")]
    out: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Render the home page and write it under `out`.
///
/// Returns the path of the written file.
fn write_site(out: &Path) -> Result<PathBuf> {
    let html = site_leptos::render_home();

    fs::create_dir_all(out)
        .with_context(|| format!("creating output directory {}", out.display()))?;

    let index = out.join("index.html");
    fs::write(&index, &html).with_context(|| format!("writing {}", index.display()))?;

    info!("wrote {} ({} bytes)", index.display(), html.len());
    Ok(index)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    write_site(&args.out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn writes_index_html() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("public");

        let index = write_site(&out).expect("site written");

        assert_eq!(index, out.join("index.html"));
        let html = fs::read_to_string(&index).expect("readable output");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("free online tool"));
    }
}
