//! `quire build` command.

use std::path::{Path, PathBuf};

use clap::Args;
use quire_artifact::{ArtifactData, render_artifact};
use quire_config::ManualConfig;
use quire_corpus::{assemble, collect};
use quire_storage_fs::{SectionSource, SourceLayout, encode_logo, scan};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `build` command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to quire.toml (discovered upward from the current
    /// directory when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path, overriding the configured one.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    /// Execute the build: scan, collect, assemble, emit.
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let config = match &self.config {
            Some(path) => ManualConfig::load(path)?,
            None => ManualConfig::discover(Path::new("."))?,
        };

        output.info("Collecting documentation files...");
        let fragments = scan(&source_layout(&config));
        let corpus = collect(fragments);
        output.info(&format!("Found {} documentation pages", corpus.len()));

        let (navigation, pages) = assemble(corpus);
        let logo_data_url = config
            .logo_path()
            .map(|path| encode_logo(&path))
            .unwrap_or_default();

        let html = render_artifact(&ArtifactData {
            title: config.title.clone(),
            tagline: config.tagline.clone(),
            logo_data_url,
            navigation,
            pages,
        })?;

        let out_path = self
            .output
            .clone()
            .unwrap_or_else(|| config.output_path());
        std::fs::write(&out_path, html)?;

        output.success(&format!(
            "✓ Documentation viewer built: {}",
            out_path.display()
        ));
        output.info("  open it straight from disk, no server required");
        Ok(())
    }
}

/// Translate the loaded configuration into a source layout.
fn source_layout(config: &ManualConfig) -> SourceLayout {
    SourceLayout {
        root_doc: config.root_doc(),
        docs_dir: config.docs_dir_path(),
        sections: config
            .sections
            .iter()
            .map(|section| SectionSource {
                dir: section.dir.clone(),
                title: section.title.clone(),
                order: section.order,
            })
            .collect(),
        exclude: config.exclude.clone(),
    }
}
