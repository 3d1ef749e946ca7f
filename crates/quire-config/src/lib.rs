//! Configuration management for quire.
//!
//! Parses `quire.toml` with serde and provides auto-discovery of the
//! config file in parent directories. Every field has a default, so a
//! project without a config file builds with the stock layout: a root
//! manual file plus the conventional `docs/` section directories.
//!
//! Path-valued fields (`logo`, `docs_dir`, `output`, `root.path`)
//! support `~` expansion.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quire.toml";

/// Error returned when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}

/// Manual build configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ManualConfig {
    /// Manual title shown in the artifact header.
    pub title: String,
    /// Tagline shown beside the title on wide viewports.
    pub tagline: String,
    /// Logo image path, embedded as a data URL. `None` omits the logo.
    pub logo: Option<String>,
    /// Root manual document rendered as the first page.
    pub root: Option<RootDocConfig>,
    /// Directory containing the section subdirectories.
    pub docs_dir: String,
    /// Output path for the built artifact.
    pub output: String,
    /// Path markers that exclude a file from collection.
    pub exclude: Vec<String>,
    /// Section directories in presentation order.
    pub sections: Vec<SectionConfig>,
}

/// The root manual document.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RootDocConfig {
    /// Path to the markdown file.
    pub path: String,
    /// Navigation title for the page.
    pub title: String,
}

/// One section directory under `docs_dir`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SectionConfig {
    /// Subdirectory name.
    pub dir: String,
    /// Section label shown in the sidebar.
    pub title: String,
    /// Ordering rank; the root document uses rank 0.
    pub order: u32,
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            title: "Manual".to_owned(),
            tagline: String::new(),
            logo: None,
            root: Some(RootDocConfig {
                path: "MANUAL.md".to_owned(),
                title: "Reference".to_owned(),
            }),
            docs_dir: "docs".to_owned(),
            output: "manual.html".to_owned(),
            exclude: vec!["development".to_owned()],
            sections: vec![
                section("getting-started", "Getting Started", 1),
                section("language-guide", "Language Guide", 2),
                section("advanced", "Advanced Topics", 3),
                section("reference", "API Reference", 4),
                section("design", "Design & Philosophy", 5),
                section("contributing", "Contributing", 6),
            ],
        }
    }
}

fn section(dir: &str, title: &str, order: u32) -> SectionConfig {
    SectionConfig {
        dir: dir.to_owned(),
        title: title.to_owned(),
        order,
    }
}

impl ManualConfig {
    /// Load configuration from a specific file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        Ok(config)
    }

    /// Discover and load `quire.toml`, walking up from `start_dir`.
    ///
    /// Falls back to the default configuration when no file is found.
    pub fn discover(start_dir: &Path) -> Result<Self, ConfigError> {
        let mut dir = Some(start_dir);
        while let Some(current) = dir {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Self::load(&candidate);
            }
            dir = current.parent();
        }
        Ok(Self::default())
    }

    /// Logo path with `~` expanded, when configured.
    #[must_use]
    pub fn logo_path(&self) -> Option<PathBuf> {
        self.logo.as_deref().map(expand_path)
    }

    /// Root document with `~` expanded, when configured.
    #[must_use]
    pub fn root_doc(&self) -> Option<(PathBuf, String)> {
        self.root
            .as_ref()
            .map(|root| (expand_path(&root.path), root.title.clone()))
    }

    /// Docs directory with `~` expanded.
    #[must_use]
    pub fn docs_dir_path(&self) -> PathBuf {
        expand_path(&self.docs_dir)
    }

    /// Output path with `~` expanded.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        expand_path(&self.output)
    }
}

/// Expand `~` in a path-valued setting.
fn expand_path(value: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(value).into_owned())
}
