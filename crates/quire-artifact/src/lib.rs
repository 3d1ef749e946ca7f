//! Self-contained HTML artifact emitter.
//!
//! Composes the navigation markup, the embedded page corpus, the
//! stylesheet, and the viewer script into one HTML document that works
//! from a `file://` URL with no network dependency. The stylesheet and
//! script are embedded at compile time; the page corpus is serialized
//! into a script-safe JSON data block at build time.

mod embed;
mod template;

pub use embed::corpus_data_block;
pub use template::{ArtifactData, render_artifact};

/// Error returned by the artifact emitter.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to serialize page corpus: {0}")]
    Serialize(#[from] serde_json::Error),
}
