//! Logo embedding.

use std::fs;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::warn;

/// Encode an image file as a base64 `data:` URL.
///
/// The mime type is decided by the file extension: `.png` is PNG,
/// anything else is treated as JPEG. An unreadable file degrades to an
/// empty string with a warning, and the artifact renders without a
/// logo.
#[must_use]
pub fn encode_logo(path: &Path) -> String {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read logo image");
            return String::new();
        }
    };
    let mime = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        _ => "image/jpeg",
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
