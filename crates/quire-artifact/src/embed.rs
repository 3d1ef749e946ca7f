//! Corpus serialization for the embedded data block.

use quire_corpus::PageCorpus;
use serde_json::{Map, Value, json};

use crate::ArtifactError;

/// Serialize the page corpus into a script-safe JSON data block.
///
/// The block carries the ordered id list beside the id→content map so
/// the viewer script never depends on object key ordering. Two
/// embedding rules apply:
///
/// - every `</` becomes `<\/` so no page content can close the
///   surrounding `<script>` element (`\/` is a plain `/` after JSON
///   parsing, so the data round-trips unchanged);
/// - non-ASCII text stays literal, keeping the artifact human-diffable.
pub fn corpus_data_block(pages: &PageCorpus) -> Result<String, ArtifactError> {
    let mut map = Map::new();
    for (id, content) in pages.iter() {
        map.insert(id.to_owned(), Value::String(content.to_owned()));
    }
    let block = json!({
        "order": pages.ids(),
        "pages": Value::Object(map),
    });

    Ok(serde_json::to_string(&block)?.replace("</", r"<\/"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_block_carries_order_and_pages() {
        let mut pages = PageCorpus::default();
        pages.insert("zeta", "# Z");
        pages.insert("alpha", "# A");

        let block = corpus_data_block(&pages).unwrap();
        let parsed: Value = serde_json::from_str(&block).unwrap();

        assert_eq!(parsed["order"], json!(["zeta", "alpha"]));
        assert_eq!(parsed["pages"]["zeta"], "# Z");
        assert_eq!(parsed["pages"]["alpha"], "# A");
    }

    #[test]
    fn test_script_close_sequences_are_neutralized() {
        let mut pages = PageCorpus::default();
        pages.insert("page", "literal </script> in prose");

        let block = corpus_data_block(&pages).unwrap();

        assert!(!block.contains("</script"));
        assert!(block.contains(r"<\/script"));
        // The neutralized form parses back to the original text.
        let parsed: Value = serde_json::from_str(&block).unwrap();
        assert_eq!(parsed["pages"]["page"], "literal </script> in prose");
    }

    #[test]
    fn test_non_ascii_stays_literal() {
        let mut pages = PageCorpus::default();
        pages.insert("page", "código — ütf «текст»");

        let block = corpus_data_block(&pages).unwrap();

        assert!(block.contains("código — ütf «текст»"));
        assert!(!block.contains("\\u"));
    }

    #[test]
    fn test_empty_corpus_serializes_to_empty_block() {
        let block = corpus_data_block(&PageCorpus::default()).unwrap();
        let parsed: Value = serde_json::from_str(&block).unwrap();

        assert_eq!(parsed["order"], json!([]));
        assert_eq!(parsed["pages"], json!({}));
    }
}
