//! Filesystem fragment source.
//!
//! The thin I/O layer in front of the corpus pipeline: walks the
//! configured source layout, reads markdown files into [`Fragment`]s,
//! and encodes the logo as a data URL. Reads are tolerant - an
//! unreadable file degrades to an empty-content fragment (or an empty
//! logo) with a warning, so a broken source tree still produces a
//! usable artifact.
//!
//! [`Fragment`]: quire_corpus::Fragment

mod logo;
mod scanner;

pub use logo::encode_logo;
pub use scanner::{SectionSource, SourceLayout, scan};
