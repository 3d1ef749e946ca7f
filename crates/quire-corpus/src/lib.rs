//! Fragment collection and navigation assembly for quire manuals.
//!
//! The build pipeline runs through this crate in two synchronous steps:
//!
//! 1. [`collect`] sorts the raw [`Fragment`]s delivered by a storage
//!    backend into final corpus order and resolves title collisions.
//! 2. [`assemble`] walks the sorted corpus once and produces the
//!    sectioned [`NavGroup`] list plus the [`PageCorpus`] that gets
//!    embedded into the artifact.
//!
//! Both steps are infallible: an empty fragment set yields an empty
//! corpus and an empty navigation tree. Data-hygiene problems
//! (duplicate titles or page ids) resolve last-wins and are surfaced
//! through `tracing` rather than errors.

mod collector;
mod fragment;
mod navigation;
mod page_corpus;

pub use collector::{SortedCorpus, collect};
pub use fragment::Fragment;
pub use navigation::{NavEntry, NavGroup, SECTION_SEPARATOR, assemble};
pub use page_corpus::PageCorpus;
