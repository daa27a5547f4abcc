//! Dictionary loading and the anagram index built from it
//!
//! Both are built once per process and only read afterwards.

mod index;
pub mod loader;

pub use index::AnagramIndex;
pub use loader::{DictionaryError, load_from_file};

use std::path::Path;

/// Load a dictionary file and index it in one step
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read.
pub fn load_index<P: AsRef<Path>>(path: P) -> Result<AnagramIndex, DictionaryError> {
    load_from_file(path).map(AnagramIndex::build)
}
