//! Fixture file loading.
//!
//! A fixture file holds either one response envelope or a JSON array of
//! envelopes. Records are returned flattened in file order.

use crate::model::error::InputError;
use crate::model::{PlacardPage, PlacardRecord};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureFile {
    Pages(Vec<PlacardPage>),
    Page(Box<PlacardPage>),
}

/// Read every record from a fixture file.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist,
/// `InputError::Json` if it is not a valid envelope (or list of envelopes),
/// and `InputError::Io` for other read failures.
pub fn read_fixture_file(path: &Path) -> Result<Vec<PlacardRecord>, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let parsed: FixtureFile =
        serde_json::from_str(&contents).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let pages = match parsed {
        FixtureFile::Pages(pages) => pages,
        FixtureFile::Page(page) => vec![*page],
    };
    debug!(path = %path.display(), pages = pages.len(), "fixture file loaded");

    Ok(pages.into_iter().flat_map(|page| page.data.list).collect())
}
