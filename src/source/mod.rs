//! Record sources for the demo host.
//!
//! Records are either generated in-process (the default) or read from a
//! fixture file passed with `--file`.

use crate::model::error::InputError;
use crate::model::fixture::generate_page;
use crate::model::PlacardRecord;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

pub mod file;

pub use file::read_fixture_file;

/// Where the viewport's records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Seeded synthetic pages.
    Generated {
        /// Number of pages to generate.
        pages: u32,
        /// RNG seed; the same seed yields the same records.
        seed: u64,
    },
    /// A fixture JSON file.
    File(PathBuf),
}

impl InputSource {
    /// Choose a source: a file when given, otherwise generated pages.
    pub fn detect(file: Option<PathBuf>, pages: u32, seed: u64) -> Self {
        match file {
            Some(path) => InputSource::File(path),
            None => InputSource::Generated { pages, seed },
        }
    }

    /// Load every record.
    ///
    /// Generated records are dated relative to `now`.
    ///
    /// # Errors
    ///
    /// Only file sources can fail; see [`read_fixture_file`].
    pub fn load(&self, now: DateTime<Utc>) -> Result<Vec<PlacardRecord>, InputError> {
        match self {
            InputSource::Generated { pages, seed } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                Ok((0..*pages)
                    .flat_map(|page| generate_page(page, now, &mut rng).data.list)
                    .collect())
            }
            InputSource::File(path) => read_fixture_file(path),
        }
    }

    /// The source used by a reload: generated sources move to the next seed,
    /// file sources re-read the same file.
    pub fn reloaded(&self) -> Self {
        match self {
            InputSource::Generated { pages, seed } => InputSource::Generated {
                pages: *pages,
                seed: seed.wrapping_add(1),
            },
            InputSource::File(path) => InputSource::File(path.clone()),
        }
    }
}
