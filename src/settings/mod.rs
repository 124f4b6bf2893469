//! Generation defaults, optionally read from a settings file.

mod file;

use std::path::{Path, PathBuf};

use crate::entropy::EntropySource;
use crate::error::Result;
use crate::pass::{ClassSet, LengthPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: i64,
    pub number_of_passwords: usize,
    pub classes: ClassSet,
    pub length_policy: LengthPolicy,
    /// 0 means retry forever.
    pub max_selection_attempts: usize,
    pub entropy: EntropySource,
}

impl Settings {
    /// Load from the default location. A missing file yields defaults.
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&file::get_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn path() -> PathBuf {
        file::get_path()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            number_of_passwords: 1,
            classes: ClassSet::all(),
            length_policy: LengthPolicy::Reject,
            max_selection_attempts: 0,
            entropy: EntropySource::Thread,
        }
    }
}
