use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use super::SweepableTarget;
use crate::SweeperError;

/// A single file which will be unlinked.
/// Directories are never removed through this target.
#[derive(Debug)]
pub struct FileTarget {
    target_file: PathBuf,
}

impl FileTarget {
    pub fn new(target: PathBuf) -> Self {
        Self {
            target_file: target,
        }
    }
}

impl SweepableTarget for FileTarget {
    fn name(&self) -> &str {
        "file"
    }

    fn path(&self) -> &Path {
        &self.target_file
    }

    fn cleanup(self: Box<Self>) -> Result<(), SweeperError> {
        let target_file = self.target_file;
        fs::remove_file(&target_file).map_err(|source| SweeperError::Deletion {
            path: target_file,
            source,
        })
    }
}
