use std::fs::DirEntry;

use super::{
    Sweeper,
    SweeperError,
};
use crate::{
    fs::EntryKind,
    path::FileNameEx,
    target::{
        FileTarget,
        SweepableTarget,
    },
};

/// Compiled JVM bytecode
pub const CLASS_FILE_SUFFIX: &str = ".class";

pub struct ClassSweeper;

impl ClassSweeper {
    pub fn new() -> Self {
        Self
    }
}

impl Sweeper for ClassSweeper {
    fn name(&self) -> &str {
        "class"
    }

    fn identify_targets(
        &self,
        entry: &DirEntry,
        kind: EntryKind,
    ) -> Result<Vec<Box<dyn SweepableTarget>>, SweeperError> {
        if kind != EntryKind::File || !entry.ends_with_suffix(CLASS_FILE_SUFFIX) {
            return Ok(vec![]);
        }

        Ok(vec![Box::new(FileTarget::new(entry.path()))])
    }
}
