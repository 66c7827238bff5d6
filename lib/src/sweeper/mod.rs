use std::{fs::DirEntry, io, path::PathBuf};

use thiserror::Error;

use crate::{fs::EntryKind, target::SweepableTarget};

/// A Sweeper implements a cleanup mechanism for a specific kind of build artefact.
pub trait Sweeper {
    /// Name of the sweeper
    fn name(&self) -> &str;

    /// Find all targets the sweeper wants to remove for a single directory entry.
    /// `kind` is how the walker classified the entry.
    fn identify_targets(
        &self,
        entry: &DirEntry,
        kind: EntryKind,
    ) -> Result<Vec<Box<dyn SweepableTarget>>, SweeperError>;
}

#[derive(Error, Debug)]
pub enum SweeperError {
    #[error("failed to read directory {}: {source}", path.display())]
    Traversal { path: PathBuf, source: io::Error },

    #[error("failed to remove {}: {source}", path.display())]
    Deletion { path: PathBuf, source: io::Error },
}

mod class;
pub use class::*;
