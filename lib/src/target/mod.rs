use std::{
    fmt::Debug,
    path::Path,
};

use crate::SweeperError;

pub trait SweepableTarget: Debug {
    fn name(&self) -> &str;
    fn path(&self) -> &Path;

    /// Remove the target from the filesystem.
    fn cleanup(self: Box<Self>) -> Result<(), SweeperError>;
}

mod file;
pub use file::*;
