use std::{ffi::OsStr, fs::DirEntry};

/// Utility functions for file names which might not be valid UTF-8
pub trait FileNameEx {
    /// Tests if the name ends with `suffix`. The comparison is exact and case sensitive.
    fn ends_with_suffix(&self, suffix: &str) -> bool;
}

impl FileNameEx for OsStr {
    fn ends_with_suffix(&self, suffix: &str) -> bool {
        self.as_encoded_bytes().ends_with(suffix.as_bytes())
    }
}

impl FileNameEx for DirEntry {
    fn ends_with_suffix(&self, suffix: &str) -> bool {
        self.file_name().ends_with_suffix(suffix)
    }
}
