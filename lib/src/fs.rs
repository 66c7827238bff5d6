use std::{
    fs::{self, DirEntry},
    io,
    path::Path,
};

use crate::SweeperError;

/// How the walker treats a single directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A real directory. Its contents get walked.
    Directory,

    /// A symbolic link pointing to a directory.
    /// Neither followed nor touched.
    DirectoryLink,

    /// Anything else: regular files, links to files, dangling links, sockets...
    File,
}

/// Classify a directory entry without following links to directories.
pub fn classify(entry: &DirEntry) -> io::Result<EntryKind> {
    let file_type = entry.file_type()?;
    if file_type.is_dir() {
        return Ok(EntryKind::Directory);
    }

    if file_type.is_symlink() {
        /* A dangling link is still just a name in the listing */
        let points_to_dir = fs::metadata(entry.path()).map_or(false, |meta| meta.is_dir());
        if points_to_dir {
            return Ok(EntryKind::DirectoryLink);
        }
    }

    Ok(EntryKind::File)
}

pub(crate) struct DirWalker {
    pending_entries: Vec<DirEntry>,
}

impl DirWalker {
    pub fn new() -> Self {
        Self {
            pending_entries: Vec::with_capacity(1024),
        }
    }

    pub fn next_item(&mut self) -> Option<DirEntry> {
        self.pending_entries.pop()
    }

    /// Queue every entry of `path`.
    /// The listing is drained completely, so the directory handle is closed on return.
    pub fn insert_entries(&mut self, path: &Path) -> Result<(), SweeperError> {
        let traversal_error = |source| SweeperError::Traversal {
            path: path.to_owned(),
            source,
        };

        for entry in fs::read_dir(path).map_err(traversal_error)? {
            self.pending_entries.push(entry.map_err(traversal_error)?);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn single_entry(dir: &Path) -> DirEntry {
        fs::read_dir(dir)
            .expect("listing temp dir")
            .next()
            .expect("one entry")
            .expect("readable entry")
    }

    #[test]
    fn classifies_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Main.class"), b"").unwrap();
        assert_eq!(classify(&single_entry(dir.path())).unwrap(), EntryKind::File);

        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        assert_eq!(
            classify(&single_entry(dir.path())).unwrap(),
            EntryKind::Directory
        );
    }

    #[cfg(unix)]
    #[test]
    fn classifies_symlinks_by_target() {
        use std::os::unix::fs::symlink;

        let target = tempfile::tempdir().unwrap();

        let dir = tempfile::tempdir().unwrap();
        symlink(target.path(), dir.path().join("linked.class")).unwrap();
        assert_eq!(
            classify(&single_entry(dir.path())).unwrap(),
            EntryKind::DirectoryLink
        );

        let dir = tempfile::tempdir().unwrap();
        symlink(dir.path().join("missing"), dir.path().join("dangling.class")).unwrap();
        assert_eq!(classify(&single_entry(dir.path())).unwrap(), EntryKind::File);
    }

    #[test]
    fn walker_pops_every_queued_entry_once() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.txt", "b.class", "c"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let mut walker = DirWalker::new();
        walker.insert_entries(dir.path()).unwrap();

        let mut names = Vec::new();
        while let Some(entry) = walker.next_item() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        assert_eq!(names, ["a.txt", "b.class", "c"]);
    }

    #[test]
    fn walker_reports_unreadable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");

        let mut walker = DirWalker::new();
        match walker.insert_entries(&missing) {
            Err(SweeperError::Traversal { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected traversal error, got {:?}", other),
        }
    }
}
