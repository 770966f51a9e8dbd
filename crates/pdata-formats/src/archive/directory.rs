//! Pdata directory on disk

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{ArchiveResult, PdataArchive, member_components};

/// Archive backed by a directory, typically `<expno>/pdata/<procno>`
///
/// Member names are `/`-separated paths relative to the root. Names that are
/// absolute or contain `..` are rejected instead of resolved.
#[derive(Debug, Clone)]
pub struct DirectoryArchive {
    root: PathBuf,
}

impl DirectoryArchive {
    /// Open a directory as an archive
    pub fn open(root: impl Into<PathBuf>) -> ArchiveResult<Self> {
        let root = root.into();
        if !fs::metadata(&root)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("not a directory: {}", root.display()),
            )
            .into());
        }
        Ok(Self { root })
    }

    /// Root directory of the archive
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn member_path(&self, name: &str) -> ArchiveResult<PathBuf> {
        let mut path = self.root.clone();
        path.extend(member_components(name)?);
        Ok(path)
    }

    fn collect_members(&self, dir: &Path, out: &mut Vec<String>) -> ArchiveResult<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                self.collect_members(&path, out)?;
            } else if let Ok(relative) = path.strip_prefix(&self.root) {
                let name: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                out.push(name.join("/"));
            }
        }
        Ok(())
    }
}

impl PdataArchive for DirectoryArchive {
    fn read_bytes(&self, name: &str) -> ArchiveResult<Option<Vec<u8>>> {
        let path = self.member_path(name)?;
        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Member not found on disk: {}", path.display());
                Ok(None)
            }
            // A directory with the member's name is not a member
            Err(_) if path.is_dir() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn member_names(&self) -> ArchiveResult<Vec<String>> {
        let mut names = Vec::new();
        self.collect_members(&self.root, &mut names)?;
        names.sort();
        Ok(names)
    }
}
