//! ZIP container archive

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use parking_lot::Mutex;
use tracing::debug;
use zip::result::ZipError;

use super::{ArchiveResult, PdataArchive};

/// Upper bound on the buffer reserved from an entry's declared size
const MAX_PREALLOCATION: u64 = 1 << 20;

/// Archive backed by a ZIP container
///
/// Members are looked up by their full entry name, e.g.
/// `"10/pdata/1/procs"`. Reading an entry needs exclusive access to the
/// underlying reader, so the container sits behind a mutex and the archive
/// can be shared by reference.
pub struct ZipArchive<R = File> {
    inner: Mutex<zip::ZipArchive<R>>,
}

impl ZipArchive<File> {
    /// Open a ZIP file from disk
    pub fn open(path: impl AsRef<Path>) -> ArchiveResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }
}

impl<R: Read + Seek> ZipArchive<R> {
    /// Read the central directory from any seekable reader
    pub fn from_reader(reader: R) -> ArchiveResult<Self> {
        let archive = zip::ZipArchive::new(reader)?;
        debug!("Opened ZIP container with {} entries", archive.len());
        Ok(Self {
            inner: Mutex::new(archive),
        })
    }

    /// Number of entries in the container, directories included
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the container has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: Read + Seek> PdataArchive for ZipArchive<R> {
    fn read_bytes(&self, name: &str) -> ArchiveResult<Option<Vec<u8>>> {
        let mut archive = self.inner.lock();
        match archive.by_name(name) {
            Ok(mut entry) => {
                if entry.is_dir() {
                    return Ok(None);
                }
                // The declared size comes from the container and may be corrupt
                let capacity = usize::try_from(entry.size().min(MAX_PREALLOCATION)).unwrap_or(0);
                let mut data = Vec::with_capacity(capacity);
                entry.read_to_end(&mut data)?;
                Ok(Some(data))
            }
            Err(ZipError::FileNotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn member_names(&self) -> ArchiveResult<Vec<String>> {
        let archive = self.inner.lock();
        let mut names: Vec<String> = archive
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .map(str::to_string)
            .collect();
        names.sort();
        Ok(names)
    }
}

impl<R> std::fmt::Debug for ZipArchive<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipArchive").finish_non_exhaustive()
    }
}
