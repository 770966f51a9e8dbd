//! Archive collaborators holding pdata members
//!
//! A pdata archive is any container that maps member names (`procs`, `1r`,
//! `1i`, ...) to file contents. The decoder only ever reads from it, and the
//! only per-member signal it needs is whether the member exists.
//!
//! Three containers are provided:
//! - [`MemoryArchive`]: members held in memory
//! - [`DirectoryArchive`]: a pdata directory on disk
//! - [`ZipArchive`]: a ZIP file, as exported by most acquisition workstations
//!
//! # Example
//!
//! ```rust
//! use pdata_formats::archive::{MemoryArchive, PdataArchive};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let archive = MemoryArchive::new()
//!     .with_member("procs", "##$BYTORDP= 0\n")
//!     .with_member("1r", vec![0u8; 8]);
//!
//! assert_eq!(archive.read_bytes("1r")?.map(|b| b.len()), Some(8));
//! assert!(archive.read_text("missing")?.is_none());
//! # Ok(())
//! # }
//! ```

mod directory;
mod error;
mod memory;
#[cfg(feature = "async")]
mod nonblocking;
mod zip_archive;

pub use directory::DirectoryArchive;
pub use error::{ArchiveError, ArchiveResult};
pub use memory::MemoryArchive;
#[cfg(feature = "async")]
pub use nonblocking::AsyncPdataArchive;
pub use zip_archive::ZipArchive;

/// Read-only access to the members of a pdata archive
pub trait PdataArchive {
    /// Read a member's raw bytes, or `None` if the member does not exist
    fn read_bytes(&self, name: &str) -> ArchiveResult<Option<Vec<u8>>>;

    /// Read a member as text, or `None` if the member does not exist
    ///
    /// Invalid UTF-8 sequences are replaced rather than reported. Parameter
    /// blocks are ASCII apart from free-text comments, and those never carry
    /// a decoding parameter.
    fn read_text(&self, name: &str) -> ArchiveResult<Option<String>> {
        Ok(self
            .read_bytes(name)?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// List every file member, sorted by name
    fn member_names(&self) -> ArchiveResult<Vec<String>>;
}

impl<A: PdataArchive + ?Sized> PdataArchive for &A {
    fn read_bytes(&self, name: &str) -> ArchiveResult<Option<Vec<u8>>> {
        (**self).read_bytes(name)
    }

    fn read_text(&self, name: &str) -> ArchiveResult<Option<String>> {
        (**self).read_text(name)
    }

    fn member_names(&self) -> ArchiveResult<Vec<String>> {
        (**self).member_names()
    }
}

impl<A: PdataArchive + ?Sized> PdataArchive for Box<A> {
    fn read_bytes(&self, name: &str) -> ArchiveResult<Option<Vec<u8>>> {
        (**self).read_bytes(name)
    }

    fn read_text(&self, name: &str) -> ArchiveResult<Option<String>> {
        (**self).read_text(name)
    }

    fn member_names(&self) -> ArchiveResult<Vec<String>> {
        (**self).member_names()
    }
}

/// Resolve `name` in the same directory as `member`
///
/// ```rust
/// use pdata_formats::archive::sibling_member;
///
/// assert_eq!(sibling_member("exp/10/pdata/1/1r", "procs"), "exp/10/pdata/1/procs");
/// assert_eq!(sibling_member("1r", "procs"), "procs");
/// ```
pub fn sibling_member(member: &str, name: &str) -> String {
    match member.rfind('/') {
        Some(pos) => format!("{}/{}", &member[..pos], name),
        None => name.to_string(),
    }
}

/// Split a `/`-separated member name into path components, rejecting names
/// that would leave the archive root
pub(crate) fn member_components(name: &str) -> ArchiveResult<Vec<&str>> {
    if name.is_empty() || name.starts_with('/') || name.contains('\\') {
        return Err(ArchiveError::InvalidMemberName(name.to_string()));
    }

    let components: Vec<&str> = name
        .split('/')
        .filter(|c| !c.is_empty() && *c != ".")
        .collect();

    if components.is_empty() || components.contains(&"..") {
        return Err(ArchiveError::InvalidMemberName(name.to_string()));
    }

    Ok(components)
}
