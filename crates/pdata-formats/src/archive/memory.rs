//! In-memory archive

use std::collections::BTreeMap;

use super::{ArchiveResult, PdataArchive};

/// Archive whose members are held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryArchive {
    members: BTreeMap<String, Vec<u8>>,
}

impl MemoryArchive {
    /// Create an empty archive
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member, replacing any member with the same name
    pub fn with_member(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(name, contents);
        self
    }

    /// Add a member in place, returning the previous contents if any
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        contents: impl Into<Vec<u8>>,
    ) -> Option<Vec<u8>> {
        self.members.insert(name.into(), contents.into())
    }

    /// Remove a member, returning its contents
    pub fn remove(&mut self, name: &str) -> Option<Vec<u8>> {
        self.members.remove(name)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the archive has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Borrow a member without copying it
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.members.get(name).map(Vec::as_slice)
    }
}

impl PdataArchive for MemoryArchive {
    fn read_bytes(&self, name: &str) -> ArchiveResult<Option<Vec<u8>>> {
        Ok(self.members.get(name).cloned())
    }

    fn member_names(&self) -> ArchiveResult<Vec<String>> {
        Ok(self.members.keys().cloned().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_members_are_sorted() {
        let archive = MemoryArchive::new()
            .with_member("procs", "##$SI= 4\n")
            .with_member("1r", vec![0u8; 16])
            .with_member("1i", vec![0u8; 16]);

        assert_eq!(archive.len(), 3);
        assert_eq!(
            archive.member_names().unwrap(),
            vec!["1i".to_string(), "1r".to_string(), "procs".to_string()]
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut archive = MemoryArchive::new();
        assert!(archive.is_empty());
        assert_eq!(archive.insert("1r", vec![1]), None);
        assert_eq!(archive.insert("1r", vec![2]), Some(vec![1]));
        assert_eq!(archive.get("1r"), Some(&[2u8][..]));
        assert_eq!(archive.remove("1r"), Some(vec![2]));
        assert_eq!(archive.read_bytes("1r").unwrap(), None);
    }
}
