//! Asynchronous archive access

use async_trait::async_trait;

use super::{ArchiveResult, MemoryArchive, PdataArchive};

/// Archive whose member reads may suspend, such as one fetched over the
/// network or unpacked by a background task
#[async_trait]
pub trait AsyncPdataArchive: Send + Sync {
    /// Read a member's raw bytes, or `None` if the member does not exist
    async fn read_bytes(&self, name: &str) -> ArchiveResult<Option<Vec<u8>>>;

    /// Read a member as text, or `None` if the member does not exist
    async fn read_text(&self, name: &str) -> ArchiveResult<Option<String>> {
        Ok(self
            .read_bytes(name)
            .await?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }
}

#[async_trait]
impl AsyncPdataArchive for MemoryArchive {
    async fn read_bytes(&self, name: &str) -> ArchiveResult<Option<Vec<u8>>> {
        PdataArchive::read_bytes(self, name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_archive_async() {
        let archive = MemoryArchive::new().with_member("procs", "##$DTYPP= 2\n");
        let text = AsyncPdataArchive::read_text(&archive, "procs").await.unwrap();
        assert_eq!(text.as_deref(), Some("##$DTYPP= 2\n"));
        assert!(
            AsyncPdataArchive::read_bytes(&archive, "1r")
                .await
                .unwrap()
                .is_none()
        );
    }
}
