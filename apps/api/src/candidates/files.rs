use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;
use uuid::Uuid;

/// Résumé files on local disk, one per candidate, named `{id}_{file name}`.
#[derive(Debug, Clone)]
pub struct ResumeFiles {
    root: PathBuf,
}

impl ResumeFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        info!("Upload directory ready at {}", self.root.display());
        Ok(())
    }

    pub fn path_for(&self, id: Uuid, file_name: &str) -> PathBuf {
        self.root.join(format!("{id}_{file_name}"))
    }

    /// Writes `data` for candidate `id` and returns the path written.
    /// The write is not atomic.
    pub async fn save(&self, id: Uuid, file_name: &str, data: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.path_for(id, file_name);
        tokio::fs::write(&path, data).await?;
        Ok(path)
    }

    /// Removes a stored file. Returns false if it was already gone.
    pub async fn remove(&self, path: &Path) -> std::io::Result<bool> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_root_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let files = ResumeFiles::new(tmp.path().join("a").join("resumes"));
        files.ensure_root().await.unwrap();
        assert!(files.root().is_dir());
        // idempotent
        files.ensure_root().await.unwrap();
    }

    #[tokio::test]
    async fn test_save_uses_id_prefixed_name() {
        let tmp = tempfile::tempdir().unwrap();
        let files = ResumeFiles::new(tmp.path());
        let id = Uuid::new_v4();

        let path = files.save(id, "cv.pdf", b"%PDF-1.4").await.unwrap();

        assert_eq!(path, tmp.path().join(format!("{id}_cv.pdf")));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_remove_tolerates_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let files = ResumeFiles::new(tmp.path());
        let path = files.save(Uuid::new_v4(), "cv.doc", b"doc").await.unwrap();

        assert!(files.remove(&path).await.unwrap());
        assert!(!path.exists());
        assert!(!files.remove(&path).await.unwrap());
    }
}
