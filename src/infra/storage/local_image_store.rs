use crate::domain::ports::ImageStore;
use crate::error::AppError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Writes uploaded images to a local directory served under `/uploads/`
/// and returns the public URL.
pub struct LocalImageStore {
    dir: PathBuf,
    public_base_url: String,
}

impl LocalImageStore {
    pub fn new(dir: impl Into<PathBuf>, public_base_url: String) -> Self {
        Self {
            dir: dir.into(),
            public_base_url,
        }
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, AppError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::InternalWithMsg(format!("failed to create upload dir: {e}"))
        })?;

        let path = self.dir.join(filename);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            AppError::InternalWithMsg(format!("failed to write upload {filename}: {e}"))
        })?;

        Ok(format!(
            "{}/uploads/{}",
            self.public_base_url.trim_end_matches('/'),
            filename
        ))
    }
}
