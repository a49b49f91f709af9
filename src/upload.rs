use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::TrialError;

/// A request-scoped audio file under the uploads directory. The request owns
/// the file from `store` until `cleanup` runs.
pub struct TempAudioFile {
    path: PathBuf,
    original_name: String,
}

impl TempAudioFile {
    /// Write uploaded bytes to a uniquely named file. The name is a UUIDv4
    /// token plus the upload's original extension, so two uploads arriving in
    /// the same instant still resolve to distinct paths.
    pub async fn store(
        uploads_dir: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<Self, TrialError> {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();

        let path = Path::new(uploads_dir).join(format!("{}{}", Uuid::new_v4(), extension));

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| TrialError::UploadStoreFailed(e.to_string()))?;

        debug!(path = %path.display(), bytes = bytes.len(), "Stored uploaded audio");

        Ok(Self {
            path,
            original_name: original_name.to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// Delete the stored file. Absence is not an error; a failed delete is
    /// logged rather than surfaced so it can never mask the pipeline's
    /// real outcome.
    pub async fn cleanup(&self) {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => debug!(path = %self.path.display(), "Removed uploaded audio"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Uploaded audio already removed");
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to remove uploaded audio");
            }
        }
    }
}
