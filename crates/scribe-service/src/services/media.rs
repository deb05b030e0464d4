//! Media validation and storage
//!
//! Uploads are accepted only when they decode as a supported raster
//! format; the check runs before any row is written, so a rejected upload
//! leaves no partial state. Validated bytes are written under the
//! configured upload directory as `{post_id}.{ext}`. No transcoding.

use std::path::PathBuf;

use scribe_core::error::DomainError;
use scribe_core::value_objects::Snowflake;

/// Validate that the bytes decode as a supported raster image.
///
/// Returns the canonical file extension for the detected format.
pub fn validate_image(bytes: &[u8]) -> Result<&'static str, DomainError> {
    if bytes.is_empty() {
        return Err(DomainError::InvalidImage("empty upload".to_string()));
    }

    let format = image::guess_format(bytes)
        .map_err(|_| DomainError::InvalidImage("unrecognized format".to_string()))?;

    // A plausible header is not enough; the whole payload must decode.
    image::load_from_memory(bytes).map_err(|e| DomainError::InvalidImage(e.to_string()))?;

    Ok(format.extensions_str().first().copied().unwrap_or("bin"))
}

/// Filesystem store for validated post images
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    /// Create a store rooted at the given upload directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write a validated image and return its stored reference
    pub async fn store_post_image(
        &self,
        post_id: Snowflake,
        bytes: &[u8],
        ext: &str,
    ) -> Result<String, DomainError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| DomainError::MediaError(e.to_string()))?;

        let filename = format!("{post_id}.{ext}");
        let path = self.root.join(&filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| DomainError::MediaError(e.to_string()))?;

        tracing::debug!(post_id = %post_id, path = %path.display(), "Stored post image");

        Ok(format!("posts/{filename}"))
    }
}
