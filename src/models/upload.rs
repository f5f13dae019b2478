//! File upload payloads

use reqwest::multipart::Part;

use crate::utils::errors::{ApiError, Result};

/// An in-memory file destined for a multipart field.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, inferring nothing: the caller supplies the MIME type.
    pub fn from_path(path: impl AsRef<std::path::Path>, mime_type: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let bytes = std::fs::read(path)?;
        Ok(Self::new(file_name, mime_type, bytes))
    }

    /// Convert into a multipart part.
    pub fn into_part(self) -> Result<Part> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .map_err(ApiError::Network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_part_accepts_valid_mime() {
        let upload = UploadFile::new("photo.png", "image/png", vec![1, 2, 3]);
        assert!(upload.into_part().is_ok());
    }

    #[test]
    fn test_into_part_rejects_invalid_mime() {
        let upload = UploadFile::new("photo.png", "not a mime", vec![1, 2, 3]);
        assert!(upload.into_part().is_err());
    }
}
