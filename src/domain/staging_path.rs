use std::fmt;

use uuid::Uuid;

const STAGING_PREFIX: &str = "uploads";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadId(Uuid);

impl UploadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

/// Object path of an uploaded audio file while a request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingPath(String);

impl StagingPath {
    /// `extension` includes its leading dot, e.g. `.webm`.
    pub fn new(upload_id: &UploadId, extension: &str) -> Self {
        Self(format!(
            "{}/{}{}",
            STAGING_PREFIX,
            upload_id.as_uuid(),
            extension
        ))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for StagingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
