use crate::core::Storage;
use crate::utils::error::{Result, ScaffoldError};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    /// Truncating write of the full content. The parent directory is not
    /// created here; a missing parent is reported as a write failure so
    /// that the caller can continue with the remaining artifacts.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        fs::write(&full_path, data).map_err(|source| ScaffoldError::WriteError {
            path: full_path.display().to_string(),
            source,
        })
    }
}
