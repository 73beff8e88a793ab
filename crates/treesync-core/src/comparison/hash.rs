//! File hashing for content comparison using SHA-256

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Result, io_err};

/// File hash result
pub type FileHash = [u8; 32];

/// File hasher
pub struct FileHasher;

impl Default for FileHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHasher {
    /// Create a new file hasher
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compute SHA-256 hash of a file by streaming its contents
    ///
    /// Memory use is bounded by the chunk buffer regardless of file size,
    /// and the file handle is closed on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn hash(path: &Path) -> Result<FileHash> {
        let file = File::open(path).map_err(|e| io_err(path, e))?;

        let mut reader = BufReader::new(file);
        let mut hasher = Sha256::new();
        let mut buffer = [0; 8192]; // 8KB buffer for streaming

        loop {
            let bytes_read = reader.read(&mut buffer).map_err(|e| io_err(path, e))?;

            if bytes_read == 0 {
                break;
            }

            hasher.update(&buffer[..bytes_read]);
        }

        Ok(hasher.finalize().into())
    }
}
