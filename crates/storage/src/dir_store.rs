// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::UploadError;
use crate::file_store::FileStore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file store backed by a local backup directory.
///
/// Uploads land as plain files under the root directory; the returned
/// reference is the stored file name.
#[derive(Debug, Clone)]
pub struct DirFileStore {
    /// The backup directory.
    root: PathBuf,
}

impl DirFileStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created on the first upload if it does not exist.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the backup directory path.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileStore for DirFileStore {
    fn upload(
        &mut self,
        bytes: &[u8],
        file_name: &str,
        mime_type: &str,
    ) -> Result<String, UploadError> {
        std::fs::create_dir_all(&self.root).map_err(|err| UploadError::StoreUnreachable {
            reason: format!(
                "Backup directory '{}' could not be created: {err}",
                self.root.display()
            ),
        })?;

        let target: PathBuf = self.root.join(file_name);
        if let Err(err) = std::fs::write(&target, bytes) {
            return Err(translate_io_error(&err, file_name));
        }

        debug!(
            "Stored evidence file '{}' ({} bytes, {})",
            file_name,
            bytes.len(),
            mime_type
        );
        Ok(file_name.to_string())
    }
}

/// Maps filesystem failures onto the upload taxonomy, keeping quota
/// exhaustion distinct from generic failures.
fn translate_io_error(err: &std::io::Error, file_name: &str) -> UploadError {
    match err.kind() {
        std::io::ErrorKind::StorageFull | std::io::ErrorKind::QuotaExceeded => {
            UploadError::QuotaExceeded {
                detail: String::from(
                    "The storage owner has no space left for uploads. \
                     Free space in the backup location or point the store at \
                     a location with available quota, then retry.",
                ),
            }
        }
        _ => UploadError::UploadFailed {
            file_name: file_name.to_string(),
            reason: err.to_string(),
        },
    }
}
