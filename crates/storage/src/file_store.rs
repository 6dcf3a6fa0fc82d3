// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::UploadError;

/// The evidence file store collaborator.
///
/// Callers sequence uploads before log appends: a record referencing an
/// evidence file is only written after the upload has succeeded, so the
/// log never points at a file that does not exist.
pub trait FileStore {
    /// Uploads an evidence file and returns a durable reference to it.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The file content
    /// * `file_name` - The name to store the file under
    /// * `mime_type` - The declared content type
    ///
    /// # Errors
    ///
    /// Returns an `UploadError` on failure. Quota exhaustion is reported
    /// through the dedicated variant so callers can surface its actionable
    /// message instead of a generic failure.
    fn upload(
        &mut self,
        bytes: &[u8],
        file_name: &str,
        mime_type: &str,
    ) -> Result<String, UploadError>;
}

impl<T: FileStore + ?Sized> FileStore for Box<T> {
    fn upload(
        &mut self,
        bytes: &[u8],
        file_name: &str,
        mime_type: &str,
    ) -> Result<String, UploadError> {
        (**self).upload(bytes, file_name, mime_type)
    }
}
