// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Evidence file policy validation.
//!
//! This module enforces which attachments are accepted as inspection
//! evidence before any upload happens.

use thiserror::Error;

/// Evidence policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvidencePolicyError {
    /// The file has no extension to judge.
    #[error("File '{file_name}' has no extension; allowed types: {allowed}")]
    MissingExtension { file_name: String, allowed: String },

    /// The file extension is not on the allow list.
    #[error("File type '{extension}' is not allowed; allowed types: {allowed}")]
    DisallowedExtension { extension: String, allowed: String },

    /// The file content is empty.
    #[error("Evidence file '{file_name}' is empty")]
    EmptyFile { file_name: String },
}

/// Evidence policy configuration.
pub struct EvidencePolicy {
    /// Allowed file extensions, lowercase, without dots.
    pub allowed_extensions: Vec<String>,
}

impl Default for EvidencePolicy {
    fn default() -> Self {
        Self {
            allowed_extensions: ["xlsx", "pdf", "png", "jpg", "csv"]
                .iter()
                .map(|s| String::from(*s))
                .collect(),
        }
    }
}

impl EvidencePolicy {
    /// Validates an attachment against the policy.
    ///
    /// # Arguments
    ///
    /// * `file_name` - The original file name of the attachment
    /// * `bytes` - The attachment content
    ///
    /// # Errors
    ///
    /// Returns an `EvidencePolicyError` if the attachment does not meet
    /// policy requirements.
    pub fn validate(&self, file_name: &str, bytes: &[u8]) -> Result<(), EvidencePolicyError> {
        if bytes.is_empty() {
            return Err(EvidencePolicyError::EmptyFile {
                file_name: file_name.to_string(),
            });
        }

        let extension: &str = match file_name.rsplit_once('.') {
            Some((stem, extension)) if !stem.is_empty() && !extension.is_empty() => extension,
            _ => {
                return Err(EvidencePolicyError::MissingExtension {
                    file_name: file_name.to_string(),
                    allowed: self.allowed_list(),
                });
            }
        };

        let normalized: String = extension.to_lowercase();
        if !self.allowed_extensions.contains(&normalized) {
            return Err(EvidencePolicyError::DisallowedExtension {
                extension: normalized,
                allowed: self.allowed_list(),
            });
        }

        Ok(())
    }

    fn allowed_list(&self) -> String {
        self.allowed_extensions.join(", ")
    }
}
