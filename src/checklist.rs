use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Checklist kinds accepted on upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistFormat {
    Text,
    Json,
}

impl ChecklistFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("txt") => Ok(Self::Text),
            _ => Err(Error::upload(format!(
                "Unsupported file type for '{}'. Upload a .txt or .json checklist.",
                file_name
            ))),
        }
    }
}

/// Checklist text ready to be sent to the model. Lives for a single validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistInput {
    pub file_name: String,
    pub format: ChecklistFormat,
    pub text: String,
}

impl ChecklistInput {
    /// Decodes an uploaded file.
    ///
    /// `.json` files are parsed and re-serialized with two-space indentation.
    /// `.txt` files are read as UTF-8 with invalid byte sequences dropped.
    pub fn from_upload(file_name: &str, bytes: &[u8]) -> Result<Self> {
        let format = ChecklistFormat::from_file_name(file_name)?;

        let text = match format {
            ChecklistFormat::Json => {
                let value: serde_json::Value = serde_json::from_slice(bytes)
                    .map_err(|e| Error::upload(format!("Error reading JSON file: {}", e)))?;
                serde_json::to_string_pretty(&value)?
            }
            ChecklistFormat::Text => decode_text(bytes),
        };

        debug!(
            "Decoded {:?} checklist '{}' ({} bytes -> {} chars)",
            format,
            file_name,
            bytes.len(),
            text.chars().count()
        );

        Ok(Self {
            file_name: file_name.to_string(),
            format,
            text,
        })
    }
}

fn decode_text(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
