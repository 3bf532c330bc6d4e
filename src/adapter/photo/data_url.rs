//! Data URL Photo Encoding
//!
//! 写真ファイルとData URL（`data:<mime>;base64,<payload>`）の相互変換

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use base64::prelude::{Engine as _, BASE64_STANDARD};
use log::{debug, info};
use std::path::Path;

use crate::domain::errors::ConversionError;
use crate::domain::repositories::photo_encoder::PhotoEncoder;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Known photo types: (extension, MIME type)
const MIME_TYPES: [(&str, &str); 7] = [
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
];

/// Guess the MIME type from a file extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());

    match extension {
        Some(ext) => MIME_TYPES
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, mime)| *mime)
            .unwrap_or(FALLBACK_MIME),
        None => FALLBACK_MIME,
    }
}

/// File extension used when exporting a photo of the given MIME type
pub fn extension_for_mime(mime: &str) -> &'static str {
    MIME_TYPES
        .iter()
        .find(|(_, known)| *known == mime)
        .map(|(ext, _)| *ext)
        .unwrap_or("bin")
}

/// Encode raw bytes as a base64 data URL
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes))
}

/// Decode a base64 data URL into its MIME type and bytes
pub fn decode_data_url(text: &str) -> Result<(String, Vec<u8>)> {
    let Some(rest) = text.strip_prefix("data:") else {
        bail!("Not a data URL");
    };
    let Some((header, payload)) = rest.split_once(',') else {
        bail!("Data URL has no payload separator");
    };
    let Some(mime) = header.strip_suffix(";base64") else {
        bail!("Only base64 data URLs are supported");
    };

    let bytes = BASE64_STANDARD
        .decode(payload)
        .context("Failed to decode base64 payload")?;

    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    Ok((mime.to_string(), bytes))
}

/// ファイルをData URLに変換する写真エンコーダ
pub struct DataUrlEncoder;

impl DataUrlEncoder {
    pub fn new() -> Self {
        Self
    }

    async fn encode_file(path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read photo file: {}", path.display()))?;

        if bytes.is_empty() {
            bail!("Photo file is empty: {}", path.display());
        }

        let mime = mime_for_path(path);
        debug!("Encoding {} bytes from {} as {}", bytes.len(), path.display(), mime);

        Ok(encode_data_url(mime, &bytes))
    }
}

#[async_trait]
impl PhotoEncoder for DataUrlEncoder {
    async fn to_text(&self, path: &Path) -> Result<String, ConversionError> {
        let text = Self::encode_file(path)
            .await
            .map_err(|e| ConversionError(format!("{:#}", e)))?;

        info!("Converted photo {} ({} chars)", path.display(), text.len());
        Ok(text)
    }
}

impl Default for DataUrlEncoder {
    fn default() -> Self {
        Self::new()
    }
}
