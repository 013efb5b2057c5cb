use axum::extract::Multipart;
use axum::{Extension, Json, http::StatusCode};
use base64::{Engine as _, engine::general_purpose};
use chrono::Utc;
use regex::Regex;
use serde_json::{Value, json};
use sha1::{Digest, Sha1};
use std::sync::Arc;
use std::sync::LazyLock;
use tokio::fs;

use crate::config::settings::AppConfig;
use crate::utils::response::ApiResponse;

static DATA_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^data:(image/\w+);base64,(.+)$").unwrap());

fn detect_file_type(bytes: &[u8]) -> String {
    if bytes.len() < 4 {
        return "bin".to_string();
    }

    match &bytes[0..4] {
        [0xFF, 0xD8, 0xFF, 0xE0] | [0xFF, 0xD8, 0xFF, 0xE1] | [0xFF, 0xD8, 0xFF, 0xE8] => "jpg",
        [0x89, 0x50, 0x4E, 0x47] => "png",
        [0x47, 0x49, 0x46, 0x38] => "gif",
        [0x42, 0x4D, ..] => "bmp",
        [0x25, 0x50, 0x44, 0x46] => "pdf",
        [0x50, 0x4B, 0x03, 0x04] | [0x50, 0x4B, 0x05, 0x06] | [0x50, 0x4B, 0x07, 0x08] => "zip",
        [0xD0, 0xCF, 0x11, 0xE0] => "doc",
        _ => {
            if bytes
                .iter()
                .take(100)
                .all(|&b| b.is_ascii_graphic() || b.is_ascii_whitespace())
            {
                "txt"
            } else {
                "bin"
            }
        }
    }
    .to_string()
}

/// Writes uploaded bytes under the upload directory with a
/// content-hash-unique name and returns the public path.
pub async fn save_bytes(upload_dir: &str, bytes: &[u8]) -> Result<String, std::io::Error> {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    let digest = format!("{:x}", hasher.finalize());

    let extension = detect_file_type(bytes);
    let file_name = format!(
        "{}-{}.{}",
        &digest[..12],
        Utc::now().timestamp(),
        extension
    );

    fs::create_dir_all(upload_dir).await?;
    fs::write(format!("{}/{}", upload_dir, file_name), bytes).await?;

    Ok(format!("/uploads/{}", file_name))
}

/// Decodes a `data:image/...;base64,` URL. Used when a page submits an
/// inline image instead of going through the media endpoint first.
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>, String> {
    let caps = DATA_URL_RE
        .captures(data_url)
        .ok_or_else(|| "Invalid data URL".to_string())?;

    let base64_data = caps.get(2).map(|m| m.as_str()).unwrap_or("");

    general_purpose::STANDARD
        .decode(base64_data)
        .map_err(|e| format!("Invalid base64 payload: {}", e))
}

pub fn is_data_url(value: &str) -> bool {
    DATA_URL_RE.is_match(value)
}

/// POST /api/upload-media - stores every `media` part and returns the
/// public URLs.
pub async fn upload_media(
    Extension(config): Extension<Arc<AppConfig>>,
    mut multipart: Multipart,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let mut media_urls: Vec<String> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error(&format!("Malformed upload: {}", e))),
                );
            }
        };

        if field.name() != Some("media") {
            continue;
        }

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error(&format!("Failed to read upload: {}", e))),
                );
            }
        };

        match save_bytes(&config.upload_dir, &bytes).await {
            Ok(url) => media_urls.push(url),
            Err(e) => {
                eprintln!("Upload write failed: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::error("Failed to store uploaded file")),
                );
            }
        }
    }

    if media_urls.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("No media file in request")),
        );
    }

    let first = media_urls[0].clone();
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            "Upload successful",
            json!({ "mediaUrls": media_urls, "fileUrl": first }),
        )),
    )
}

/// Resolves an incoming image reference: data URLs are decoded and persisted,
/// anything else (an already-uploaded path) passes through untouched.
pub async fn resolve_image_reference(
    upload_dir: &str,
    reference: Option<String>,
) -> Result<Option<String>, String> {
    match reference {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) if is_data_url(&value) => {
            let bytes = decode_data_url(&value)?;
            let path = save_bytes(upload_dir, &bytes)
                .await
                .map_err(|e| format!("Failed to store image: {}", e))?;
            Ok(Some(path))
        }
        Some(value) => Ok(Some(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_bytes_decide_the_extension() {
        assert_eq!(detect_file_type(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), "jpg");
        assert_eq!(detect_file_type(&[0x89, 0x50, 0x4E, 0x47, 0x0D]), "png");
        assert_eq!(detect_file_type(b"%PDF-1.7 rest"), "pdf");
        assert_eq!(detect_file_type(b"plain text content"), "txt");
        assert_eq!(detect_file_type(&[0x00, 0x01]), "bin");
    }

    #[test]
    fn data_urls_decode_or_fail_loudly() {
        // "hi" in base64
        let decoded = decode_data_url("data:image/png;base64,aGk=").unwrap();
        assert_eq!(decoded, b"hi");

        assert!(decode_data_url("https://example.com/image.png").is_err());
        assert!(decode_data_url("data:image/png;base64,!!!").is_err());
    }

    #[tokio::test]
    async fn pass_through_references_are_untouched() {
        let resolved = resolve_image_reference("uploads", Some("/uploads/existing.png".into()))
            .await
            .unwrap();
        assert_eq!(resolved.as_deref(), Some("/uploads/existing.png"));

        assert!(
            resolve_image_reference("uploads", None).await.unwrap().is_none()
        );
        assert!(
            resolve_image_reference("uploads", Some(String::new()))
                .await
                .unwrap()
                .is_none()
        );
    }
}
