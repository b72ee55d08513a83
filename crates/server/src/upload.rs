use axum::extract::multipart::Field;
use shared::errors::HttpError;
use std::path::Path;
use tokio::{fs, io::AsyncWriteExt};
use tracing::info;
use uuid::Uuid;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// Streams one multipart image field to `<upload_dir>/<subdir>/<uuid>.<ext>`
/// and returns the web path it will be served under. The size cap is
/// enforced while streaming, so an oversized upload never lands on disk.
pub async fn save_image(
    mut field: Field<'_>,
    upload_dir: &str,
    subdir: &str,
) -> Result<String, HttpError> {
    let content_type = field.content_type().unwrap_or_default().to_string();

    let Some(ext) = extension_for(&content_type) else {
        return Err(HttpError::BadRequest(
            "Only JPEG, PNG and WebP images are accepted".to_string(),
        ));
    };

    let file_name = format!("{}.{ext}", Uuid::new_v4());
    let dir = Path::new(upload_dir).join(subdir);

    fs::create_dir_all(&dir)
        .await
        .map_err(|e| HttpError::Internal(format!("Failed to create upload directory: {e}")))?;

    let file_path = dir.join(&file_name);
    let mut file = fs::File::create(&file_path)
        .await
        .map_err(|e| HttpError::Internal(format!("Failed to create upload file: {e}")))?;

    let mut written = 0usize;

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| HttpError::BadRequest(format!("Invalid multipart payload: {e}")))?
    {
        written += chunk.len();
        if written > MAX_IMAGE_BYTES {
            drop(file);
            let _ = fs::remove_file(&file_path).await;
            return Err(HttpError::BadRequest(
                "Image exceeds the 5 MiB limit".to_string(),
            ));
        }

        file.write_all(&chunk)
            .await
            .map_err(|e| HttpError::Internal(format!("Failed to write upload file: {e}")))?;
    }

    file.flush()
        .await
        .map_err(|e| HttpError::Internal(format!("Failed to flush upload file: {e}")))?;

    info!("🖼️ Stored upload {subdir}/{file_name} ({written} bytes)");

    Ok(format!("/uploads/{subdir}/{file_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_browser_image_types_are_accepted() {
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("image/webp"), Some("webp"));
        assert_eq!(extension_for("image/gif"), None);
        assert_eq!(extension_for("application/pdf"), None);
    }
}
