//! # Image Storage
//!
//! Uploads listing images to the storage bucket and builds their view URLs.

use lib_core::{AppError, BackendConfig, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use shared::dto::document::StoredFile;

use super::client::{send_json, unique_id, AppwriteClient};

/// Public view URL of a stored file.
pub fn file_view_url(config: &BackendConfig, file_id: &str) -> String {
    format!(
        "{}/storage/buckets/{}/files/{}/view?project={}&mode=admin",
        config.endpoint, config.bucket_id, file_id, config.project_id
    )
}

/// Upload image bytes and return the URL the image can be viewed at.
#[tracing::instrument(skip(client, bytes), fields(size = bytes.len()))]
pub async fn upload_image(
    client: &AppwriteClient,
    bytes: Vec<u8>,
    file_name: &str,
    mime_type: &str,
) -> Result<String> {
    if bytes.is_empty() {
        return Err(AppError::Validation("Image file is empty".to_string()));
    }

    let part = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime_type)
        .map_err(|e| AppError::RemoteUpload(format!("Invalid image type '{}': {}", mime_type, e)))?;
    let form = Form::new().text("fileId", unique_id()).part("file", part);

    let path = format!("/storage/buckets/{}/files", client.config().bucket_id);
    let file: StoredFile = send_json(
        client.request(Method::POST, &path).multipart(form),
        AppError::RemoteUpload,
        "upload_image",
    )
    .await?;

    Ok(file_view_url(client.config(), &file.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_view_url() {
        let mut config = BackendConfig::new("https://cloud.appwrite.io/v1", "proj-1", "db-1");
        config.bucket_id = "images".to_string();

        assert_eq!(
            file_view_url(&config, "file-9"),
            "https://cloud.appwrite.io/v1/storage/buckets/images/files/file-9/view?project=proj-1&mode=admin"
        );
    }
}
