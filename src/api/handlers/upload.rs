use axum::{extract::{Multipart, State}, response::IntoResponse, Json};
use crate::api::dtos::responses::UploadResponse;
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Accepts a single image under the `file` multipart field. Type and size
/// are rejected before any byte reaches the store.
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::Validation("Invalid multipart body".into()))?
    {
        if field.name() == Some("file") {
            let content_type = field.content_type().unwrap_or_default().to_string();
            let original_name = field.file_name().unwrap_or("upload").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|_| AppError::Validation("Failed to read uploaded file".into()))?;
            file = Some((content_type, original_name, bytes));
            break;
        }
    }

    let (content_type, original_name, bytes) =
        file.ok_or(AppError::Validation("No file uploaded".into()))?;

    if !content_type.starts_with("image/") {
        return Err(AppError::Validation("File must be an image".into()));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation("File size must be less than 5MB".into()));
    }

    let filename = format!("{}-{}", Utc::now().timestamp_millis(), sanitize(&original_name));
    let url = state.image_store.store(&filename, &bytes).await?;

    info!("Image uploaded: {} ({} bytes)", filename, bytes.len());

    Ok(Json(UploadResponse { url, filename }))
}

fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '-')
        .collect()
}
