// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::{RelayError, Result};
use crate::vision::{self, ImageFormat, UploadedImage, VisionRequest};
use axum::extract::multipart::{Field, Multipart};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct DescribeParams {
    pub image: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub lang: Option<String>,
}

/// Handler for `GET /`: describe a remote image, or answer the identity
/// probe when no URL-shaped `image` parameter is present.
pub async fn describe_url_handler(
    State(state): State<AppState>,
    Query(params): Query<DescribeParams>,
) -> Result<Response> {
    if let Some(image) = params.image.as_deref() {
        if vision::is_remote_url(image) {
            info!("Describing remote image (lang={:?})", params.lang);

            let request = VisionRequest::from_remote_url(image, params.lang.clone());
            let description = state.vision_client.describe(&request).await?;

            return Ok(Json(json!({ "description": description })).into_response());
        }
    }

    Ok(Json(json!({ "name": env!("CARGO_PKG_NAME") })).into_response())
}

/// Handler for `POST /`: describe an uploaded image.
///
/// Validation happens in order, each a distinct 400: missing `image` field,
/// MIME type outside the allow-list, byte size over the configured limit.
/// The provider is only invoked once all three pass.
pub async fn describe_upload_handler(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> Result<Response> {
    let limit = state.config.upload.limit_bytes;
    let mut image: Option<UploadedImage> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| RelayError::InvalidRequest(format!("Multipart error: {}", e)))?
    {
        if field.name() != Some("image") {
            // ignore unknown fields
            continue;
        }

        // A declared type outside the allow-list fails before any bytes move.
        let declared_format = match field.content_type().map(|c| c.to_string()) {
            Some(mime) => {
                Some(ImageFormat::from_mime_type(&mime).ok_or(RelayError::InvalidImageType)?)
            }
            None => None,
        };

        image = Some(read_image_field(&mut field, declared_format, limit).await?);
        break;
    }

    let image = image.ok_or(RelayError::MissingImage)?;
    info!(
        "Describing uploaded image ({}, {} bytes, lang={:?})",
        image.format.mime_type(),
        image.byte_size(),
        params.lang
    );

    let request = VisionRequest::from_upload(&image, params.lang);
    let description = state.vision_client.describe(&request).await?;

    Ok(Json(json!({ "description": description })).into_response())
}

/// Stream the upload field into memory, resolving the format from magic
/// bytes when the client declared none. The size check fires as soon as the
/// running total passes the limit, so an oversized body is never fully read.
async fn read_image_field(
    field: &mut Field<'_>,
    declared_format: Option<ImageFormat>,
    limit: usize,
) -> Result<UploadedImage> {
    let mut buf: Vec<u8> = Vec::new();
    let mut format = declared_format;

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| RelayError::InvalidRequest(format!("Multipart error: {}", e)))?
    {
        buf.extend_from_slice(&chunk);

        if format.is_none() && buf.len() >= ImageFormat::SNIFF_LEN {
            format = Some(ImageFormat::detect(&buf).ok_or(RelayError::InvalidImageType)?);
        }
        if buf.len() > limit {
            return Err(RelayError::ImageTooLarge);
        }
    }

    let format = format
        .or_else(|| ImageFormat::detect(&buf))
        .ok_or(RelayError::InvalidImageType)?;

    debug!("Read upload field: {} bytes", buf.len());

    Ok(UploadedImage {
        format,
        bytes: buf.into(),
    })
}

/// Handler for any unmatched route/method.
pub async fn not_found_handler() -> RelayError {
    RelayError::NotFound
}
