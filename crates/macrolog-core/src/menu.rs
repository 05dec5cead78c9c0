//! Menu photo analysis.

use std::path::Path;

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::models::MenuAnalysis;

pub const NO_RECOMMENDATIONS: &str = "No recommendations found. Try a different image.";
pub const ANALYZE_FAILED: &str = "Failed to analyze menu. Please try again with a clearer image.";

/// Reads an image from disk and uploads it for analysis.
pub async fn analyze_menu_image(api: &ApiClient, path: &Path) -> ApiResult<MenuAnalysis> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mime = image_mime(&bytes).ok_or_else(|| {
        ApiError::Invalid(format!("{} is not a recognized image", path.display()))
    })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "menu".to_string(), |name| name.to_string_lossy().into_owned());

    tracing::info!(file_name, mime, size = bytes.len(), "analyzing menu image");
    api.analyze_menu(bytes, file_name, mime).await
}

/// MIME type of `bytes` when they look like an image.
fn image_mime(bytes: &[u8]) -> Option<&'static str> {
    infer::get(bytes)
        .filter(|kind| kind.matcher_type() == infer::MatcherType::Image)
        .map(|kind| kind.mime_type())
}
