//! Best-effort resume download: one fetch, one fallback. A response served
//! as markup means the static host fell back to the page shell instead of
//! the document, so it is treated the same as a network failure.

use thiserror::Error;

/// Where the resume lives and what the saved file should be called.
/// Constructed once by the app shell and passed to every consumer; there is
/// no module-level path constant to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeAsset {
    pub path: &'static str,
    pub filename: &'static str,
}

impl Default for ResumeAsset {
    fn default() -> Self {
        ResumeAsset {
            path: "/Aditya_Kini_Resume_Full_Time.pdf",
            filename: "Aditya_Kini_Resume.pdf",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DownloadError {
    #[error("resume fetch failed")]
    Fetch,
    #[error("resume served as markup; asset likely missing")]
    MarkupResponse,
    #[error("could not trigger the browser download")]
    SaveFailed,
}

/// True when a declared content type indicates an HTML document. A missing
/// content type is not treated as markup.
pub fn is_markup_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("text/html"))
        .unwrap_or(false)
}

/// Fetches the resume and hands it to the browser as a file download.
/// Any failure falls back to opening the asset path in a new tab; the user
/// never sees an error state.
#[cfg(feature = "hydrate")]
pub async fn download_resume(asset: ResumeAsset) {
    if let Err(err) = try_download(&asset).await {
        log::warn!("resume download failed ({err}), opening {} directly", asset.path);
        open_in_new_tab(&asset);
    }
}

#[cfg(feature = "hydrate")]
async fn try_download(asset: &ResumeAsset) -> Result<(), DownloadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or(DownloadError::Fetch)?;
    let response = JsFuture::from(window.fetch_with_str(asset.path))
        .await
        .map_err(|_| DownloadError::Fetch)?;
    let response: web_sys::Response =
        response.dyn_into().map_err(|_| DownloadError::Fetch)?;

    let content_type = response.headers().get("content-type").ok().flatten();
    if is_markup_content_type(content_type.as_deref()) {
        return Err(DownloadError::MarkupResponse);
    }

    let blob = JsFuture::from(response.blob().map_err(|_| DownloadError::Fetch)?)
        .await
        .map_err(|_| DownloadError::Fetch)?;
    let blob: web_sys::Blob = blob.dyn_into().map_err(|_| DownloadError::Fetch)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| DownloadError::SaveFailed)?;
    let saved = save_via_anchor(&url, asset.filename);
    // Release the object URL whether or not the click landed.
    let _ = web_sys::Url::revoke_object_url(&url);
    saved
}

#[cfg(feature = "hydrate")]
fn save_via_anchor(url: &str, filename: &str) -> Result<(), DownloadError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DownloadError::SaveFailed)?;
    let body = document.body().ok_or(DownloadError::SaveFailed)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| DownloadError::SaveFailed)?
        .dyn_into()
        .map_err(|_| DownloadError::SaveFailed)?;
    anchor.set_href(url);
    anchor.set_download(filename);

    body.append_child(&anchor).map_err(|_| DownloadError::SaveFailed)?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    Ok(())
}

#[cfg(feature = "hydrate")]
fn open_in_new_tab(asset: &ResumeAsset) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(asset.path, "_blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_content_types_are_rejected() {
        assert!(is_markup_content_type(Some("text/html")));
        assert!(is_markup_content_type(Some("text/html; charset=utf-8")));
        assert!(is_markup_content_type(Some("Text/HTML")));
    }

    #[test]
    fn test_binary_and_missing_content_types_pass() {
        assert!(!is_markup_content_type(Some("application/pdf")));
        assert!(!is_markup_content_type(Some("application/octet-stream")));
        assert!(!is_markup_content_type(None));
    }

    #[test]
    fn test_default_asset_points_at_the_pdf() {
        let asset = ResumeAsset::default();
        assert!(asset.path.ends_with(".pdf"));
        assert!(asset.filename.ends_with(".pdf"));
    }
}
