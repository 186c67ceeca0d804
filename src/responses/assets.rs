use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

fn content_type(path: &Path) -> Mime {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("js") => mime::APPLICATION_JAVASCRIPT_UTF_8,
        Some("json") => mime::APPLICATION_JSON,
        Some("html") => mime::TEXT_HTML_UTF_8,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("gif") => mime::IMAGE_GIF,
        Some("svg") => mime::IMAGE_SVG,
        Some("ico") => "image/x-icon"
            .parse()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM),
        Some("woff2") => mime::FONT_WOFF2,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

/// Resolve `rel` under `root`, refusing anything that could climb out of it.
pub fn resolve(root: &Path, rel: &str) -> Result<PathBuf, ServerError> {
    if rel.is_empty() || rel.contains('\\') {
        return Err(ServerError::BadRequest(format!("invalid asset path: {rel}")));
    }

    let rel = Path::new(rel);
    if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
        return Err(ServerError::BadRequest(format!(
            "invalid asset path: {}",
            rel.display()
        )));
    }

    Ok(root.join(rel))
}

pub fn static_file(root: &Path, rel: &str) -> ResultResp {
    let path = resolve(root, rel)?;
    if path.is_dir() {
        return Err(ServerError::NotFound);
    }

    let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => ServerError::NotFound,
        _ => {
            warn!("reading {}: {e}", path.display());
            ServerError::Io(e.to_string())
        }
    })?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type(&path).as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_is_rejected() {
        let root = Path::new("static");
        for bad in ["../Cargo.toml", "css/../../secret", "/etc/passwd", "", "a\\b", "./main.css"] {
            assert!(
                matches!(resolve(root, bad), Err(ServerError::BadRequest(_))),
                "{bad} should be rejected"
            );
        }
        assert_eq!(resolve(root, "css/main.css").unwrap(), root.join("css/main.css"));
    }

    #[test]
    fn content_type_by_extension() {
        assert_eq!(content_type(Path::new("a.CSS")), mime::TEXT_CSS_UTF_8);
        assert_eq!(content_type(Path::new("a.js")), mime::APPLICATION_JAVASCRIPT_UTF_8);
        assert_eq!(content_type(Path::new("a.ico")).essence_str(), "image/x-icon");
        assert_eq!(content_type(Path::new("README")), mime::APPLICATION_OCTET_STREAM);
    }
}
