use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::fs;
use std::path::Path;

/// Serves one file from `static/`. The layout only references a handful
/// of assets, so the type map stays by hand.
pub fn static_response(file_name: &str) -> ResultResp {
    // No traversal: a bare file name only.
    if file_name.contains('/') || file_name.contains("..") {
        return Err(ServerError::BadRequest("bad asset path".to_string()));
    }

    let path = Path::new("static").join(file_name);
    let bytes = fs::read(&path).map_err(|_| ServerError::NotFound)?;

    let content_type = content_type_for(file_name);

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .body(Body::from(bytes))
        .unwrap();

    Ok(resp)
}

fn content_type_for(file_name: &str) -> Mime {
    match file_name.rsplit('.').next() {
        Some("css") => mime::TEXT_CSS,
        Some("js") => mime::TEXT_JAVASCRIPT,
        Some("png") => mime::IMAGE_PNG,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
