// responses/asset.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

const MAIN_CSS: &str = include_str!("../../static/main.css");

/// The dashboard stylesheet, compiled into the binary.
pub fn stylesheet_response() -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
        .header("Cache-Control", "no-cache")
        .body(Body::from(MAIN_CSS))
        .map_err(|_| ServerError::InternalError)
}
