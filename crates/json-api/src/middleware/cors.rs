//! CORS policy

use salvo::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler},
    http::{
        Method,
        header::{AUTHORIZATION, ACCEPT, CONTENT_TYPE, HeaderName, HeaderValue},
    },
};
use tracing::warn;

/// Build the CORS handler for the configured origins.
///
/// Returns `None` when no usable origin is configured, which disables CORS.
pub(crate) fn cors_handler(origins: &[String]) -> Option<CorsHandler> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(source) => {
                warn!(origin, "ignoring invalid CORS origin: {source}");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        Cors::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
            ]))
            .allow_headers(AllowHeaders::list([
                ACCEPT,
                AUTHORIZATION,
                CONTENT_TYPE,
                HeaderName::from_static("x-request-id"),
            ]))
            .allow_credentials(true)
            .into_handler(),
    )
}
