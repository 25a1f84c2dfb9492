//! Cross-origin policy.

use salvo::{
    cors::{AllowOrigin, Cors, CorsHandler},
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue, InvalidHeaderValue},
    },
};

/// Allow exactly one browser origin, with credentials.
pub(crate) fn cors_handler(allowed_origin: &str) -> Result<CorsHandler, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(allowed_origin)?;

    Ok(Cors::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_credentials(true)
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(vec![CONTENT_TYPE, AUTHORIZATION])
        .into_handler())
}
