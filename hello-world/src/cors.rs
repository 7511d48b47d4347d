//! Static CORS policy attached to every response.

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

const ALLOWED_ORIGIN: &str = "*";
const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// The CORS headers, in the order they are sent.
pub fn cors_headers() -> Vec<(String, String)> {
    [
        (ALLOW_ORIGIN, ALLOWED_ORIGIN),
        (ALLOW_METHODS, ALLOWED_METHODS),
        (ALLOW_HEADERS, ALLOWED_HEADERS),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}
