use hello_functions::WebResponse;
use hello_functions_host::web_extensions::FunctionEnvironment;

use crate::config::FunctionConfig;
use crate::cors::cors_headers;
use crate::greeting::hello_message;

const PREFLIGHT_METHOD: &str = "OPTIONS";

/// Anything that can report the HTTP method of the request being served.
pub trait HttpRequest {
    fn method(&self) -> &str;
}

impl HttpRequest for FunctionEnvironment {
    fn method(&self) -> &str {
        self.http_method()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// A browser CORS preflight; answered with headers only.
    Preflight,
    Normal,
}

impl RequestKind {
    /// Method names are compared exactly.
    pub fn of(method: &str) -> Self {
        if method == PREFLIGHT_METHOD {
            RequestKind::Preflight
        } else {
            RequestKind::Normal
        }
    }
}

/// Answers a request with the greeting for the configured environment.
///
/// Preflight requests get `204` with no body. Everything else gets `200` and the greeting.
/// Both carry the CORS headers.
pub fn handle(request: &impl HttpRequest, config: &FunctionConfig) -> WebResponse {
    let message = hello_message(&config.environment);
    let response = WebResponse::new().with_headers(cors_headers());

    match RequestKind::of(request.method()) {
        RequestKind::Preflight => response.with_status(204),
        RequestKind::Normal => response
            .with_status(200)
            .header("content-type", "text/plain; charset=utf-8")
            .with_text(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cors::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
    use proptest::prelude::*;

    struct Request(&'static str);

    impl HttpRequest for Request {
        fn method(&self) -> &str {
            self.0
        }
    }

    fn config(environment: &str) -> FunctionConfig {
        FunctionConfig {
            environment: environment.to_string(),
            ..FunctionConfig::default()
        }
    }

    fn assert_cors(response: &WebResponse) {
        assert_eq!(response.header_value(ALLOW_ORIGIN), Some("*"));
        assert_eq!(
            response.header_value(ALLOW_METHODS),
            Some("GET, POST, OPTIONS")
        );
        assert_eq!(response.header_value(ALLOW_HEADERS), Some("Content-Type"));
    }

    #[test]
    fn get_without_env_greets_unknown() {
        let config = FunctionConfig::from_lookup(|_| None);
        let response = handle(&Request("GET"), &config);

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), b"Hello, World! Environment: unknown");
        assert_cors(&response);
    }

    #[test]
    fn each_invocation_uses_its_own_method() {
        let config = config("production");
        let get = FunctionEnvironment::from_parts("hello-world", "inv-1", "GET", "/");
        let preflight = FunctionEnvironment::from_parts("hello-world", "inv-2", "OPTIONS", "/");

        assert_eq!(handle(&get, &config).status(), 200);
        let response = handle(&preflight, &config);
        assert_eq!(response.status(), 204);
        assert!(response.body().is_empty());
    }

    #[test]
    fn post_greets_configured_environment() {
        let response = handle(&Request("POST"), &config("production"));

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), b"Hello, World! Environment: production");
        assert_eq!(
            response.header_value("content-type"),
            Some("text/plain; charset=utf-8")
        );
        assert_cors(&response);
    }

    #[test]
    fn preflight_is_empty_204() {
        let response = handle(&Request("OPTIONS"), &config("production"));

        assert_eq!(response.status(), 204);
        assert!(response.body().is_empty());
        assert_eq!(response.headers(), cors_headers().as_slice());
    }

    #[test]
    fn method_match_is_exact() {
        assert_eq!(RequestKind::of("OPTIONS"), RequestKind::Preflight);
        assert_eq!(RequestKind::of("options"), RequestKind::Normal);
        assert_eq!(RequestKind::of("DELETE"), RequestKind::Normal);
        assert_eq!(RequestKind::of(""), RequestKind::Normal);
    }

    proptest! {
        #[test]
        fn every_response_carries_cors(
            environment in ".*",
            method in prop::sample::select(vec!["GET", "POST", "PUT", "OPTIONS", "HEAD"]),
        ) {
            let response = handle(&Request(method), &config(&environment));
            assert_cors(&response);
            if method == "OPTIONS" {
                prop_assert_eq!(response.status(), 204);
                prop_assert!(response.body().is_empty());
            } else {
                let expected = format!("Hello, World! Environment: {environment}");
                prop_assert_eq!(response.status(), 200);
                prop_assert_eq!(response.body(), expected.as_bytes());
            }
        }
    }
}
