//! Host interface extensions for Web Functions

use std::{env, sync::LazyLock};

use hello_functions_wit::function_web::hello::functions::web_function_support;

static NOT_FOUND: &str = "<not found>";
// Fixed for the lifetime of the deployment, so it is safe to keep across invocations.
static FUNCTION_NAME: LazyLock<String> =
    LazyLock::new(|| env::var("__FUNCTION_NAME").unwrap_or(NOT_FOUND.to_string()));

/// Information regarding the current invocation. The host populates it either through
/// environment variables normally accessible via `std::env::var()`, or through imports
/// across the WASI bridge.
///
/// Instances may serve many invocations, so request details are read from the host each
/// time [FunctionEnvironment::current] is called. Do not keep one around between requests.
/// ```rust,no_run
/// use hello_functions_host::web_extensions::FunctionEnvironment;
/// let function_environment = FunctionEnvironment::current();
///
/// log::info!(
///     "{} {} (invocation {})",
///     function_environment.http_method(),
///     function_environment.http_path(),
///     function_environment.invocation_id(),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEnvironment {
    function_name: String,
    invocation_id: String,
    http_method: String,
    http_path: String,
}

impl FunctionEnvironment {
    /// Reads the details of the invocation currently being served.
    pub fn current() -> Self {
        let invocation_id =
            env::var("__INVOCATION_ID").unwrap_or_else(|_| web_function_support::invocation_id());
        Self {
            function_name: FUNCTION_NAME.clone(),
            invocation_id,
            http_method: web_function_support::http_method(),
            http_path: web_function_support::invocation_path().unwrap_or_default(),
        }
    }

    /// Builds an environment from known request details, without asking the host.
    pub fn from_parts(
        function_name: impl Into<String>,
        invocation_id: impl Into<String>,
        http_method: impl Into<String>,
        http_path: impl Into<String>,
    ) -> Self {
        Self {
            function_name: function_name.into(),
            invocation_id: invocation_id.into(),
            http_method: http_method.into(),
            http_path: http_path.into(),
        }
    }

    /// The name of the function, from `__FUNCTION_NAME`.
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// The ID of the currently executing invocation, from `__INVOCATION_ID` or the host.
    pub fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    /// The HTTP method used in the request when the function was invoked.
    /// "GET", "POST", "OPTIONS", etc.
    pub fn http_method(&self) -> &str {
        &self.http_method
    }

    /// The HTTP path used in the request when the function was invoked.
    ///
    /// This is the path relative to the function. If your function is deployed at
    /// `https://example.com/hello-world`, and you call
    /// `https://example.com/hello-world/greet`, this will return `/greet`.
    pub fn http_path(&self) -> &str {
        &self.http_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_reports_each_detail() {
        let environment = FunctionEnvironment::from_parts("hello-world", "inv-1", "OPTIONS", "/greet");
        assert_eq!(environment.function_name(), "hello-world");
        assert_eq!(environment.invocation_id(), "inv-1");
        assert_eq!(environment.http_method(), "OPTIONS");
        assert_eq!(environment.http_path(), "/greet");
    }
}
