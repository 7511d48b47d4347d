//! Code generation helpers for hello-world Functions
//!
//! This crate generates the webassembly bindings a Function exports to its host.
//!
//! Functions use `wasm32-wasip2` as the target architecture.
//! They use the [WIT](https://component-model.bytecodealliance.org/design/wit.html) [Component Model](https://component-model.bytecodealliance.org/)
//! to describe the ABI.
//!
//! You are likely to be interested in the sibling crates:
//! * `hello-functions-host`: Interfaces and tools for calling host interfaces.
//! * `hello-functions-log`: Standard `log` adapter.
mod response;

use hello_functions_host::encoding::Extract;
use hello_functions_wit::function_web::exports::hello::functions::guest_function_web;
use hello_functions_wit::function_web::hello::functions::types::InvocationError;

pub use response::{IntoWebResponse, WebError, WebResponse, WebResult};

/// Create a handler that accepts a post payload and returns a response.
///
/// The handler takes any [Extract] type and returns anything implementing [IntoWebResponse].
/// Extraction failures are reported to the host as an invocation error; handler errors
/// returned through [WebResult] become 500s.
///
/// ```rust,ignore
/// use hello_functions::{WebResponse, WebResult};
///
/// hello_functions::post!(ping);
/// fn ping(_payload: Vec<u8>) -> WebResult<WebResponse> {
///     Ok(WebResponse::new().with_text("pong"))
/// }
/// ```
#[macro_export]
macro_rules! post {
    ($post_handler: ident) => {
        struct WebFunction;
        hello_functions_wit::__export_web_function_impl!(WebFunction);

        #[automatically_derived]
        impl hello_functions_wit::function_web::exports::hello::functions::guest_function_web::Guest for WebFunction {
            fn post(payload: Vec<u8>) -> Result<hello_functions_wit::function_web::exports::hello::functions::guest_function_web::Response, hello_functions_wit::function_web::hello::functions::types::InvocationError> {
                hello_functions::post_template(payload, $post_handler)
            }
        }
    };
}

/// An internal helper for the post! macro.
#[doc(hidden)]
pub fn post_template<TExtract, TResponse>(
    payload: Vec<u8>,
    handler: fn(request: TExtract) -> TResponse,
) -> Result<guest_function_web::Response, InvocationError>
where
    TExtract: Extract,
    TResponse: IntoWebResponse,
{
    let request = TExtract::extract(payload)?;
    Ok(handler(request).response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(body: Vec<u8>) -> WebResult<WebResponse> {
        let text = String::from_utf8(body)?;
        Ok(WebResponse::new().with_text(text.to_uppercase()))
    }

    #[test]
    fn post_template_extracts_and_responds() {
        let response = post_template(b"hi".to_vec(), echo).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"HI".to_vec());
    }

    #[test]
    fn post_template_turns_handler_errors_into_500() {
        let response = post_template(vec![0xff], echo).unwrap();
        assert_eq!(response.status, 500);
        assert!(
            String::from_utf8(response.body)
                .unwrap()
                .starts_with("An error occurred during function invocation")
        );
    }
}
