//! An HTTP Function that greets callers with the name of the environment it is deployed to.
//!
//! `OPTIONS` requests are treated as CORS preflights and answered with an empty `204`.
//! Every other method gets a `200` with `Hello, World! Environment: {ENV}`.
//!
//! Configuration comes from process environment variables:
//! * `ENV`: the deployment environment name, `unknown` when unset.
//! * `LOG_LEVEL`: a `log` level filter, `info` when unset or invalid.

pub mod config;
pub mod cors;
pub mod greeting;
pub mod handler;

use hello_functions::{WebResponse, WebResult};
use hello_functions_host::web_extensions::FunctionEnvironment;

use crate::config::FunctionConfig;

hello_functions::post!(hello_world);
fn hello_world(_payload: Vec<u8>) -> WebResult<WebResponse> {
    let config = FunctionConfig::from_env();
    hello_functions_log::configure_logging(config.log_level)?;

    let function_env = FunctionEnvironment::current();
    log::info!(
        "{} {} (invocation {})",
        function_env.http_method(),
        function_env.http_path(),
        function_env.invocation_id()
    );

    let response = handler::handle(&function_env, &config);
    log::debug!(
        "{} responded {} for environment {}",
        function_env.function_name(),
        response.status(),
        config.environment
    );
    Ok(response)
}
