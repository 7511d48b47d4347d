/// Builds the response body for a deployment environment.
pub fn hello_message(environment: &str) -> String {
    format!("Hello, World! Environment: {environment}")
}
