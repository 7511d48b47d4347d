#![deny(missing_docs)]

//! Host interface tools for hello-world Functions
//!
//! This crate helps you write Functions against the `hello:functions/web-function` world.
//!
//! Functions use `wasm32-wasip2` as the target architecture.
//! They use the [WIT](https://component-model.bytecodealliance.org/design/wit.html) [Component Model](https://component-model.bytecodealliance.org/)
//! to describe the ABI.
//!
//! Host imports trap when called outside of a Function host, so keep them out of unit tests.
//!
//! You are likely to be interested in the sibling crates:
//! * `hello-functions`: Code generators for Functions.
//! * `hello-functions-log`: Standard `log` adapter.

pub mod encoding;
mod error;
pub mod logging;
pub mod web_extensions;

pub use error::{Error, FunctionResult};
