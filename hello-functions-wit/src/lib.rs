//! WIT code generation root for hello-world Functions
//!
//! This crate is an internal library for generating the webassembly bindings of the
//! `hello:functions/web-function` world. It is not intended for direct use, and may be
//! materially changed at any time.
//!
//! Functions use `wasm32-wasip2` as the target architecture.
//! They use the [WIT](https://component-model.bytecodealliance.org/design/wit.html) [Component Model](https://component-model.bytecodealliance.org/)
//! to describe the ABI.
//!
//! You are likely to be interested in the sibling crates:
//! * `hello-functions`: Code generators for Functions.
//! * `hello-functions-host`: Interfaces and tools for calling host interfaces.
//! * `hello-functions-log`: Standard `log` adapter.

pub mod function_web;
