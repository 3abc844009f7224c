//! picohttp - minimal one-shot HTTP/1.1 server
//!
//! Core library for the connection-handling and request-dispatch pipeline.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
