// src/transport/mod.rs - Transport Layer
//! Caller-facing surfaces. Currently a single REST transport.

pub mod rest;

pub use rest::{router, ApiState};
