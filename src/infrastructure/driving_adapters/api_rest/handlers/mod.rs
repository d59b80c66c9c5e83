//! HTTP Handlers

pub mod contracts;
