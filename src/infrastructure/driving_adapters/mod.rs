//! Driving Adapters
//!
//! Entry points that drive the registry: the read-only REST API. The
//! `registry-tool` binary drives the same use cases from the command line.

pub mod api_rest;
