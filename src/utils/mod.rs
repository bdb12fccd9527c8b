//! Utility functions and helpers for the img-alt-api relay.
//!
//! This module provides cross-cutting concerns like structured logging and
//! credential sanitization for log output.
//!
//! # Submodules
//!
//! - `logging`: Tracing and logging initialization with security filters.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
