//! Axum-based HTTP surface for the img-alt-api relay.
//!
//! This module is responsible for setting up the HTTP server, configuring
//! routes, and handling incoming requests. Each request is validated locally,
//! relayed to the upstream vision API once, and answered with a single JSON
//! body.
//!
//! # Components
//!
//! - `handlers`: Implementation of the describe endpoints and 404 fallback.
//! - `middleware`: Custom tower/axum middleware for request ID tracking.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
