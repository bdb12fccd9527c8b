//! Vision request assembly and upload validation.
//!
//! This module turns the two inbound shapes (remote URL reference, validated
//! multipart upload) into the one provider-agnostic request the upstream call
//! consumes. It includes the MIME allow-list, magic-byte format detection,
//! and data URI encoding for uploaded bytes.
//!
//! # Submodules
//!
//! - `models`: Image formats, validation constraints, and the upload type.
//! - `request`: The shared vision request and its two adapters.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod models;
pub mod request;

pub use models::{ImageFormat, UploadedImage};
pub use request::{is_remote_url, VisionRequest};
