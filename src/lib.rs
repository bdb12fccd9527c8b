// img-alt-api - image to alt-text relay service
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod deepseek;
pub mod error;
pub mod server;
pub mod utils;
pub mod vision;
