//! Clipsheet — LINE webhook bot that clips URLs into a Google Sheet.

pub mod config;
pub mod error;
pub mod handler;
pub mod line;
pub mod parser;
pub mod server;
pub mod sheets;
