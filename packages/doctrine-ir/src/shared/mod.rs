//! Shared kernel: models, ports and utilities used by every feature

pub mod models;
pub mod ports;
pub mod utils;
