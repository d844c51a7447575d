//! Core translation modules

pub mod chunker;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
