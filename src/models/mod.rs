//! Diesel row models and service configuration.

pub mod book;
pub mod category;
#[cfg(feature = "server")]
pub mod config;
