//! Core library exports for the book catalog service.
//!
//! The `data` feature exposes the persistence layer (`domain`, `models`,
//! `schema`, `repository`). The `server` feature adds the forms, services and
//! Actix routes that make up the HTTP API.

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
