//! Persistence-agnostic entities and value objects.

pub mod book;
pub mod category;
pub mod types;
