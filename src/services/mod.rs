pub mod books;
pub mod categories;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
