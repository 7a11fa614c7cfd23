//! Shared types used across the API surface.

mod pagination;
mod response;

pub use pagination::PageQuery;
pub use response::{ApiResponse, Created};
