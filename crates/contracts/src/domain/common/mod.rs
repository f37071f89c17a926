//! Common types for all resources: response envelope, paging, ids

pub mod envelope;
pub mod paging;
pub mod query;

// Re-exports
pub use envelope::ApiResponse;
pub use paging::PageResponse;

/// Числовой идентификатор записи на стороне API
pub type EntityId = i64;
