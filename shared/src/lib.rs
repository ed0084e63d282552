//! Snake Arena Shared Library
//!
//! Domain models, API request/response types and input validation used by
//! the backend and by any Rust client of the API.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use types::*;
