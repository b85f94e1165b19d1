//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and listing options.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::AuthUser;
pub use pagination::{ListParams, Listing, ViewParams};
pub use path::ResourceId;
pub use validated::ValidatedJson;
