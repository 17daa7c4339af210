//! API Module
//!
//! HTTP gateway over the category cache facade.
//!
//! # Endpoints
//! - `GET|PUT|DELETE /cache/:category/:key` - Single key operations
//! - `PUT|POST /batch/:category` - Batch store / batch read
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
