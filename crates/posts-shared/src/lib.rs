//! # Posts Shared
//!
//! Wire types shared between the posts server and its clients.

pub mod response;

pub use response::ErrorResponse;
