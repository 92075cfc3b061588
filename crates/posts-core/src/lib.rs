//! # Posts Core
//!
//! The domain layer of the posts service.
//! This crate contains the post model, its validation rules, the store port
//! and the resource manager. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod manager;
pub mod ports;

pub use error::{PostError, RepoError, ValidationError};
pub use manager::PostManager;
