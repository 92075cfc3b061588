//! Domain entities - the core business objects.

mod post;
pub mod validation;

pub use post::{Post, PostContent, PostDraft, PostPayload};
pub use validation::validate;
