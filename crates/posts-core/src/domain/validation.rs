//! Payload preconditions, checked before any store access.

use super::post::{PostContent, PostDraft, PostPayload};
use crate::error::{FieldViolation, ValidationError};

const BLANK: &str = "must not be blank";
const MISSING: &str = "must not be null";

/// Reject a payload whose `title` or `body` is absent or only whitespace.
///
/// Every offending field is reported, not just the first one.
pub fn validate(payload: &PostPayload) -> Result<(), ValidationError> {
    ValidationError::check(content_violations(payload))
}

/// [`validate`], plus the owner a new record cannot be stored without.
pub fn validate_new(payload: &PostPayload) -> Result<(), ValidationError> {
    let mut violations = content_violations(payload);
    if payload.user_id.is_none() {
        violations.push(FieldViolation::new("userId", MISSING));
    }
    ValidationError::check(violations)
}

fn content_violations(payload: &PostPayload) -> Vec<FieldViolation> {
    [("title", &payload.title), ("body", &payload.body)]
        .into_iter()
        .filter(|(_, value)| is_blank(value.as_deref()))
        .map(|(field, _)| FieldViolation::new(field, BLANK))
        .collect()
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

impl TryFrom<PostPayload> for PostContent {
    type Error = ValidationError;

    fn try_from(payload: PostPayload) -> Result<Self, Self::Error> {
        validate(&payload)?;
        Ok(Self {
            title: payload.title.unwrap_or_default(),
            body: payload.body.unwrap_or_default(),
        })
    }
}

impl TryFrom<PostPayload> for PostDraft {
    type Error = ValidationError;

    fn try_from(payload: PostPayload) -> Result<Self, Self::Error> {
        validate_new(&payload)?;
        Ok(Self {
            id: payload.id,
            user_id: payload.user_id.unwrap_or_default(),
            title: payload.title.unwrap_or_default(),
            body: payload.body.unwrap_or_default(),
            version: payload.version,
        })
    }
}
