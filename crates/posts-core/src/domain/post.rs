use serde::{Deserialize, Serialize};

/// Post entity - a stored record with server-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    /// Carried through untouched; never compared or incremented here.
    pub version: Option<i32>,
}

impl Post {
    /// Keep identity, owner and version; take title and body from `content`.
    pub fn merge(self, content: PostContent) -> PostDraft {
        PostDraft {
            id: Some(self.id),
            user_id: self.user_id,
            title: content.title,
            body: content.body,
            version: self.version,
        }
    }
}

/// A post as handed to the store's `save`.
///
/// When `id` is `None` the store assigns one; otherwise the record with that
/// identity is inserted or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub id: Option<i32>,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub version: Option<i32>,
}

/// The client-writable fields of a post, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    pub title: String,
    pub body: String,
}

/// Request body for create and update.
///
/// Every field is optional so a missing `title` or `body` surfaces as a
/// validation failure instead of a decoding one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostPayload {
    pub id: Option<i32>,
    pub user_id: Option<i32>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub version: Option<i32>,
}

impl PostPayload {
    pub fn new(user_id: i32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            title: Some(title.into()),
            body: Some(body.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_json_shape() {
        let post = Post {
            id: 1,
            user_id: 1,
            title: "Hello, World!".to_string(),
            body: "This is my first post.".to_string(),
            version: None,
        };

        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({
                "id": 1,
                "userId": 1,
                "title": "Hello, World!",
                "body": "This is my first post.",
                "version": null
            })
        );
    }

    #[test]
    fn test_payload_tolerates_missing_fields() {
        let payload: PostPayload = serde_json::from_value(json!({ "title": "t" })).unwrap();
        assert_eq!(payload.title.as_deref(), Some("t"));
        assert_eq!(payload.body, None);
        assert_eq!(payload.user_id, None);
    }

    #[test]
    fn test_merge_keeps_server_owned_fields() {
        let existing = Post {
            id: 7,
            user_id: 2,
            title: "old".to_string(),
            body: "old body".to_string(),
            version: Some(3),
        };
        let draft = existing.merge(PostContent {
            title: "new".to_string(),
            body: "new body".to_string(),
        });

        assert_eq!(draft.id, Some(7));
        assert_eq!(draft.user_id, 2);
        assert_eq!(draft.version, Some(3));
        assert_eq!(draft.title, "new");
        assert_eq!(draft.body, "new body");
    }
}
