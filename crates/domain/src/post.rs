//! Post — a piece of content published by a user.

use serde::{Deserialize, Serialize};

use crate::id::{PostId, UserId};

/// A published post.
///
/// Every post references its author by [`UserId`]; the store rejects
/// posts whose author does not exist. The JSON shape uses camelCase so
/// the author reference travels as `authorId` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_id: UserId,
}

impl Post {
    /// Create a builder for constructing a [`Post`].
    #[must_use]
    pub fn builder() -> PostBuilder {
        PostBuilder::default()
    }
}

/// Step-by-step builder for [`Post`].
#[derive(Debug, Default)]
pub struct PostBuilder {
    id: Option<PostId>,
    title: Option<String>,
    content: Option<String>,
    author_id: Option<UserId>,
}

impl PostBuilder {
    #[must_use]
    pub fn id(mut self, id: PostId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn author_id(mut self, author_id: UserId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    /// Consume the builder and return a [`Post`].
    ///
    /// A fresh random id is generated unless one was supplied; an
    /// unset author reference defaults to a random id, which the store
    /// will reject on insert.
    #[must_use]
    pub fn build(self) -> Post {
        Post {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            author_id: self.author_id.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_post_with_all_fields() {
        let author = UserId::new();
        let post = Post::builder()
            .title("Hello")
            .content("First post.")
            .author_id(author)
            .build();

        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "First post.");
        assert_eq!(post.author_id, author);
    }

    #[test]
    fn should_generate_fresh_id_when_not_supplied() {
        let a = Post::builder().title("x").build();
        let b = Post::builder().title("x").build();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_serialize_author_reference_as_camel_case() {
        let post = Post::builder()
            .title("Hello")
            .content("First post.")
            .author_id(UserId::new())
            .build();

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["authorId"], post.author_id.to_string());
        assert!(json.get("author_id").is_none());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let post = Post::builder()
            .title("Hello")
            .content("First post.")
            .author_id(UserId::new())
            .build();

        let json = serde_json::to_string(&post).unwrap();
        let parsed: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, post);
    }
}
