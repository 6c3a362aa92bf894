//! data types used for deserializing API responses
//!
//! every listed field is required; a response missing one fails to decode
//! instead of being filled with a default. fields the API adds on top of these
//! (`views` and friends) are ignored.
use serde::{Deserialize, Serialize};

/// The envelope returned by the post listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsResponse {
    /// The posts on this page, in the order the API returned them.
    pub posts: Vec<Post>,
    /// Total number of posts available upstream.
    pub total: u64,
    /// How many posts were skipped before this page.
    pub skip: u64,
    /// The page size the API used.
    pub limit: u64,
}

/// A single post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, also used as the navigation key for the detail screen.
    pub id: i64,
    /// The post title.
    pub title: String,
    /// The post body.
    pub body: String,
    /// Identifier of the user who wrote the post.
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Tags, in the order the API returned them.
    pub tags: Vec<String>,
    /// Like/dislike counters.
    pub reactions: Reactions,
}

/// Like/dislike counters embedded in a [`Post`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    /// Number of likes.
    pub likes: u64,
    /// Number of dislikes.
    pub dislikes: u64,
}

/// The body the API sends alongside error statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    /// A human readable message.
    pub message: String,
}

impl Post {
    /// the first tag, if the post has any
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// every tag joined with `", "`
    pub fn joined_tags(&self) -> String {
        self.tags.join(", ")
    }
}

impl PostsResponse {
    /// whether the page holds no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
