//! post operations on the remote api
use {
    super::{PostsApi, PostsClient, api_message, decode},
    crate::{
        error::{PostsError, Result},
        models::{Post, PostsResponse},
    },
    async_trait::async_trait,
    reqwest::StatusCode,
    tracing::{debug, instrument},
};

#[async_trait]
impl PostsApi for PostsClient {
    #[instrument(skip(self))]
    async fn list_posts(&self) -> Result<PostsResponse> {
        let url = self.endpoint("posts")?;
        let (status, body) = self.get(&url).await?;
        Self::ensure_success(status, &url, &body)?;

        let posts: PostsResponse = decode(&body, "post listing")?;

        debug!(
            count = posts.posts.len(),
            total = posts.total,
            skip = posts.skip,
            limit = posts.limit,
            "fetched posts"
        );

        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn get_post_by_id(&self, id: i64) -> Result<Post> {
        let url = self.endpoint(&format!("posts/{}", id))?;
        let (status, body) = self.get(&url).await?;

        if status == StatusCode::NOT_FOUND {
            debug!(id, api_message = ?api_message(&body), "post not found");
            return Err(PostsError::NotFound(id));
        }

        Self::ensure_success(status, &url, &body)?;
        decode(&body, &format!("post {}", id))
    }
}
