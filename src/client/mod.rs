//! remote post api stuff
use {
    crate::{
        bail,
        config::options::HttpConfig,
        error::*,
        getopt,
        models::{ApiMessage, Post, PostsResponse},
    },
    async_trait::async_trait,
    reqwest::{Client, StatusCode},
    serde::de::DeserializeOwned,
    std::time::Duration,
    tracing::{debug, info, warn},
    url::Url,
};

pub mod posts;

/// the read operations the screens depend on
///
/// both calls are idempotent and side-effect free
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// fetch the first page of posts
    async fn list_posts(&self) -> Result<PostsResponse>;

    /// fetch a single post, failing with [`PostsError::NotFound`] if it doesn't exist
    async fn get_post_by_id(&self, id: i64) -> Result<Post>;
}

/// the client
#[derive(Clone, Debug)]
pub struct PostsClient {
    /// the http client
    pub client: Client,
    /// the base url for api requests, always ending in `/`
    pub base_url: Url,
}

impl PostsClient {
    /// make a new client for `base_url` using the loaded http configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http_config(base_url, &getopt!(http))
    }

    /// make a new client entirely from the loaded configuration
    pub fn from_config() -> Result<Self> {
        Self::new(&getopt!(base_url))
    }

    /// make a new client with an explicit http configuration
    pub fn with_http_config(base_url: &str, http: &HttpConfig) -> Result<Self> {
        let base_url = Self::normalize_base_url(base_url)?;
        let client = Self::build_http_client(http)?;

        info!(%base_url, "initialized http client");

        Ok(Self { client, base_url })
    }

    /// parse the base url and make sure relative joins keep its path
    fn normalize_base_url(raw: &str) -> Result<Url> {
        let mut url = Url::parse(raw)?;

        if url.cannot_be_a_base() {
            bail!("{} can't be used as a base url", raw);
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(url)
    }

    /// build an http client from the given configuration
    ///
    /// unset fields fall back to the built-in defaults
    fn build_http_client(http: &HttpConfig) -> Result<Client> {
        let defaults = HttpConfig::default();
        let mut builder = Client::builder();

        if let Some(user_agent) = http.user_agent.clone().or(defaults.user_agent) {
            builder = builder.user_agent(user_agent);
        }

        if let Some(secs) = http.timeout_secs.or(defaults.timeout_secs) {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(secs) = http.connect_timeout_secs.or(defaults.connect_timeout_secs) {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        if let Some(max) = http
            .pool_max_idle_per_host
            .or(defaults.pool_max_idle_per_host)
        {
            builder = builder.pool_max_idle_per_host(max);
        }

        if let Some(secs) = http
            .pool_idle_timeout_secs
            .or(defaults.pool_idle_timeout_secs)
        {
            builder = builder.pool_idle_timeout(Duration::from_secs(secs));
        }

        builder.build().map_err(PostsError::from)
    }

    /// resolve a path relative to the base url
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(PostsError::from)
    }

    /// send a GET and collect the status and raw body
    async fn get(&self, url: &Url) -> Result<(StatusCode, Vec<u8>)> {
        debug!(%url, "GET");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        Ok((status, bytes.to_vec()))
    }

    /// turn a non-success status into an error
    fn ensure_success(status: StatusCode, url: &Url, body: &[u8]) -> Result<()> {
        if status.is_success() {
            return Ok(());
        }

        warn!(
            %status,
            %url,
            api_message = api_message(body).as_deref().unwrap_or("<none>"),
            "request failed"
        );

        bail!(PostsError::Status {
            status,
            url: url.to_string(),
        })
    }
}

/// decode a json body, tagging failures with what was being decoded
fn decode<T: DeserializeOwned>(bytes: &[u8], what: &str) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|source| PostsError::Deserialize {
        what: what.to_string(),
        source,
    })
}

/// pull the message out of an error body, if there is one
fn api_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ApiMessage>(body)
        .ok()
        .map(|m| m.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PostsClient {
        PostsClient::with_http_config(base, &HttpConfig::default()).unwrap()
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let c = client("https://dummyjson.com");
        assert_eq!(
            c.endpoint("posts/3").unwrap().as_str(),
            "https://dummyjson.com/posts/3"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let c = client("http://localhost:8080/api/v1");
        assert_eq!(
            c.endpoint("posts").unwrap().as_str(),
            "http://localhost:8080/api/v1/posts"
        );
    }

    #[test]
    fn test_rejects_unusable_base() {
        let err = PostsClient::with_http_config("mailto:someone@example.com", &HttpConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert!(PostsClient::with_http_config("nope", &HttpConfig::default()).is_err());
    }

    #[test]
    fn test_api_message() {
        assert_eq!(
            api_message(br#"{"message":"Post with id '999' not found"}"#).as_deref(),
            Some("Post with id '999' not found")
        );
        assert_eq!(api_message(b"<html>"), None);
    }
}
