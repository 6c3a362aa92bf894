//! the http client against a local mock of the posts api
use {
    axum::{Json, Router, extract::Path, http::StatusCode, routing::get},
    postrs::{
        client::{PostsApi, PostsClient},
        config::options::HttpConfig,
        error::{ErrorKind, PostsError},
    },
    serde_json::{Value, json},
    std::net::SocketAddr,
    tokio::net::TcpListener,
};

fn post_json(id: i64) -> Value {
    json!({
        "id": id,
        "title": format!("post number {id}"),
        "body": "some body text",
        "userId": 10 + id,
        "tags": ["history", "crime"],
        "reactions": { "likes": 192, "dislikes": 25 },
        "views": 305
    })
}

async fn list_posts() -> Json<Value> {
    Json(json!({
        "posts": [post_json(1), post_json(2), post_json(3)],
        "total": 251,
        "skip": 0,
        "limit": 3
    }))
}

async fn get_post(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    match id.parse::<i64>() {
        Ok(1) => (StatusCode::OK, Json(post_json(1))),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("Post with id '{id}' not found") })),
        ),
    }
}

async fn broken_list() -> Json<Value> {
    Json(json!({ "posts": "nope", "total": 0, "skip": 0, "limit": 0 }))
}

async fn broken_post() -> Json<Value> {
    Json(json!({ "id": 1, "title": "missing everything else" }))
}

async fn failing() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "boom" })),
    )
}

fn app() -> Router {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .route("/broken/posts", get(broken_list))
        .route("/broken/posts/{id}", get(broken_post))
        .route("/failing/posts", get(failing))
        .route("/failing/posts/{id}", get(failing))
}

async fn serve() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });

    addr
}

fn client(base: &str) -> PostsClient {
    PostsClient::with_http_config(base, &HttpConfig::default()).unwrap()
}

#[tokio::test]
async fn test_list_posts_keeps_order_and_paging() {
    let addr = serve().await;
    let resp = client(&format!("http://{addr}")).list_posts().await.unwrap();

    let ids: Vec<i64> = resp.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(resp.total, 251);
    assert_eq!(resp.limit, 3);
    assert_eq!(resp.posts[0].user_id, 11);
    assert_eq!(resp.posts[0].reactions.likes, 192);
}

#[tokio::test]
async fn test_get_post_by_id() {
    let addr = serve().await;
    let post = client(&format!("http://{addr}/"))
        .get_post_by_id(1)
        .await
        .unwrap();

    assert_eq!(post.id, 1);
    assert_eq!(post.tags, vec!["history", "crime"]);
    assert_eq!(post.reactions.dislikes, 25);
}

#[tokio::test]
async fn test_missing_post_is_not_found() {
    let addr = serve().await;
    let err = client(&format!("http://{addr}"))
        .get_post_by_id(99)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(err, PostsError::NotFound(99)));
}

#[tokio::test]
async fn test_malformed_bodies_fail_to_deserialize() {
    let addr = serve().await;
    let api = client(&format!("http://{addr}/broken"));

    let err = api.list_posts().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Deserialization);

    let err = api.get_post_by_id(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Deserialization);
}

#[tokio::test]
async fn test_server_errors_are_other() {
    let addr = serve().await;
    let api = client(&format!("http://{addr}/failing"));

    let err = api.list_posts().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);
    assert!(matches!(
        err,
        PostsError::Status { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
    ));

    let err = api.get_post_by_id(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);
}

#[tokio::test]
async fn test_closed_port_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .list_posts()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
}
