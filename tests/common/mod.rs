//! Local stand-in for the posts API.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use employee_posts::prelude::*;

/// User whose post listing answers 500.
pub const FAILING_USER: u64 = 7;
/// User whose post listing answers 200 with a body that is not JSON.
pub const MALFORMED_USER: u64 = 8;
/// User with posts but no profile, so authors cannot be resolved.
pub const GHOST_USER: u64 = 9;

pub struct FixtureServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FixtureServer {
    /// Requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }

    pub fn config(&self) -> AppConfig {
        AppConfig::default().with_base_url(self.base_url.clone())
    }
}

pub async fn spawn_fixture_server() -> FixtureServer {
    let hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
        .route("/users/:id/posts", get(list_user_posts))
        .route("/posts/:id/comments", get(list_post_comments))
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FixtureServer {
        base_url: format!("http://{addr}"),
        hits,
    }
}

/// Base URL of a port nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Leanne Graham".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
            },
        },
        User {
            id: 2,
            name: "Ervin Howell".to_string(),
            company: Company {
                name: "Deckow-Crist".to_string(),
                catch_phrase: "Proactive didactic contingency".to_string(),
            },
        },
    ]
}

pub fn posts() -> Vec<Post> {
    [(1, 1), (2, 1), (11, 2), (12, 2), (81, GHOST_USER)]
        .into_iter()
        .map(|(id, user_id)| Post {
            id,
            user_id,
            title: format!("title {id}"),
            body: format!("body {id}"),
        })
        .collect()
}

pub fn comments() -> Vec<Comment> {
    [(1, "Eliseo"), (1, "Jayne"), (11, "Hayden")]
        .into_iter()
        .map(|(post_id, name)| Comment {
            post_id,
            name: format!("{name} writes"),
            email: format!("{}@example.com", name.to_lowercase()),
            body: format!("{name} has thoughts"),
        })
        .collect()
}

async fn list_users(State(hits): State<Arc<AtomicUsize>>) -> Json<Vec<User>> {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(users())
}

async fn get_user(State(hits): State<Arc<AtomicUsize>>, Path(id): Path<u64>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    match users().into_iter().find(|user| user.id == id) {
        Some(user) => Json(user).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn list_user_posts(State(hits): State<Arc<AtomicUsize>>, Path(id): Path<u64>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    match id {
        FAILING_USER => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        MALFORMED_USER => (StatusCode::OK, "[{\"id\": 1,").into_response(),
        _ => {
            let posts: Vec<Post> = posts().into_iter().filter(|post| post.user_id == id).collect();
            Json(posts).into_response()
        }
    }
}

async fn list_post_comments(State(hits): State<Arc<AtomicUsize>>, Path(id): Path<u64>) -> Json<Vec<Comment>> {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(comments().into_iter().filter(|comment| comment.post_id == id).collect())
}
