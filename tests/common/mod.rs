// Shared test harness: the full router running over in-memory repositories,
// driven in-process with tower's oneshot. No database, no sockets.
//
// Every repository fake counts trait calls, so a test can assert that a
// rejected request never reached the service layer.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, Response};
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use papyrus_api::auth::TokenManager;
use papyrus_api::models::{Author, Comment, Purchase, StoredFile, User};
use papyrus_api::repository::{
    AuthorRepository, CommentRepository, FileRepository, PurchaseRepository, RepositoryError,
    UserRepository,
};
use papyrus_api::routes;
use papyrus_api::services::{
    AuthorService, CommentService, FileService, PurchaseService, UserService,
};
use papyrus_api::state::AppState;

pub const SIGNING_KEY: &str = "integration-test-signing-key";

fn next_id<I: Iterator<Item = i64>>(ids: I) -> i64 {
    ids.max().unwrap_or(0) + 1
}

#[derive(Default)]
pub struct MemoryUsers {
    pub rows: Mutex<Vec<User>>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn create(&self, login: &str, password_hash: &str) -> Result<i64, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let id = next_id(rows.iter().map(|u| u.id));
        rows.push(User {
            id,
            login: login.to_string(),
            password_hash: password_hash.to_string(),
        });
        Ok(id)
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.login == login).cloned())
    }
}

#[derive(Default)]
pub struct MemoryAuthors {
    pub rows: Mutex<Vec<Author>>,
    pub calls: AtomicUsize,
}

impl MemoryAuthors {
    /// Insert a row directly, without counting as a repository call.
    pub fn seed(&self, name: &str) -> i64 {
        let mut rows = self.rows.lock().unwrap();
        let id = next_id(rows.iter().map(|a| a.id));
        rows.push(Author {
            id,
            name: name.to_string(),
        });
        id
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthors {
    async fn create(&self, name: &str) -> Result<i64, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.seed(name))
    }

    async fn get(&self, id: i64) -> Result<Option<Author>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Author>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(&self, id: i64, name: &str) -> Result<i64, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|a| a.id == id) {
            Some(author) => {
                author.name = name.to_string();
                Ok(id)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<i64, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        Ok(if rows.len() < before { id } else { 0 })
    }
}

#[derive(Default)]
pub struct MemoryFiles {
    pub rows: Mutex<Vec<StoredFile>>,
    pub calls: AtomicUsize,
}

impl MemoryFiles {
    pub fn seed(&self, author_id: i64, name: &str, price: i64, added_at: DateTime<Utc>) -> i64 {
        let mut rows = self.rows.lock().unwrap();
        let id = next_id(rows.iter().map(|f| f.id));
        rows.push(StoredFile {
            id,
            author_id,
            name: name.to_string(),
            price,
            added_at,
        });
        id
    }
}

#[async_trait]
impl FileRepository for MemoryFiles {
    async fn create(
        &self,
        author_id: i64,
        name: &str,
        price: i64,
        added_at: DateTime<Utc>,
    ) -> Result<i64, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.seed(author_id, name, price, added_at))
    }

    async fn get(&self, id: i64) -> Result<Option<StoredFile>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|f| f.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<StoredFile>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn by_author(&self, author_id: i64) -> Result<Vec<StoredFile>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|f| f.author_id == author_id).cloned().collect())
    }

    async fn update(&self, id: i64, name: &str, price: i64) -> Result<i64, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|f| f.id == id) {
            Some(file) => {
                file.name = name.to_string();
                file.price = price;
                Ok(id)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<i64, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|f| f.id != id);
        Ok(if rows.len() < before { id } else { 0 })
    }
}

#[derive(Default)]
pub struct MemoryPurchases {
    pub rows: Mutex<Vec<Purchase>>,
    pub calls: AtomicUsize,
}

impl MemoryPurchases {
    pub fn seed(&self, user_id: i64, file_id: i64, ordered_at: DateTime<Utc>) -> i64 {
        let mut rows = self.rows.lock().unwrap();
        let id = next_id(rows.iter().map(|p| p.id));
        rows.push(Purchase {
            id,
            user_id,
            file_id,
            ordered_at,
        });
        id
    }
}

#[async_trait]
impl PurchaseRepository for MemoryPurchases {
    async fn create(
        &self,
        user_id: i64,
        file_id: i64,
        ordered_at: DateTime<Utc>,
    ) -> Result<i64, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.seed(user_id, file_id, ordered_at))
    }

    async fn by_user(&self, user_id: i64) -> Result<Vec<Purchase>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|p| p.user_id == user_id).cloned().collect())
    }

    async fn between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Purchase>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|p| p.ordered_at >= from && p.ordered_at <= to)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryComments {
    pub rows: Mutex<Vec<Comment>>,
    pub calls: AtomicUsize,
}

impl MemoryComments {
    pub fn seed(&self, user_id: i64, file_id: i64, message: &str, posted_at: DateTime<Utc>) -> i64 {
        let mut rows = self.rows.lock().unwrap();
        let id = next_id(rows.iter().map(|c| c.id));
        rows.push(Comment {
            id,
            user_id,
            file_id,
            message: message.to_string(),
            posted_at,
        });
        id
    }
}

#[async_trait]
impl CommentRepository for MemoryComments {
    async fn create(
        &self,
        user_id: i64,
        file_id: i64,
        message: &str,
        posted_at: DateTime<Utc>,
    ) -> Result<i64, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.seed(user_id, file_id, message, posted_at))
    }

    async fn by_user(&self, user_id: i64) -> Result<Vec<Comment>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|c| c.user_id == user_id).cloned().collect())
    }

    async fn update(&self, id: i64, message: &str) -> Result<i64, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|c| c.id == id) {
            Some(comment) => {
                comment.message = message.to_string();
                Ok(id)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<i64, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(if rows.len() < before { id } else { 0 })
    }
}

/// The application wired to fakes, plus handles to inspect them.
pub struct TestApp {
    pub state: AppState,
    pub users: Arc<MemoryUsers>,
    pub authors: Arc<MemoryAuthors>,
    pub files: Arc<MemoryFiles>,
    pub purchases: Arc<MemoryPurchases>,
    pub comments: Arc<MemoryComments>,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(MemoryUsers::default());
        let authors = Arc::new(MemoryAuthors::default());
        let files = Arc::new(MemoryFiles::default());
        let purchases = Arc::new(MemoryPurchases::default());
        let comments = Arc::new(MemoryComments::default());

        let tokens = Arc::new(TokenManager::new(SIGNING_KEY, Duration::hours(1)).unwrap());
        let state = AppState::new(
            UserService::new(users.clone(), tokens.clone()),
            AuthorService::new(authors.clone()),
            FileService::new(files.clone()),
            PurchaseService::new(purchases.clone()),
            CommentService::new(comments.clone()),
            tokens,
        );

        Self {
            state,
            users,
            authors,
            files,
            purchases,
            comments,
        }
    }

    pub fn router(&self) -> Router {
        routes::app(self.state.clone())
    }

    /// A valid token for an arbitrary user id.
    pub fn token_for(&self, user_id: i64) -> String {
        self.state.tokens.issue(&user_id.to_string()).unwrap()
    }

    /// Signed with the right key, but expired beyond the decoder's leeway.
    pub fn expired_token_for(&self, user_id: i64) -> String {
        TokenManager::new(SIGNING_KEY, Duration::hours(-2))
            .unwrap()
            .issue(&user_id.to_string())
            .unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router().oneshot(request).await.unwrap()
    }
}

pub fn json_request(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: &Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// A request claiming to carry JSON, with a body that may not be any.
pub fn raw_json_request(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: &str,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn bare_request(method: Method, path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_body(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = read_body(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
