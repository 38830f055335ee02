//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use fileshelf_api::{AppState, build_app};
use fileshelf_cache::CacheManager;
use fileshelf_cache::memory::MemoryCacheProvider;
use fileshelf_core::config::AppConfig;
use fileshelf_core::types::{FileId, UserId};
use fileshelf_database::FileStore;
use fileshelf_database::memory::MemoryFileRepository;
use fileshelf_entity::file::{FileDocument, FileKind, ParentRef};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing document store, for seeding
    pub files: MemoryFileRepository,
    /// Cache shared with the "Auth Service", for seeding sessions
    pub sessions: MemoryCacheProvider,
    /// Application config
    pub config: AppConfig,
}

/// A decoded test response
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// JSON body (`Null` when empty)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over empty in-memory backends
    pub async fn new() -> Self {
        let config = AppConfig::default();

        let sessions =
            MemoryCacheProvider::new(&config.cache.memory, config.cache.default_ttl_seconds);
        let cache = Arc::new(CacheManager::from_provider(Arc::new(sessions.clone())));
        let files = MemoryFileRepository::new();
        let store = FileStore::from_repository(Arc::new(files.clone()));

        let state = AppState::new(config.clone(), store, cache);
        let router = build_app(state);

        Self {
            router,
            files,
            sessions,
            config,
        }
    }

    /// Register a session for `user` the way the Auth Service would and return its token
    pub async fn sign_in(&self, user: UserId) -> String {
        let token = format!("session-{user}");
        let key = format!("{}{token}", self.config.auth.token_key_prefix);
        self.sessions.insert(&key, &user.to_string()).await;
        token
    }

    /// Bind `token` to an arbitrary raw value
    pub async fn bind_token(&self, token: &str, raw_user_id: &str) {
        let key = format!("{}{token}", self.config.auth.token_key_prefix);
        self.sessions.insert(&key, raw_user_id).await;
    }

    /// Store a file document
    pub async fn insert_file(&self, owner: UserId, parent: ParentRef, name: &str) -> FileDocument {
        self.insert(owner, parent, name, FileKind::File).await
    }

    /// Store a folder document
    pub async fn insert_folder(&self, owner: UserId, parent: ParentRef, name: &str) -> FileDocument {
        self.insert(owner, parent, name, FileKind::Folder).await
    }

    async fn insert(
        &self,
        owner: UserId,
        parent: ParentRef,
        name: &str,
        kind: FileKind,
    ) -> FileDocument {
        let doc = FileDocument {
            id: FileId::random(),
            user_id: owner,
            name: name.to_string(),
            kind,
            is_public: false,
            parent_id: parent,
            extra: Default::default(),
        };
        self.store(doc).await
    }

    /// Store an already-built document
    pub async fn store(&self, doc: FileDocument) -> FileDocument {
        self.files.insert(doc.clone()).await;
        doc
    }

    /// Send a GET request, optionally with a session token
    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.get_with_header(uri, token.map(|t| ("x-token", t)))
            .await
    }

    /// Send a GET request with an optional extra header
    pub async fn get_with_header(&self, uri: &str, header: Option<(&str, &str)>) -> TestResponse {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some((name, value)) = header {
            builder = builder.header(name, value);
        }
        let request = builder.body(Body::empty()).expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("readable body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Names of the documents in a JSON array body
pub fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|doc| doc["name"].as_str().expect("name").to_string())
        .collect()
}
