//! In-memory backend shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use fsbrowse_core::{
    ApiError, ApiResponse, Backend, ClientError, Credentials, EntryKind, FileOrDir, UserSession,
};
use tokio::sync::oneshot;

pub type Reply<T> = Result<ApiResponse<T>, ClientError>;

/// Backend whose responses are scripted up front.
///
/// Directory listings are delivered through oneshot channels so a test can
/// decide the order in which concurrent requests resolve.
#[derive(Default)]
pub struct ScriptedBackend {
    me: Mutex<VecDeque<Reply<UserSession>>>,
    login: Mutex<VecDeque<Reply<UserSession>>>,
    logout: Mutex<VecDeque<Result<(), ClientError>>>,
    listings: Mutex<HashMap<String, oneshot::Receiver<Reply<FileOrDir>>>>,
    login_attempts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_me(&self, reply: Reply<UserSession>) {
        self.me.lock().unwrap().push_back(reply);
    }

    pub fn push_login(&self, reply: Reply<UserSession>) {
        self.login.lock().unwrap().push_back(reply);
    }

    pub fn push_logout(&self, reply: Result<(), ClientError>) {
        self.logout.lock().unwrap().push_back(reply);
    }

    /// Register a pending listing for `path`; send on the returned channel
    /// to resolve it.
    pub fn expect_listing(&self, path: &str) -> oneshot::Sender<Reply<FileOrDir>> {
        let (tx, rx) = oneshot::channel();
        self.listings.lock().unwrap().insert(path.to_string(), rx);
        tx
    }

    /// Usernames submitted to the login endpoint, in order.
    pub fn login_attempts(&self) -> Vec<String> {
        self.login_attempts.lock().unwrap().clone()
    }
}

impl Backend for ScriptedBackend {
    async fn me(&self) -> Reply<UserSession> {
        self.me.lock().unwrap().pop_front().expect("unexpected me request")
    }

    async fn login(&self, credentials: &Credentials) -> Reply<UserSession> {
        self.login_attempts
            .lock()
            .unwrap()
            .push(credentials.username.clone());
        self.login
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected login request")
    }

    async fn logout(&self) -> Result<(), ClientError> {
        self.logout
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected logout request")
    }

    async fn list_directory(&self, path: &str) -> Reply<FileOrDir> {
        let rx = self
            .listings
            .lock()
            .unwrap()
            .remove(path)
            .unwrap_or_else(|| panic!("unexpected listing request for {path}"));
        rx.await
            .map_err(|_| ClientError::Network("request dropped".to_string()))?
    }
}

pub fn session(username: &str, expires: &str) -> UserSession {
    UserSession {
        username: username.to_string(),
        expires: expires.parse().unwrap(),
    }
}

pub fn error_reply<T>(title: &str, detail: Option<&str>) -> Reply<T> {
    Ok(ApiResponse::error(ApiError::new(
        title,
        detail.map(str::to_string),
    )))
}

pub fn file(name: &str, size: u64) -> FileOrDir {
    FileOrDir {
        name: name.to_string(),
        kind: EntryKind::File,
        size,
        modified: "2024-01-01T00:00:00Z".to_string(),
        contents: None,
    }
}

pub fn directory(name: &str, children: Vec<FileOrDir>) -> FileOrDir {
    FileOrDir {
        name: name.to_string(),
        kind: EntryKind::Dir,
        size: children.len() as u64,
        modified: "2024-01-01T00:00:00Z".to_string(),
        contents: Some(children),
    }
}
