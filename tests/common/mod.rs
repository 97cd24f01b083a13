#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, header};
use axum_test::TestServer;
use chrono::Utc;
use dal_links::domain::entities::{Link, LinkFields, NewLink};
use dal_links::domain::hooks::HookChain;
use dal_links::domain::repositories::LinkRepository;
use dal_links::error::AppError;
use dal_links::routes::{app_router, router};
use dal_links::state::AppState;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Link store kept in memory, with the same uniqueness rule as the
/// `links_subdomain_name_key` constraint.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    next_id: Mutex<i64>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn taken(links: &[Link], fields: &LinkFields, except: Option<i64>) -> bool {
        links.iter().any(|l| {
            Some(l.id) != except && l.subdomain == fields.subdomain && l.name == fields.name
        })
    }

    fn conflict() -> AppError {
        AppError::conflict(
            "A link with this subdomain and name already exists",
            json!({ "constraint": "links_subdomain_name_key" }),
        )
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, fields: LinkFields) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();
        if Self::taken(&links, &fields, None) {
            return Err(Self::conflict());
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let now = Utc::now();
        let link = Link {
            id: *next_id,
            name: fields.name,
            subdomain: fields.subdomain,
            deep_link: fields.deep_link,
            branded_link: fields.branded_link,
            created_at: now,
            updated_at: now,
        };
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }

    async fn find_by_name_and_subdomain(
        &self,
        name: &str,
        subdomain: &str,
    ) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.name == name && l.subdomain == subdomain)
            .cloned())
    }

    async fn list(
        &self,
        offset: i64,
        limit: i64,
        subdomain: Option<String>,
    ) -> Result<Vec<Link>, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links
            .iter()
            .rev()
            .filter(|l| subdomain.as_ref().is_none_or(|s| &l.subdomain == s))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, subdomain: Option<String>) -> Result<i64, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links
            .iter()
            .filter(|l| subdomain.as_ref().is_none_or(|s| &l.subdomain == s))
            .count() as i64)
    }

    async fn update(&self, id: i64, fields: LinkFields) -> Result<Option<Link>, AppError> {
        let mut links = self.links.lock().unwrap();
        if Self::taken(&links, &fields, Some(id)) {
            return Err(Self::conflict());
        }

        let Some(link) = links.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        link.name = fields.name;
        link.subdomain = fields.subdomain;
        link.deep_link = fields.deep_link;
        link.branded_link = fields.branded_link;
        link.updated_at = Utc::now();

        Ok(Some(link.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| l.id != id);
        Ok(links.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Link store whose every call fails, as an unreachable database would.
pub struct FailingLinkRepository;

fn unavailable() -> AppError {
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn create(&self, _fields: LinkFields) -> Result<Link, AppError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Link>, AppError> {
        Err(unavailable())
    }

    async fn find_by_name_and_subdomain(
        &self,
        _name: &str,
        _subdomain: &str,
    ) -> Result<Option<Link>, AppError> {
        Err(unavailable())
    }

    async fn list(
        &self,
        _offset: i64,
        _limit: i64,
        _subdomain: Option<String>,
    ) -> Result<Vec<Link>, AppError> {
        Err(unavailable())
    }

    async fn count(&self, _subdomain: Option<String>) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn update(&self, _id: i64, _fields: LinkFields) -> Result<Option<Link>, AppError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: i64) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

pub fn create_test_state(repository: Arc<dyn LinkRepository>) -> AppState {
    AppState::new(repository, HookChain::standard("dal.io"))
}

/// Test server over the full router backed by a fresh in-memory store.
pub fn make_server() -> (TestServer, AppState) {
    let state = create_test_state(Arc::new(InMemoryLinkRepository::new()));
    let server = TestServer::new(router(state.clone())).unwrap();
    (server, state)
}

/// Test server whose link store is down.
pub fn make_failing_server() -> TestServer {
    let state = create_test_state(Arc::new(FailingLinkRepository));
    TestServer::new(router(state)).unwrap()
}

pub async fn create_test_link(state: &AppState, subdomain: &str, name: &str, deep_link: &str) -> Link {
    state
        .link_service
        .create_link(NewLink {
            name: name.to_string(),
            subdomain: subdomain.to_string(),
            deep_link: deep_link.to_string(),
        })
        .await
        .unwrap()
}

/// Sends a bodiless request through [`app_router`], the service the server
/// actually runs (trailing-slash normalization included).
pub async fn send_to_app(state: &AppState, method: &str, path: &str, host: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header(header::HOST, host)
        .body(Body::empty())
        .unwrap();

    app_router(state.clone()).oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
