//! In-memory application fixture
//!
//! Each `TestApp` owns a fresh `MemoryStore`, so tests never share users or
//! posts. Requests go through `tower::ServiceExt::oneshot` on a clone of the
//! router, exercising the full middleware stack.

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use quillpost::backend::routes::create_router;
use quillpost::backend::server::{AppState, AuthConfig};
use quillpost::shared::Identity;
use serde_json::Value;
use tower::ServiceExt;

/// Signing secret used by every test app
pub const TEST_SECRET: &str = "integration-test-secret";

/// Lowest bcrypt cost, to keep tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub struct TestApp {
    router: Router,
    pub state: AppState,
}

/// Status, headers and decoded JSON body of a response
///
/// `body` is `Value::Null` when the response had no body.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// The `access_token=...` pair from `Set-Cookie`, ready for a `Cookie` header
    pub fn session_cookie(&self) -> Option<String> {
        self.set_cookie()
            .and_then(|cookie| cookie.split(';').next())
            .map(|pair| pair.trim().to_string())
    }

    /// Raw `Set-Cookie` header value
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// A registered user and the cookie their registration returned
#[derive(Debug, Clone)]
pub struct Session {
    pub identity: Identity,
    pub cookie: String,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::in_memory(&AuthConfig::new(TEST_SECRET, TEST_BCRYPT_COST))
            .expect("test bcrypt cost is valid");
        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    /// Send a request with an optional raw body and cookie
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        body: Option<&str>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let body = match body {
            Some(body) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(body.to_string())
            }
            None => Body::empty(),
        };

        self.dispatch(request.body(body).expect("valid test request"))
            .await
    }

    /// Run a prebuilt request through the router
    pub async fn dispatch(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON response body")
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body = body.map(|value| value.to_string());
        self.send_raw(method, uri, body.as_deref(), cookie).await
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, None, cookie).await
    }

    pub async fn post(&self, uri: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.send(Method::POST, uri, Some(body), cookie).await
    }

    pub async fn patch(&self, uri: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.send(Method::PATCH, uri, Some(body), cookie).await
    }

    pub async fn delete(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::DELETE, uri, None, cookie).await
    }

    /// Register a user and return their session
    pub async fn register(&self, username: &str, password: &str) -> Session {
        let response = self
            .post(
                "/api/auth/register",
                serde_json::json!({ "username": username, "password": password }),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "register {username}");

        Session {
            identity: serde_json::from_value(response.body.clone()).expect("identity body"),
            cookie: response.session_cookie().expect("session cookie"),
        }
    }

    /// Write a post as `session` and return the stored post body
    pub async fn write_post(&self, session: &Session, title: &str, tags: &[&str]) -> Value {
        let response = self
            .post(
                "/api/posts",
                serde_json::json!({ "title": title, "body": format!("{title} body"), "tags": tags }),
                Some(&session.cookie),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "write {title}");
        response.body
    }
}
