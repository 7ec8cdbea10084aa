mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use async_trait::async_trait;
use common::{TEST_PASSWORD, TestState, body_text, empty_state, session_cookie};
use rateprofs::cache::{CacheResult, ObjectCache};
use rateprofs::errors::{GENERIC_FAILURE_MESSAGE, RatingsError};

/// 写入总是失败的会话存储，模拟 Redis 不可用
struct UnwritableCache;

#[async_trait]
impl ObjectCache for UnwritableCache {
    async fn get_raw(&self, _key: &str) -> CacheResult<String> {
        CacheResult::NotFound
    }

    async fn insert_raw(
        &self,
        _key: String,
        _value: String,
        _ttl: u64,
    ) -> rateprofs::errors::Result<()> {
        Err(RatingsError::cache_connection("connection refused"))
    }

    async fn remove(&self, _key: &str) {}
}

fn register_form<'a>(username: &'a str, email: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("username", username),
        ("email", email),
        ("password", TEST_PASSWORD),
    ]
}

#[actix_web::test]
async fn register_then_duplicate_is_rejected() {
    let state = empty_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_form(register_form("alice", "alice@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "Success");

    // 同用户名
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_form(register_form("alice", "other@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_text(resp).await,
        "A user with the provided credentials already exists"
    );

    // 同邮箱
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_form(register_form("bob", "alice@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn register_requires_all_fields() {
    let state = empty_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_form(vec![("username", "alice"), ("email", "alice@example.com")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_text(resp).await, "Missing required fields");

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_form(vec![
            ("username", "alice"),
            ("email", "alice@example.com"),
            ("password", ""),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn login_and_logout_cycle() {
    let state = empty_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_form(register_form("alice", "alice@example.com"))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    // 错误密码
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_form(vec![("username", "alice"), ("password", "wrong")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(session_cookie(&resp).is_none());
    assert_eq!(body_text(resp).await, "The username or password is incorrect");

    // 未知用户与错误密码返回相同结果
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_form(vec![("username", "nobody"), ("password", TEST_PASSWORD)])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_form(vec![("username", "alice"), ("password", TEST_PASSWORD)])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp).expect("login should set a session cookie");
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));

    let req = test::TestRequest::post()
        .uri("/api/logout")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "Success");

    // 会话已销毁，旧 cookie 失效
    let req = test::TestRequest::post()
        .uri("/api/logout")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn logout_without_session_is_forbidden() {
    let state = empty_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::post().uri("/api/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_text(resp).await, "User is not authenticated");
}

#[actix_web::test]
async fn wrong_method_is_rejected() {
    let state = empty_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/login").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn login_fails_when_session_cannot_be_stored() {
    let state = empty_state().await;
    let state = TestState {
        storage: state.storage,
        cache: Arc::new(UnwritableCache),
    };
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_form(register_form("alice", "alice@example.com"))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_form(vec![("username", "alice"), ("password", TEST_PASSWORD)])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(session_cookie(&resp).is_none());
    assert_eq!(body_text(resp).await, GENERIC_FAILURE_MESSAGE);
}
