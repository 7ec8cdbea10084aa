//! 集成测试公共设施：内存 SQLite + Moka 会话缓存 + 演示数据

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use rateprofs::cache::ObjectCache;
use rateprofs::cache::object_cache::moka::MokaCacheWrapper;
use rateprofs::runtime::seed::seed_demo_data;
use rateprofs::storage::Storage;
use rateprofs::storage::sea_orm_storage::SeaOrmStorage;
use sea_orm::{ConnectOptions, Database};

pub const TEST_PASSWORD: &str = "correct-horse-battery";

pub struct TestState {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 空数据库，只跑迁移
pub async fn empty_state() -> TestState {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // 内存库每个连接各自独立，只保留一个连接
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("in-memory sqlite should open");
    let storage = SeaOrmStorage::from_connection(db)
        .await
        .expect("migrations should run");

    TestState {
        storage: Arc::new(storage),
        cache: Arc::new(MokaCacheWrapper::with_settings(1_000, 600)),
    }
}

/// 写入演示目录数据，`with_ratings` 时附带演示评分
pub async fn seeded_state(with_ratings: bool) -> TestState {
    let state = empty_state().await;
    let seeded = seed_demo_data(state.storage.as_ref(), with_ratings)
        .await
        .expect("demo data should seed");
    assert!(seeded);
    state
}

/// 用 state 构建完整的 App 并初始化测试服务
#[macro_export]
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.storage.clone()))
                .app_data(actix_web::web::Data::new($state.cache.clone()))
                .configure(rateprofs::configure_app),
        )
        .await
    };
}

/// 从响应中取会话 cookie
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|c| c.name() == "sessionid")
        .map(|c| c.into_owned())
}

pub async fn body_text<B>(response: ServiceResponse<B>) -> String
where
    B: actix_web::body::MessageBody,
{
    let bytes = actix_web::test::read_body(response).await;
    String::from_utf8_lossy(&bytes).into_owned()
}
