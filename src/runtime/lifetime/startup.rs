use crate::cache::object_cache::register_builtin_plugins;
use crate::cache::{ObjectCache, register::create_object_cache};
use crate::config::AppConfig;
use crate::errors::{RatingsError, Result};
use crate::runtime::seed::seed_demo_data;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 按名称构造缓存，失败时返回 None
async fn try_cache_backend(name: &str) -> Option<Arc<dyn ObjectCache>> {
    match create_object_cache(name).await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", name);
            Some(Arc::from(cache))
        }
        Err(e) => {
            warn!("Failed to create {} cache: {}", name, e);
            None
        }
    }
}

/// 创建缓存实例
async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);

    if let Some(cache) = try_cache_backend(cache_type).await {
        return Ok(cache);
    }

    // 配置的后端不可用时回退到内存缓存
    if cache_type != "moka" {
        warn!("Falling back to memory cache");
        if let Some(cache) = try_cache_backend("moka").await {
            return Ok(cache);
        }
    }

    Err(RatingsError::cache_connection(format!(
        "No cache backend available (tried: {cache_type})"
    )))
}

/// 按配置写入演示数据，失败只记录日志
async fn seed_if_enabled(storage: &Arc<dyn Storage>) {
    let seed = &AppConfig::get().seed;
    if !seed.demo_data {
        // 没有管理接口，目录为空时 list/view 只会返回 404
        match storage.count_professors().await {
            Ok(0) => warn!(
                "Catalog is empty and seed.demo_data is disabled: /api/list and /api/view will return 404 until data is loaded"
            ),
            Ok(_) => debug!("Demo seed disabled"),
            Err(e) => warn!("Failed to inspect catalog: {}", e),
        }
        return;
    }

    match seed_demo_data(storage.as_ref(), seed.with_ratings).await {
        Ok(true) => warn!("Demo data seeded"),
        Ok(false) => debug!("Demo data already present"),
        Err(e) => warn!("Failed to seed demo data: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 包括存储、缓存和演示数据
pub async fn prepare_server_startup() -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    register_builtin_plugins();
    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_if_enabled(&storage).await;

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}
