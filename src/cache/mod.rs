//! 对象缓存层
//!
//! 以插件方式注册缓存后端（Moka 内存缓存 / Redis），目前用于保存服务端会话。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;

use crate::errors::Result;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    /// 读取原始字符串值
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// 写入原始字符串值，ttl 为 0 时使用默认 TTL（秒）
    async fn insert_raw(&self, key: String, value: String, ttl: u64) -> Result<()>;
    /// 删除键
    async fn remove(&self, key: &str);
}

/// 声明缓存插件
///
/// 生成 `register_plugin()`，将后端构造函数以给定名称注册到全局插件表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        pub fn register_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| -> $crate::cache::register::BoxedObjectCacheFuture {
                    Box::pin(async {
                        let cache = <$ty>::new()
                            .map_err($crate::errors::RatingsError::cache_connection)?;
                        Ok::<Box<dyn $crate::cache::ObjectCache>, $crate::errors::RatingsError>(
                            Box::new(cache),
                        )
                    })
                }),
            );
        }
    };
}
