//! 对象缓存层
//!
//! 通过 ctor 注册的插件机制选择后端：moka（进程内）或 redis。
//! JWT 中间件用它缓存已认证用户，学期查询用它缓存当前学期。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;

/// 缓存查询结果
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    // 后端不可用或值无法读取，调用方按未命中处理
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 声明并注册一个缓存后端插件
///
/// 在插件模块里调用，进程启动时自动注册到全局注册表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $wrapper:ty) => {
        #[ctor::ctor]
        fn register_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$wrapper>::new()
                            .map_err($crate::errors::AulaError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                        as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
