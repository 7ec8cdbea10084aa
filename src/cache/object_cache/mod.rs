pub mod moka;
pub mod redis;

use std::sync::Once;

static REGISTER_BUILTIN: Once = Once::new();

/// 注册内置缓存后端（可重复调用）
pub fn register_builtin_plugins() {
    REGISTER_BUILTIN.call_once(|| {
        moka::register_plugin();
        redis::register_plugin();
    });
}
