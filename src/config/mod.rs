//! 配置管理
//!
//! 加载顺序：内置默认值 -> config.toml -> config.{APP_ENV}.toml -> RATEPROFS_* 环境变量 -> 单独的环境变量覆盖。

#[path = "impl.rs"]
mod loader;
mod structs;

pub use structs::*;
