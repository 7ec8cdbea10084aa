use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 内置默认值，保证没有配置文件时也能启动
fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("app.system_name", "rateprofs")?
        .set_default("app.environment", "development")?
        .set_default("app.log_level", "info")?
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8000_i64)?
        .set_default("server.unix_socket_path", "")?
        .set_default("server.workers", 0_i64)?
        .set_default("server.max_workers", 16_i64)?
        .set_default("server.timeouts.client_request", 5000_i64)?
        .set_default("server.timeouts.client_disconnect", 1000_i64)?
        .set_default("server.timeouts.keep_alive", 30_i64)?
        .set_default("server.limits.max_payload_size", 65_536_i64)?
        .set_default("database.url", "rateprofs.db")?
        .set_default("database.pool_size", 8_i64)?
        .set_default("database.timeout", 10_i64)?
        .set_default("cache.type", "moka")?
        .set_default("cache.default_ttl", 1_209_600_i64)?
        .set_default("cache.redis.url", "redis://127.0.0.1:6379")?
        .set_default("cache.redis.key_prefix", "rateprofs:")?
        .set_default("cache.memory.max_capacity", 100_000_i64)?
        .set_default("cors.allowed_origins", Vec::<String>::new())?
        .set_default("cors.max_age", 3600_i64)?
        .set_default("session.cookie_name", "sessionid")?
        .set_default("session.ttl", 1_209_600_i64)?
        .set_default("session.secure_cookie", false)?
        .set_default("argon2.memory_cost", 19_456_i64)?
        .set_default("argon2.time_cost", 2_i64)?
        .set_default("argon2.parallelism", 1_i64)?
        .set_default("seed.demo_data", false)?
        .set_default("seed.with_ratings", false)
}

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = with_defaults(Config::builder())?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("RATEPROFS")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从常用环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("cache.redis.url", std::env::var("REDIS_URL").ok())?
            .set_override_option("session.ttl", std::env::var("SESSION_TTL").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config: AppConfig = with_defaults(Config::builder())
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .expect("defaults should form a complete config");

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.cache.cache_type, "moka");
        assert_eq!(config.session.cookie_name, "sessionid");
        assert!(!config.seed.demo_data);
        assert!(!config.session.secure_cookie);
        assert!(config.is_development());
        assert_eq!(config.server_bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_example_config_seeds_catalog() {
        let config: AppConfig = with_defaults(Config::builder())
            .map(|b| {
                b.add_source(File::from_str(
                    include_str!("../../config.example.toml"),
                    config::FileFormat::Toml,
                ))
            })
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .expect("example config should deserialize");

        assert!(config.seed.demo_data);
        assert!(!config.session.secure_cookie);
        assert_eq!(config.session.cookie_name, "sessionid");
    }
}
