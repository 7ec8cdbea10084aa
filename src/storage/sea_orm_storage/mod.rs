//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod catalog;
mod ratings;
mod users;

use crate::config::AppConfig;
use crate::errors::{RatingsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self::from_connection(db).await?;
        info!("SeaORM 存储初始化完成，数据库: {}", db_url);
        Ok(storage)
    }

    /// 基于已有连接创建存储并运行迁移
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| RatingsError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| RatingsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true)
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| RatingsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| RatingsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(RatingsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 是否为唯一约束冲突
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// Storage trait 实现
use crate::models::{
    catalog::{
        entities::{Module, ModuleInstance, ModuleInstanceProfessor, Professor},
        requests::{CreateModuleInstanceRequest, CreateModuleRequest, CreateProfessorRequest},
        responses::ModuleInstanceListItem,
    },
    ratings::{
        entities::{ProfessorAverage, Rating},
        requests::CreateRatingRequest,
    },
    users::{entities::User, requests::CreateUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn user_exists(&self, username: &str, email: &str) -> Result<bool> {
        self.user_exists_impl(username, email).await
    }

    // 课程目录模块
    async fn create_module(&self, module: CreateModuleRequest) -> Result<Module> {
        self.create_module_impl(module).await
    }

    async fn create_professor(&self, professor: CreateProfessorRequest) -> Result<Professor> {
        self.create_professor_impl(professor).await
    }

    async fn create_module_instance(
        &self,
        instance: CreateModuleInstanceRequest,
    ) -> Result<ModuleInstance> {
        self.create_module_instance_impl(instance).await
    }

    async fn assign_professor(
        &self,
        module_instance_id: i64,
        professor_id: i64,
    ) -> Result<ModuleInstanceProfessor> {
        self.assign_professor_impl(module_instance_id, professor_id)
            .await
    }

    async fn count_professors(&self) -> Result<u64> {
        self.count_professors_impl().await
    }

    async fn list_module_instances(&self) -> Result<Vec<ModuleInstanceListItem>> {
        self.list_module_instances_impl().await
    }

    async fn get_professor_by_code(&self, code: &str) -> Result<Option<Professor>> {
        self.get_professor_by_code_impl(code).await
    }

    async fn get_module_by_code(&self, code: &str) -> Result<Option<Module>> {
        self.get_module_by_code_impl(code).await
    }

    async fn find_module_instance_professor(
        &self,
        module_code: &str,
        year: i32,
        semester: i32,
        professor_code: &str,
    ) -> Result<Option<ModuleInstanceProfessor>> {
        self.find_module_instance_professor_impl(module_code, year, semester, professor_code)
            .await
    }

    // 评分模块
    async fn list_professor_averages(&self) -> Result<Vec<ProfessorAverage>> {
        self.list_professor_averages_impl().await
    }

    async fn get_module_professor_average(
        &self,
        professor_id: i64,
        module_id: i64,
    ) -> Result<Option<f64>> {
        self.get_module_professor_average_impl(professor_id, module_id)
            .await
    }

    async fn get_rating_by_user_and_mip(
        &self,
        user_id: i64,
        module_instance_professor_id: i64,
    ) -> Result<Option<Rating>> {
        self.get_rating_by_user_and_mip_impl(user_id, module_instance_professor_id)
            .await
    }

    async fn create_rating(&self, rating: CreateRatingRequest) -> Result<Rating> {
        self.create_rating_impl(rating).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("rateprofs.db").ok(),
            Some("sqlite://rateprofs.db?mode=rwc".to_string())
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").ok(),
            Some("sqlite::memory:".to_string())
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/db").ok(),
            Some("postgres://u:p@localhost/db".to_string())
        );

        let err = SeaOrmStorage::build_database_url("ftp://nowhere");
        assert!(matches!(err, Err(RatingsError::DatabaseConfig(_))));
    }
}
