//! rateprofs - 教授评分服务后端
//!
//! 基于 Actix Web 与 SeaORM 构建，学生登录后可浏览开课实例并为授课教授评分。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis），存放服务端会话
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 会话中间件与提取器
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理与演示数据
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;

use actix_web::web;

use crate::utils::{form_error_handler, query_error_handler};

/// 注册表单/查询解析配置和全部 API 路由
///
/// 服务器与集成测试共用，存储与缓存由调用方通过 `app_data` 注入。
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .configure(routes::configure_api_routes);
}
