use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（用户名或邮箱冲突时返回 Validation 错误）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 用户名或邮箱是否已被占用
    async fn user_exists(&self, username: &str, email: &str) -> Result<bool>;

    /// 课程目录方法
    async fn create_module(&self, module: CreateModuleRequest) -> Result<Module>;
    async fn create_professor(&self, professor: CreateProfessorRequest) -> Result<Professor>;
    async fn create_module_instance(
        &self,
        instance: CreateModuleInstanceRequest,
    ) -> Result<ModuleInstance>;
    // 指派教授讲授某开课实例
    async fn assign_professor(
        &self,
        module_instance_id: i64,
        professor_id: i64,
    ) -> Result<ModuleInstanceProfessor>;
    async fn count_professors(&self) -> Result<u64>;
    // 列出所有开课实例及授课教授，按课程代码、学年、学期排序
    async fn list_module_instances(&self) -> Result<Vec<ModuleInstanceListItem>>;
    async fn get_professor_by_code(&self, code: &str) -> Result<Option<Professor>>;
    async fn get_module_by_code(&self, code: &str) -> Result<Option<Module>>;
    // 按课程代码、学年、学期、教授代码定位授课关系
    async fn find_module_instance_professor(
        &self,
        module_code: &str,
        year: i32,
        semester: i32,
        professor_code: &str,
    ) -> Result<Option<ModuleInstanceProfessor>>;

    /// 评分方法
    // 每位教授的平均分，按教授代码排序
    async fn list_professor_averages(&self) -> Result<Vec<ProfessorAverage>>;
    // 某教授在某课程（任意学期）下的平均分
    async fn get_module_professor_average(
        &self,
        professor_id: i64,
        module_id: i64,
    ) -> Result<Option<f64>>;
    async fn get_rating_by_user_and_mip(
        &self,
        user_id: i64,
        module_instance_professor_id: i64,
    ) -> Result<Option<Rating>>;
    // 创建评分（重复评分时返回 Validation 错误）
    async fn create_rating(&self, rating: CreateRatingRequest) -> Result<Rating>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
