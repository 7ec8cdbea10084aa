use super::{SeaOrmStorage, is_unique_violation};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{RatingsError, Result};
use crate::models::common::messages::USER_EXISTS;
use crate::models::users::{entities::User, requests::CreateUserRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                RatingsError::validation(USER_EXISTS)
            } else {
                RatingsError::database_operation(format!("创建用户失败: {e}"))
            }
        })?;

        Ok(result.into_user())
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 用户名或邮箱是否已存在
    pub async fn user_exists_impl(&self, username: &str, email: &str) -> Result<bool> {
        let count = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(username))
                    .add(Column::Email.eq(email)),
            )
            .count(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(count > 0)
    }
}
