//! 评分实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub module_instance_professor_id: i64,
    pub rating: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::module_instance_professors::Entity",
        from = "Column::ModuleInstanceProfessorId",
        to = "super::module_instance_professors::Column::Id"
    )]
    ModuleInstanceProfessor,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::module_instance_professors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModuleInstanceProfessor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_rating(self) -> crate::models::ratings::entities::Rating {
        use crate::models::ratings::entities::Rating;
        use chrono::{DateTime, Utc};

        Rating {
            id: self.id,
            user_id: self.user_id,
            module_instance_professor_id: self.module_instance_professor_id,
            rating: self.rating,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
