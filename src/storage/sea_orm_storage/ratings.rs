//! 评分存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, is_unique_violation};
use crate::entity::module_instance_professors::{
    Column as AssignmentColumn, Relation as AssignmentRelation,
};
use crate::entity::module_instances::Column as InstanceColumn;
use crate::entity::professors::{Column as ProfessorColumn, Entity as Professors};
use crate::entity::ratings::{ActiveModel, Column, Entity as Ratings, Relation};
use crate::errors::{RatingsError, Result};
use crate::models::common::messages::ALREADY_RATED;
use crate::models::ratings::{
    entities::{ProfessorAverage, Rating},
    requests::CreateRatingRequest,
};
use sea_orm::sea_query::{Alias, Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbBackend, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// AVG(rating)，统一转换为双精度浮点
    fn average_rating_expr(&self) -> Expr {
        let target = match self.db.get_database_backend() {
            DbBackend::MySql => "DOUBLE",
            DbBackend::Postgres => "DOUBLE PRECISION",
            _ => "REAL",
        };
        Expr::expr(Func::cast_as(
            Func::avg(Expr::col((Ratings, Column::Rating))),
            Alias::new(target),
        ))
    }

    /// 每位教授的平均分
    pub async fn list_professor_averages_impl(&self) -> Result<Vec<ProfessorAverage>> {
        let professors = Professors::find()
            .order_by_asc(ProfessorColumn::Code)
            .all(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("查询教授失败: {e}")))?;

        let averages: HashMap<i64, Option<f64>> = Ratings::find()
            .select_only()
            .column(AssignmentColumn::ProfessorId)
            .column_as(self.average_rating_expr(), "average_rating")
            .join(JoinType::InnerJoin, Relation::ModuleInstanceProfessor.def())
            .group_by(AssignmentColumn::ProfessorId)
            .into_tuple::<(i64, Option<f64>)>()
            .all(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("统计教授平均分失败: {e}")))?
            .into_iter()
            .collect();

        Ok(professors
            .into_iter()
            .map(|professor| ProfessorAverage {
                average: averages.get(&professor.id).copied().flatten(),
                professor: professor.into_professor(),
            })
            .collect())
    }

    /// 某教授在某课程下的平均分
    pub async fn get_module_professor_average_impl(
        &self,
        professor_id: i64,
        module_id: i64,
    ) -> Result<Option<f64>> {
        let average = Ratings::find()
            .select_only()
            .column_as(self.average_rating_expr(), "average_rating")
            .join(JoinType::InnerJoin, Relation::ModuleInstanceProfessor.def())
            .join(JoinType::InnerJoin, AssignmentRelation::ModuleInstance.def())
            .filter(AssignmentColumn::ProfessorId.eq(professor_id))
            .filter(InstanceColumn::ModuleId.eq(module_id))
            .into_tuple::<Option<f64>>()
            .one(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("统计课程平均分失败: {e}")))?
            .flatten();

        Ok(average)
    }

    /// 查询用户对某授课关系的评分
    pub async fn get_rating_by_user_and_mip_impl(
        &self,
        user_id: i64,
        module_instance_professor_id: i64,
    ) -> Result<Option<Rating>> {
        let result = Ratings::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ModuleInstanceProfessorId.eq(module_instance_professor_id))
            .one(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("查询评分失败: {e}")))?;

        Ok(result.map(|m| m.into_rating()))
    }

    /// 创建评分，唯一索引兜底并发重复提交
    pub async fn create_rating_impl(&self, req: CreateRatingRequest) -> Result<Rating> {
        let model = ActiveModel {
            user_id: Set(req.user_id),
            module_instance_professor_id: Set(req.module_instance_professor_id),
            rating: Set(req.rating),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                RatingsError::validation(ALREADY_RATED)
            } else {
                RatingsError::database_operation(format!("创建评分失败: {e}"))
            }
        })?;

        Ok(result.into_rating())
    }
}
