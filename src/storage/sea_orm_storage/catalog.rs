//! 课程目录存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::module_instance_professors::{
    ActiveModel as AssignmentActiveModel, Column as AssignmentColumn,
    Entity as ModuleInstanceProfessors, Relation as AssignmentRelation,
};
use crate::entity::module_instances::{
    ActiveModel as InstanceActiveModel, Column as InstanceColumn, Entity as ModuleInstances,
    Relation as InstanceRelation,
};
use crate::entity::modules::{
    ActiveModel as ModuleActiveModel, Column as ModuleColumn, Entity as Modules,
};
use crate::entity::professors::{
    ActiveModel as ProfessorActiveModel, Column as ProfessorColumn, Entity as Professors,
};
use crate::errors::{RatingsError, Result};
use crate::models::catalog::{
    entities::{Module, ModuleInstance, ModuleInstanceProfessor, Professor},
    requests::{CreateModuleInstanceRequest, CreateModuleRequest, CreateProfessorRequest},
    responses::{ModuleInstanceListItem, TaughtBy},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_module_impl(&self, req: CreateModuleRequest) -> Result<Module> {
        let model = ModuleActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_module())
    }

    /// 创建教授
    pub async fn create_professor_impl(&self, req: CreateProfessorRequest) -> Result<Professor> {
        let model = ProfessorActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("创建教授失败: {e}")))?;

        Ok(result.into_professor())
    }

    /// 创建开课实例
    pub async fn create_module_instance_impl(
        &self,
        req: CreateModuleInstanceRequest,
    ) -> Result<ModuleInstance> {
        if !(1..=2).contains(&req.semester) {
            return Err(RatingsError::validation(format!(
                "Semester must be 1 or 2, got {}",
                req.semester
            )));
        }

        let model = InstanceActiveModel {
            module_id: Set(req.module_id),
            year: Set(req.year),
            semester: Set(req.semester),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("创建开课实例失败: {e}")))?;

        Ok(result.into_module_instance())
    }

    /// 指派授课教授
    pub async fn assign_professor_impl(
        &self,
        module_instance_id: i64,
        professor_id: i64,
    ) -> Result<ModuleInstanceProfessor> {
        let model = AssignmentActiveModel {
            module_instance_id: Set(module_instance_id),
            professor_id: Set(professor_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("指派授课教授失败: {e}")))?;

        Ok(result.into_module_instance_professor())
    }

    /// 教授总数
    pub async fn count_professors_impl(&self) -> Result<u64> {
        Professors::find()
            .count(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("查询教授总数失败: {e}")))
    }

    /// 列出开课实例及授课教授
    pub async fn list_module_instances_impl(&self) -> Result<Vec<ModuleInstanceListItem>> {
        let instances = ModuleInstances::find()
            .find_also_related(Modules)
            .order_by_asc(ModuleColumn::Code)
            .order_by_asc(InstanceColumn::Year)
            .order_by_asc(InstanceColumn::Semester)
            .all(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("查询开课实例失败: {e}")))?;

        if instances.is_empty() {
            return Ok(Vec::new());
        }

        let assignments = ModuleInstanceProfessors::find()
            .find_also_related(Professors)
            .order_by_asc(ProfessorColumn::Code)
            .all(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("查询授课教授失败: {e}")))?;

        // 按开课实例分组
        let mut taught_by: HashMap<i64, Vec<TaughtBy>> = HashMap::new();
        for (assignment, professor) in assignments {
            if let Some(professor) = professor {
                taught_by
                    .entry(assignment.module_instance_id)
                    .or_default()
                    .push(TaughtBy {
                        professor_code: professor.code,
                        professor_name: professor.name,
                    });
            }
        }

        let items = instances
            .into_iter()
            .filter_map(|(instance, module)| {
                let module = module?;
                Some(ModuleInstanceListItem {
                    module_code: module.code,
                    module_name: module.name,
                    year: instance.year,
                    semester: instance.semester,
                    taught_by: taught_by.remove(&instance.id).unwrap_or_default(),
                })
            })
            .collect();

        Ok(items)
    }

    /// 通过代码获取教授
    pub async fn get_professor_by_code_impl(&self, code: &str) -> Result<Option<Professor>> {
        let result = Professors::find()
            .filter(ProfessorColumn::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("查询教授失败: {e}")))?;

        Ok(result.map(|m| m.into_professor()))
    }

    /// 通过代码获取课程
    pub async fn get_module_by_code_impl(&self, code: &str) -> Result<Option<Module>> {
        let result = Modules::find()
            .filter(ModuleColumn::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_module()))
    }

    /// 定位授课关系
    pub async fn find_module_instance_professor_impl(
        &self,
        module_code: &str,
        year: i32,
        semester: i32,
        professor_code: &str,
    ) -> Result<Option<ModuleInstanceProfessor>> {
        let result = ModuleInstanceProfessors::find()
            .join(JoinType::InnerJoin, AssignmentRelation::ModuleInstance.def())
            .join(JoinType::InnerJoin, InstanceRelation::Module.def())
            .join(JoinType::InnerJoin, AssignmentRelation::Professor.def())
            .filter(ModuleColumn::Code.eq(module_code))
            .filter(InstanceColumn::Year.eq(year))
            .filter(InstanceColumn::Semester.eq(semester))
            .filter(ProfessorColumn::Code.eq(professor_code))
            .order_by_asc(AssignmentColumn::Id)
            .one(&self.db)
            .await
            .map_err(|e| RatingsError::database_operation(format!("查询授课关系失败: {e}")))?;

        Ok(result.map(|m| m.into_module_instance_professor()))
    }
}
