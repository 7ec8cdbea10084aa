//! 课程开课实例实体（某课程在某学年某学期的一次开设）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "module_instances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub module_id: i64,
    pub year: i32,
    pub semester: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::modules::Entity",
        from = "Column::ModuleId",
        to = "super::modules::Column::Id"
    )]
    Module,
    #[sea_orm(has_many = "super::module_instance_professors::Entity")]
    ModuleInstanceProfessors,
}

impl Related<super::modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<super::module_instance_professors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModuleInstanceProfessors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_module_instance(self) -> crate::models::catalog::entities::ModuleInstance {
        crate::models::catalog::entities::ModuleInstance {
            id: self.id,
            module_id: self.module_id,
            year: self.year,
            semester: self.semester,
        }
    }
}
