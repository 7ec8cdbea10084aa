//! 开课实例与授课教授的关联实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "module_instance_professors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub module_instance_id: i64,
    pub professor_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::module_instances::Entity",
        from = "Column::ModuleInstanceId",
        to = "super::module_instances::Column::Id"
    )]
    ModuleInstance,
    #[sea_orm(
        belongs_to = "super::professors::Entity",
        from = "Column::ProfessorId",
        to = "super::professors::Column::Id"
    )]
    Professor,
    #[sea_orm(has_many = "super::ratings::Entity")]
    Ratings,
}

impl Related<super::module_instances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModuleInstance.def()
    }
}

impl Related<super::professors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_module_instance_professor(
        self,
    ) -> crate::models::catalog::entities::ModuleInstanceProfessor {
        crate::models::catalog::entities::ModuleInstanceProfessor {
            id: self.id,
            module_instance_id: self.module_instance_id,
            professor_id: self.professor_id,
        }
    }
}
