//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::module_instances::Entity")]
    ModuleInstances,
}

impl Related<super::module_instances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModuleInstances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_module(self) -> crate::models::catalog::entities::Module {
        crate::models::catalog::entities::Module {
            id: self.id,
            code: self.code,
            name: self.name,
        }
    }
}
