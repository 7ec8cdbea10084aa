//! 教授实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "professors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::module_instance_professors::Entity")]
    ModuleInstanceProfessors,
}

impl Related<super::module_instance_professors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModuleInstanceProfessors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_professor(self) -> crate::models::catalog::entities::Professor {
        crate::models::catalog::entities::Professor {
            id: self.id,
            code: self.code,
            name: self.name,
        }
    }
}
