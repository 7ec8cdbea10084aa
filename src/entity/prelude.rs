//! 预导入模块，方便使用

pub use super::module_instance_professors::{
    ActiveModel as ModuleInstanceProfessorActiveModel, Entity as ModuleInstanceProfessors,
    Model as ModuleInstanceProfessorModel,
};
pub use super::module_instances::{
    ActiveModel as ModuleInstanceActiveModel, Entity as ModuleInstances,
    Model as ModuleInstanceModel,
};
pub use super::modules::{ActiveModel as ModuleActiveModel, Entity as Modules, Model as ModuleModel};
pub use super::professors::{
    ActiveModel as ProfessorActiveModel, Entity as Professors, Model as ProfessorModel,
};
pub use super::ratings::{ActiveModel as RatingActiveModel, Entity as Ratings, Model as RatingModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
