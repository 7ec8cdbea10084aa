use serde::{Deserialize, Serialize};

// 课程
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Module {
    pub id: i64,
    pub code: String,
    pub name: String,
}

// 教授
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Professor {
    pub id: i64,
    pub code: String,
    pub name: String,
}

// 课程开课实例
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleInstance {
    pub id: i64,
    pub module_id: i64,
    pub year: i32,
    pub semester: i32,
}

// 授课关系，评分挂在它上面
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleInstanceProfessor {
    pub id: i64,
    pub module_instance_id: i64,
    pub professor_id: i64,
}
