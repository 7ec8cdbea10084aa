use serde::{Deserialize, Serialize};

// view 接口的一行
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfessorRating {
    pub professor_code: String,
    pub professor_name: String,
    pub average_rating: Option<i64>,
}

// average 接口响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleProfessorRating {
    pub professor_code: String,
    pub professor_name: String,
    pub module_code: String,
    pub module_name: String,
    pub average_rating: Option<i64>,
}
