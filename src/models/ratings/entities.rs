use serde::{Deserialize, Serialize};

use crate::models::catalog::entities::Professor;

// 评分实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub id: i64,
    pub user_id: i64,
    pub module_instance_professor_id: i64,
    pub rating: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 教授的平均分（未取整），没有评分时为 None
#[derive(Debug, Clone, PartialEq)]
pub struct ProfessorAverage {
    pub professor: Professor,
    pub average: Option<f64>,
}
