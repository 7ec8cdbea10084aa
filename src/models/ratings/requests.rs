use serde::Deserialize;

// 评分请求（表单），数值字段保留原始字符串由服务层解析
#[derive(Debug, Deserialize)]
pub struct RateRequest {
    #[serde(rename = "professorCode", alias = "professor_code")]
    pub professor_code: Option<String>,
    #[serde(rename = "moduleCode", alias = "module_code")]
    pub module_code: Option<String>,
    pub year: Option<String>,
    pub semester: Option<String>,
    pub rating: Option<String>,
}

// 平均分查询参数
#[derive(Debug, Deserialize)]
pub struct AverageQuery {
    pub professor_code: Option<String>,
    pub module_code: Option<String>,
}

// 评分创建请求（用于存储层）
#[derive(Debug, Clone)]
pub struct CreateRatingRequest {
    pub user_id: i64,
    pub module_instance_professor_id: i64,
    pub rating: i32,
}
