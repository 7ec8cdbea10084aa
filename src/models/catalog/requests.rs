use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateModuleRequest {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfessorRequest {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateModuleInstanceRequest {
    pub module_id: i64,
    pub year: i32,
    /// 1 或 2
    pub semester: i32,
}
