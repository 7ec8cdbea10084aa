use serde::Deserialize;

// 用户创建请求（用于存储层，password 为哈希后的值）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}
